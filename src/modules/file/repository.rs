use uuid::Uuid;

use crate::{
    api::error,
    modules::file::{
        model::{FileQuery, NewFile, StorageStats, UpdateFileModel},
        schema::FileEntity,
    },
};

#[async_trait::async_trait]
pub trait FileRepository {
    async fn create(&self, file: &NewFile) -> Result<FileEntity, error::SystemError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<FileEntity>, error::SystemError>;

    /// Filtered page of files plus the unpaginated match count, ordered by
    /// upload time descending.
    async fn list(&self, query: &FileQuery)
    -> Result<(Vec<FileEntity>, i64), error::SystemError>;

    /// Partial update of the mutable metadata fields. `None` when no row
    /// exists for the id.
    async fn update(
        &self,
        id: &Uuid,
        update: &UpdateFileModel,
    ) -> Result<Option<FileEntity>, error::SystemError>;

    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError>;

    async fn stats(&self) -> Result<StorageStats, error::SystemError>;
}
