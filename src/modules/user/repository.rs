use uuid::Uuid;

use crate::{api::error, modules::user::schema::UserEntity};

/// Read-only access to the provider-owned `auth.users` table.
#[async_trait::async_trait]
pub trait UserRepository {
    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<UserEntity>, error::SystemError>;
}
