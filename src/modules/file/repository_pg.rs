use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    api::error,
    modules::file::{
        model::{FileQuery, NewFile, StorageStats, UpdateFileModel},
        repository::FileRepository,
        schema::{FileCategory, FileEntity},
    },
};

#[derive(Clone)]
pub struct FileRepositoryPg {
    pool: sqlx::PgPool,
}

impl FileRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    fn search_pattern(search: &str) -> String {
        format!("%{}%", search.replace('%', "\\%").replace('_', "\\_"))
    }
}

#[async_trait::async_trait]
impl FileRepository for FileRepositoryPg {
    async fn create(&self, file: &NewFile) -> Result<FileEntity, error::SystemError> {
        let entity = sqlx::query_as::<_, FileEntity>(
            r#"
            INSERT INTO files
                (filename, original_name, size, mime_type, category, description,
                 tags, folder, bucket_name, path, public_url, uploaded_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&file.filename)
        .bind(&file.original_name)
        .bind(file.size)
        .bind(&file.mime_type)
        .bind(file.category)
        .bind(&file.description)
        .bind(&file.tags)
        .bind(&file.folder)
        .bind(&file.bucket_name)
        .bind(&file.path)
        .bind(&file.public_url)
        .bind(file.uploaded_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<FileEntity>, error::SystemError> {
        let file = sqlx::query_as::<_, FileEntity>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(file)
    }

    async fn list(
        &self,
        query: &FileQuery,
    ) -> Result<(Vec<FileEntity>, i64), error::SystemError> {
        let pattern = query.search.as_deref().map(Self::search_pattern);
        let offset = (query.page.saturating_sub(1) as i64) * query.limit as i64;

        let files = sqlx::query_as::<_, FileEntity>(
            r#"
            SELECT * FROM files
            WHERE ($1::file_category IS NULL OR category = $1)
              AND ($2::text IS NULL OR folder = $2)
              AND ($3::uuid IS NULL OR uploaded_by = $3)
              AND ($4::text IS NULL
                   OR filename ILIKE $4
                   OR original_name ILIKE $4
                   OR description ILIKE $4)
            ORDER BY uploaded_at DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(query.category)
        .bind(&query.folder)
        .bind(query.uploaded_by)
        .bind(&pattern)
        .bind(query.limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM files
            WHERE ($1::file_category IS NULL OR category = $1)
              AND ($2::text IS NULL OR folder = $2)
              AND ($3::uuid IS NULL OR uploaded_by = $3)
              AND ($4::text IS NULL
                   OR filename ILIKE $4
                   OR original_name ILIKE $4
                   OR description ILIKE $4)
            "#,
        )
        .bind(query.category)
        .bind(&query.folder)
        .bind(query.uploaded_by)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        Ok((files, total))
    }

    async fn update(
        &self,
        id: &Uuid,
        update: &UpdateFileModel,
    ) -> Result<Option<FileEntity>, error::SystemError> {
        let file = sqlx::query_as::<_, FileEntity>(
            r#"
            UPDATE files
            SET
                filename    = COALESCE($2, filename),
                description = COALESCE($3, description),
                category    = COALESCE($4, category),
                tags        = COALESCE($5, tags),
                folder      = COALESCE($6, folder),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.filename)
        .bind(&update.description)
        .bind(update.category)
        .bind(&update.tags)
        .bind(&update.folder)
        .fetch_optional(&self.pool)
        .await?;

        Ok(file)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError> {
        let rows = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }

    async fn stats(&self) -> Result<StorageStats, error::SystemError> {
        let (total_files, total_size): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(size), 0)::bigint FROM files")
                .fetch_one(&self.pool)
                .await?;

        let rows: Vec<(FileCategory, i64)> =
            sqlx::query_as("SELECT category, COUNT(*) FROM files GROUP BY category")
                .fetch_all(&self.pool)
                .await?;

        let by_category: HashMap<String, i64> =
            rows.into_iter().map(|(category, count)| (category.as_str().to_string(), count)).collect();

        Ok(StorageStats { total_files, total_size, by_category })
    }
}
