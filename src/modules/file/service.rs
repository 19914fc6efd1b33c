use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::file::{
    model::{FileListResult, FileQuery, NewFile, StorageConfig, StorageStats, UploadOptions, UpdateFileModel},
    repository::FileRepository,
    schema::{FileCategory, FileEntity},
    storage::ObjectStorage,
};

/// MIME-prefix heuristic used when the uploader supplies no category.
pub fn category_from_mime(mime_type: &str) -> FileCategory {
    if mime_type.starts_with("image/") {
        return FileCategory::Image;
    }
    if mime_type.starts_with("video/") {
        return FileCategory::Video;
    }
    if mime_type.starts_with("audio/") {
        return FileCategory::Audio;
    }
    if mime_type.contains("pdf") || mime_type.contains("document") || mime_type.contains("text") {
        return FileCategory::Document;
    }
    if mime_type.contains("zip") || mime_type.contains("rar") || mime_type.contains("tar") {
        return FileCategory::Archive;
    }
    FileCategory::Other
}

/// Restricts a path segment to characters that survive a URL unchanged.
/// Anything else (`#`, `?`, spaces, control characters) would make the
/// storage key diverge from the recorded `path` column.
fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect()
}

/// Derives a collision-free storage location: `{folder?}/{base}_{uuid}{.ext}`.
/// Returns the unique filename and the bucket-relative path.
pub fn generate_storage_path(original_name: &str, folder: Option<&str>) -> (String, String) {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(sanitize_segment);
    let base = Path::new(original_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| sanitize_segment(s))
        .unwrap_or_else(|| "file".to_string());
    let unique_id = Uuid::new_v4();

    let filename = match extension {
        Some(ext) => format!("{}_{}.{}", base, unique_id, ext),
        None => format!("{}_{}", base, unique_id),
    };

    let path = match folder {
        Some(folder) => {
            let folder = folder
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(sanitize_segment)
                .collect::<Vec<_>>()
                .join("/");
            if folder.is_empty() { filename.clone() } else { format!("{}/{}", folder, filename) }
        }
        None => filename.clone(),
    };

    (filename, path)
}

pub struct FileService<R, S>
where
    R: FileRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    repo: Arc<R>,
    storage: Arc<S>,
    config: StorageConfig,
}

impl<R, S> Clone for FileService<R, S>
where
    R: FileRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    fn clone(&self) -> Self {
        Self { repo: self.repo.clone(), storage: self.storage.clone(), config: self.config.clone() }
    }
}

impl<R, S> FileService<R, S>
where
    R: FileRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    pub fn with_dependencies(repo: Arc<R>, storage: Arc<S>, config: StorageConfig) -> Self {
        log::info!("FileService initialized with dependencies");
        Self { repo, storage, config }
    }

    /// Validates, writes bytes to the object store and persists the metadata
    /// row. Validation failures never reach the store; a store failure never
    /// reaches the database.
    pub async fn upload_file(
        &self,
        options: UploadOptions,
        config: Option<StorageConfig>,
    ) -> Result<FileEntity, error::SystemError> {
        let config = config.unwrap_or_else(|| self.config.clone());

        if options.size > config.max_file_size {
            return Err(error::SystemError::bad_request(format!(
                "File size exceeds maximum allowed size of {} bytes",
                config.max_file_size
            )));
        }

        if let Some(allowed) = &config.allowed_mime_types {
            if !allowed.iter().any(|m| m == &options.mime_type) {
                return Err(error::SystemError::bad_request(format!(
                    "File type {} is not allowed",
                    options.mime_type
                )));
            }
        }

        let (filename, path) = generate_storage_path(&options.filename, options.folder.as_deref());

        self.storage
            .upload(&config.bucket_name, &path, options.bytes, &options.mime_type)
            .await?;

        let public_url = if config.public_access {
            Some(self.storage.public_url(&config.bucket_name, &path))
        } else {
            None
        };

        let category =
            options.category.unwrap_or_else(|| category_from_mime(&options.mime_type));

        // No compensating removal if this insert fails: the object is already
        // in the store and stays there.
        let new_file = NewFile {
            filename,
            original_name: options.filename,
            size: options.size as i64,
            mime_type: options.mime_type,
            category,
            description: options.description,
            tags: options.tags,
            folder: options.folder,
            bucket_name: config.bucket_name,
            path,
            public_url,
            uploaded_by: options.uploaded_by,
        };

        self.repo.create(&new_file).await
    }

    pub async fn get_by_id(&self, id: &Uuid) -> Result<Option<FileEntity>, error::SystemError> {
        self.repo.find_by_id(id).await
    }

    /// Bytes plus metadata, or `None` when either the row or the object is
    /// unavailable.
    pub async fn download(
        &self,
        id: &Uuid,
    ) -> Result<Option<(Vec<u8>, FileEntity)>, error::SystemError> {
        let Some(file) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        match self.storage.download(&file.bucket_name, &file.path).await {
            Ok(bytes) => Ok(Some((bytes, file))),
            Err(err) => {
                log::error!("Error downloading {} from storage: {}", file.path, err);
                Ok(None)
            }
        }
    }

    pub async fn list_files(&self, query: FileQuery) -> Result<FileListResult, error::SystemError> {
        let (files, total) = self.repo.list(&query).await?;
        let limit = query.limit as i64;
        let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

        Ok(FileListResult { files, total, page: query.page, limit: query.limit, total_pages })
    }

    pub async fn update_metadata(
        &self,
        id: &Uuid,
        updates: UpdateFileModel,
    ) -> Result<Option<FileEntity>, error::SystemError> {
        self.repo.update(id, &updates).await
    }

    /// Removes the object first; the metadata row is only deleted once the
    /// store confirmed. A storage failure aborts with the row retained.
    pub async fn delete_file(&self, id: &Uuid) -> Result<(), error::SystemError> {
        let file = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("File not found"))?;

        self.storage.remove(&file.bucket_name, std::slice::from_ref(&file.path)).await?;

        self.repo.delete(id).await?;
        Ok(())
    }

    pub async fn get_signed_url(
        &self,
        id: &Uuid,
        expires_in: Option<u64>,
    ) -> Result<Option<String>, error::SystemError> {
        let Some(file) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let expires_in = expires_in.unwrap_or(3600);
        match self.storage.create_signed_url(&file.bucket_name, &file.path, expires_in).await {
            Ok(url) => Ok(Some(url)),
            Err(err) => {
                log::error!("Error creating signed URL for {}: {}", file.path, err);
                Ok(None)
            }
        }
    }

    /// Best-effort bucket initialization: create only when absent, swallow
    /// and log every failure.
    pub async fn ensure_bucket(&self, name: Option<&str>) {
        let bucket = name.unwrap_or(&self.config.bucket_name);

        let buckets = match self.storage.list_buckets().await {
            Ok(buckets) => buckets,
            Err(err) => {
                log::error!("Error listing buckets: {}", err);
                return;
            }
        };

        if buckets.iter().any(|b| b == bucket) {
            return;
        }

        match self
            .storage
            .create_bucket(bucket, self.config.public_access, self.config.max_file_size)
            .await
        {
            Ok(()) => log::info!("Bucket {} created successfully", bucket),
            Err(err) => log::error!("Error creating bucket {}: {}", bucket, err),
        }
    }

    pub async fn storage_stats(&self) -> Result<StorageStats, error::SystemError> {
        self.repo.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockRepo {
        files: Mutex<Vec<FileEntity>>,
        total: Mutex<i64>,
        delete_calls: AtomicUsize,
    }

    impl MockRepo {
        fn seed(&self, entity: FileEntity) {
            self.files.lock().unwrap().push(entity);
        }
    }

    #[async_trait::async_trait]
    impl FileRepository for MockRepo {
        async fn create(&self, file: &NewFile) -> Result<FileEntity, error::SystemError> {
            let entity = FileEntity {
                id: Uuid::new_v4(),
                filename: file.filename.clone(),
                original_name: file.original_name.clone(),
                size: file.size,
                mime_type: file.mime_type.clone(),
                category: file.category,
                description: file.description.clone(),
                tags: file.tags.clone(),
                folder: file.folder.clone(),
                bucket_name: file.bucket_name.clone(),
                path: file.path.clone(),
                public_url: file.public_url.clone(),
                uploaded_by: file.uploaded_by,
                uploaded_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.files.lock().unwrap().push(entity.clone());
            Ok(entity)
        }

        async fn find_by_id(&self, id: &Uuid) -> Result<Option<FileEntity>, error::SystemError> {
            Ok(self.files.lock().unwrap().iter().find(|f| &f.id == id).cloned())
        }

        async fn list(
            &self,
            _query: &FileQuery,
        ) -> Result<(Vec<FileEntity>, i64), error::SystemError> {
            Ok((self.files.lock().unwrap().clone(), *self.total.lock().unwrap()))
        }

        async fn update(
            &self,
            id: &Uuid,
            update: &UpdateFileModel,
        ) -> Result<Option<FileEntity>, error::SystemError> {
            let mut files = self.files.lock().unwrap();
            let Some(file) = files.iter_mut().find(|f| &f.id == id) else {
                return Ok(None);
            };
            if let Some(filename) = &update.filename {
                file.filename = filename.clone();
            }
            if let Some(description) = &update.description {
                file.description = Some(description.clone());
            }
            if let Some(category) = update.category {
                file.category = category;
            }
            if let Some(tags) = &update.tags {
                file.tags = Some(tags.clone());
            }
            if let Some(folder) = &update.folder {
                file.folder = Some(folder.clone());
            }
            Ok(Some(file.clone()))
        }

        async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            let mut files = self.files.lock().unwrap();
            let before = files.len();
            files.retain(|f| &f.id != id);
            Ok(files.len() < before)
        }

        async fn stats(&self) -> Result<StorageStats, error::SystemError> {
            let files = self.files.lock().unwrap();
            let mut by_category: HashMap<String, i64> = HashMap::new();
            for file in files.iter() {
                *by_category.entry(file.category.as_str().to_string()).or_insert(0) += 1;
            }
            Ok(StorageStats {
                total_files: files.len() as i64,
                total_size: files.iter().map(|f| f.size).sum(),
                by_category,
            })
        }
    }

    #[derive(Default)]
    struct MockStorage {
        uploads: Mutex<Vec<(String, String)>>,
        remove_calls: AtomicUsize,
        fail_remove: bool,
        fail_upload: bool,
        signed_requests: Mutex<Vec<u64>>,
    }

    #[async_trait::async_trait]
    impl ObjectStorage for MockStorage {
        async fn list_buckets(&self) -> Result<Vec<String>, error::SystemError> {
            Ok(vec!["files".to_string()])
        }

        async fn create_bucket(
            &self,
            _name: &str,
            _public: bool,
            _size_limit: usize,
        ) -> Result<(), error::SystemError> {
            Ok(())
        }

        async fn upload(
            &self,
            bucket: &str,
            path: &str,
            _bytes: Vec<u8>,
            _content_type: &str,
        ) -> Result<(), error::SystemError> {
            if self.fail_upload {
                return Err(error::SystemError::external("storage unavailable"));
            }
            self.uploads.lock().unwrap().push((bucket.to_string(), path.to_string()));
            Ok(())
        }

        async fn download(
            &self,
            _bucket: &str,
            _path: &str,
        ) -> Result<Vec<u8>, error::SystemError> {
            Ok(b"bytes".to_vec())
        }

        async fn remove(&self, _bucket: &str, _paths: &[String]) -> Result<(), error::SystemError> {
            self.remove_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_remove {
                return Err(error::SystemError::external("storage deletion failed"));
            }
            Ok(())
        }

        fn public_url(&self, bucket: &str, path: &str) -> String {
            format!("http://storage.local/object/public/{}/{}", bucket, path)
        }

        async fn create_signed_url(
            &self,
            _bucket: &str,
            path: &str,
            expires_in: u64,
        ) -> Result<String, error::SystemError> {
            self.signed_requests.lock().unwrap().push(expires_in);
            Ok(format!("http://storage.local/object/sign/{}?token=t", path))
        }
    }

    fn service_with(
        repo: Arc<MockRepo>,
        storage: Arc<MockStorage>,
        config: StorageConfig,
    ) -> FileService<MockRepo, MockStorage> {
        FileService::with_dependencies(repo, storage, config)
    }

    fn upload_options(filename: &str, mime_type: &str, size: usize) -> UploadOptions {
        UploadOptions {
            filename: filename.to_string(),
            bytes: vec![0u8; size],
            mime_type: mime_type.to_string(),
            size,
            category: None,
            description: None,
            tags: None,
            folder: None,
            uploaded_by: None,
        }
    }

    fn seeded_entity(repo: &MockRepo) -> FileEntity {
        let entity = FileEntity {
            id: Uuid::new_v4(),
            filename: "report_abc.pdf".to_string(),
            original_name: "report.pdf".to_string(),
            size: 1024,
            mime_type: "application/pdf".to_string(),
            category: FileCategory::Document,
            description: Some("quarterly report".to_string()),
            tags: None,
            folder: Some("docs".to_string()),
            bucket_name: "files".to_string(),
            path: "docs/report_abc.pdf".to_string(),
            public_url: None,
            uploaded_by: None,
            uploaded_at: Utc::now(),
            updated_at: Utc::now(),
        };
        repo.seed(entity.clone());
        entity
    }

    #[actix_web::test]
    async fn rejects_oversized_upload_without_touching_storage() {
        let repo = Arc::new(MockRepo::default());
        let storage = Arc::new(MockStorage::default());
        let config =
            StorageConfig { max_file_size: 10 * 1024 * 1024, ..StorageConfig::default() };
        let service = service_with(repo.clone(), storage.clone(), config);

        let result = service
            .upload_file(upload_options("big.bin", "application/octet-stream", 20 * 1024 * 1024), None)
            .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
        assert!(storage.uploads.lock().unwrap().is_empty());
        assert!(repo.files.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_disallowed_mime_type_without_touching_storage() {
        let repo = Arc::new(MockRepo::default());
        let storage = Arc::new(MockStorage::default());
        let config = StorageConfig {
            allowed_mime_types: Some(vec!["image/jpeg".to_string(), "image/png".to_string()]),
            ..StorageConfig::default()
        };
        let service = service_with(repo.clone(), storage.clone(), config);

        let result =
            service.upload_file(upload_options("doc.pdf", "application/pdf", 100), None).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("is not allowed"));
        assert!(storage.uploads.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn upload_persists_metadata_after_storage_write() {
        let repo = Arc::new(MockRepo::default());
        let storage = Arc::new(MockStorage::default());
        let service = service_with(repo.clone(), storage.clone(), StorageConfig::default());

        let mut options = upload_options("photo.png", "image/png", 512);
        options.folder = Some("avatars".to_string());

        let entity = service.upload_file(options, None).await.unwrap();

        assert_eq!(entity.original_name, "photo.png");
        assert_eq!(entity.category, FileCategory::Image);
        assert!(entity.path.starts_with("avatars/photo_"));
        assert!(entity.path.ends_with(".png"));
        assert!(entity.public_url.is_none());

        let uploads = storage.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].1, entity.path);
    }

    #[actix_web::test]
    async fn storage_failure_skips_metadata_write() {
        let repo = Arc::new(MockRepo::default());
        let storage = Arc::new(MockStorage { fail_upload: true, ..MockStorage::default() });
        let service = service_with(repo.clone(), storage, StorageConfig::default());

        let result = service.upload_file(upload_options("a.txt", "text/plain", 10), None).await;

        assert!(result.is_err());
        assert!(repo.files.lock().unwrap().is_empty());
    }

    #[test]
    fn storage_path_embeds_a_uuid_between_base_and_extension() {
        let (filename, path) = generate_storage_path("report.pdf", Some("docs"));

        assert!(path.starts_with("docs/report_"));
        assert!(path.ends_with(".pdf"));
        assert_eq!(path, format!("docs/{}", filename));

        let middle = filename
            .strip_prefix("report_")
            .and_then(|rest| rest.strip_suffix(".pdf"))
            .unwrap();
        assert!(Uuid::parse_str(middle).is_ok());
    }

    #[test]
    fn identical_names_produce_distinct_paths() {
        let (_, first) = generate_storage_path("photo.jpg", None);
        let (_, second) = generate_storage_path("photo.jpg", None);
        assert_ne!(first, second);
    }

    #[test]
    fn path_without_extension_has_no_trailing_dot() {
        let (filename, _) = generate_storage_path("README", None);
        assert!(filename.starts_with("README_"));
        assert!(!filename.contains('.'));
    }

    #[test]
    fn storage_path_strips_url_special_characters() {
        // A '#' or '?' in the key would truncate the object URL, storing
        // the bytes under a different key than the path column records.
        let (filename, path) = generate_storage_path("report#final?.pdf", Some("docs#1/v 2"));

        assert_eq!(path, format!("docs_1/v_2/{}", filename));
        assert!(filename.starts_with("report_final__"));
        assert!(filename.ends_with(".pdf"));
        for forbidden in ['#', '?', '%', ' '] {
            assert!(!path.contains(forbidden));
        }
    }

    #[test]
    fn similar_unsafe_names_still_get_distinct_keys() {
        let (_, first) = generate_storage_path("a#1.pdf", None);
        let (_, second) = generate_storage_path("a#2.pdf", None);
        assert_ne!(first, second);
    }

    #[test]
    fn infers_category_from_mime_type() {
        assert_eq!(category_from_mime("image/png"), FileCategory::Image);
        assert_eq!(category_from_mime("video/mp4"), FileCategory::Video);
        assert_eq!(category_from_mime("audio/ogg"), FileCategory::Audio);
        assert_eq!(category_from_mime("application/pdf"), FileCategory::Document);
        assert_eq!(category_from_mime("text/plain"), FileCategory::Document);
        assert_eq!(category_from_mime("application/zip"), FileCategory::Archive);
        assert_eq!(category_from_mime("application/x-tar"), FileCategory::Archive);
        assert_eq!(category_from_mime("application/octet-stream"), FileCategory::Other);
    }

    #[actix_web::test]
    async fn delete_missing_file_reports_not_found_and_skips_storage() {
        let repo = Arc::new(MockRepo::default());
        let storage = Arc::new(MockStorage::default());
        let service = service_with(repo, storage.clone(), StorageConfig::default());

        let err = service.delete_file(&Uuid::new_v4()).await.unwrap_err();

        assert!(err.to_string().contains("File not found"));
        assert_eq!(storage.remove_calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn delete_keeps_metadata_when_storage_removal_fails() {
        let repo = Arc::new(MockRepo::default());
        let entity = seeded_entity(&repo);
        let storage = Arc::new(MockStorage { fail_remove: true, ..MockStorage::default() });
        let service = service_with(repo.clone(), storage, StorageConfig::default());

        let result = service.delete_file(&entity.id).await;

        assert!(result.is_err());
        assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 0);
        assert_eq!(repo.files.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn delete_removes_bytes_then_row() {
        let repo = Arc::new(MockRepo::default());
        let entity = seeded_entity(&repo);
        let storage = Arc::new(MockStorage::default());
        let service = service_with(repo.clone(), storage.clone(), StorageConfig::default());

        service.delete_file(&entity.id).await.unwrap();

        assert_eq!(storage.remove_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 1);
        assert!(repo.files.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn list_rounds_total_pages_up() {
        let repo = Arc::new(MockRepo::default());
        let storage = Arc::new(MockStorage::default());
        let service = service_with(repo.clone(), storage, StorageConfig::default());

        *repo.total.lock().unwrap() = 2;
        let result = service.list_files(FileQuery { page: 1, limit: 10, ..Default::default() }).await.unwrap();
        assert_eq!(result.total_pages, 1);

        *repo.total.lock().unwrap() = 11;
        let result = service.list_files(FileQuery { page: 1, limit: 10, ..Default::default() }).await.unwrap();
        assert_eq!(result.total_pages, 2);

        *repo.total.lock().unwrap() = 0;
        let result = service.list_files(FileQuery { page: 1, limit: 10, ..Default::default() }).await.unwrap();
        assert_eq!(result.total_pages, 0);
    }

    #[actix_web::test]
    async fn update_applies_only_allow_listed_fields() {
        let repo = Arc::new(MockRepo::default());
        let entity = seeded_entity(&repo);
        let storage = Arc::new(MockStorage::default());
        let service = service_with(repo.clone(), storage, StorageConfig::default());

        // Unknown keys are dropped at deserialization.
        let updates: UpdateFileModel = serde_json::from_value(serde_json::json!({
            "foo": "bar",
            "filename": "renamed.pdf",
        }))
        .unwrap();

        let updated = service.update_metadata(&entity.id, updates).await.unwrap().unwrap();

        assert_eq!(updated.filename, "renamed.pdf");
        assert_eq!(updated.description, entity.description);
        assert_eq!(updated.folder, entity.folder);
    }

    #[actix_web::test]
    async fn update_on_missing_id_returns_none() {
        let repo = Arc::new(MockRepo::default());
        let storage = Arc::new(MockStorage::default());
        let service = service_with(repo, storage, StorageConfig::default());

        let result = service
            .update_metadata(&Uuid::new_v4(), UpdateFileModel::default())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[actix_web::test]
    async fn signed_url_defaults_to_one_hour() {
        let repo = Arc::new(MockRepo::default());
        let entity = seeded_entity(&repo);
        let storage = Arc::new(MockStorage::default());
        let service = service_with(repo, storage.clone(), StorageConfig::default());

        let url = service.get_signed_url(&entity.id, None).await.unwrap();

        assert!(url.is_some());
        assert_eq!(*storage.signed_requests.lock().unwrap(), vec![3600]);
    }

    #[actix_web::test]
    async fn signed_url_for_missing_file_is_none() {
        let repo = Arc::new(MockRepo::default());
        let storage = Arc::new(MockStorage::default());
        let service = service_with(repo, storage.clone(), StorageConfig::default());

        let url = service.get_signed_url(&Uuid::new_v4(), Some(60)).await.unwrap();

        assert!(url.is_none());
        assert!(storage.signed_requests.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn download_bundles_bytes_with_metadata() {
        let repo = Arc::new(MockRepo::default());
        let entity = seeded_entity(&repo);
        let storage = Arc::new(MockStorage::default());
        let service = service_with(repo, storage, StorageConfig::default());

        let (bytes, metadata) = service.download(&entity.id).await.unwrap().unwrap();

        assert_eq!(bytes, b"bytes");
        assert_eq!(metadata.id, entity.id);
        assert!(service.download(&Uuid::new_v4()).await.unwrap().is_none());
    }
}
