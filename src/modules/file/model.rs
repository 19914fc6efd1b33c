use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use crate::modules::file::schema::{FileCategory, FileEntity};

/// One upload request as handed to the service by the multipart handler.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub size: usize,
    pub category: Option<FileCategory>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub folder: Option<String>,
    pub uploaded_by: Option<Uuid>,
}

/// Per-call storage configuration. `None` for `allowed_mime_types` means no
/// MIME restriction.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket_name: String,
    pub max_file_size: usize,
    pub allowed_mime_types: Option<Vec<String>>,
    pub public_access: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket_name: "files".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            allowed_mime_types: None,
            public_access: false,
        }
    }
}

/// New metadata row, inserted only after the object store accepted the bytes.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub filename: String,
    pub original_name: String,
    pub size: i64,
    pub mime_type: String,
    pub category: FileCategory,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub folder: Option<String>,
    pub bucket_name: String,
    pub path: String,
    pub public_url: Option<String>,
    pub uploaded_by: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct FileQueryModel {
    pub category: Option<FileCategory>,
    pub folder: Option<String>,
    pub search: Option<String>,
    pub uploaded_by: Option<Uuid>,
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

/// Query with pagination defaults applied (page=1, limit=10).
#[derive(Debug, Clone, Default)]
pub struct FileQuery {
    pub category: Option<FileCategory>,
    pub folder: Option<String>,
    pub search: Option<String>,
    pub uploaded_by: Option<Uuid>,
    pub page: u32,
    pub limit: u32,
}

impl From<FileQueryModel> for FileQuery {
    fn from(model: FileQueryModel) -> Self {
        FileQuery {
            category: model.category,
            folder: model.folder,
            search: model.search,
            uploaded_by: model.uploaded_by,
            page: model.page.unwrap_or(1),
            limit: model.limit.unwrap_or(10),
        }
    }
}

/// Mutable metadata fields. Anything else sent by the client is dropped at
/// deserialization, which is what enforces the update allow-list.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFileModel {
    #[validate(length(min = 1, message = "Filename cannot be empty"))]
    pub filename: Option<String>,
    pub description: Option<String>,
    pub category: Option<FileCategory>,
    pub tags: Option<Vec<String>>,
    pub folder: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FileListResult {
    pub files: Vec<FileEntity>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

#[derive(Debug, Serialize)]
pub struct StorageStats {
    pub total_files: i64,
    pub total_size: i64,
    pub by_category: HashMap<String, i64>,
}

#[derive(Debug, Serialize)]
pub struct SignedUrlResponse {
    pub url: String,
    pub expires_in: u64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignedUrlQuery {
    #[serde(alias = "expiresIn")]
    #[validate(range(min = 1, max = 604800, message = "expires_in must be between 1 and 604800"))]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct InitBucketModel {
    #[validate(length(min = 1, message = "Bucket name cannot be empty"))]
    pub bucket_name: Option<String>,
}
