pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_pg;
pub mod route;
pub mod schema;
pub mod service;
pub mod storage;
pub mod storage_supabase;

pub use model::{StorageConfig, UploadOptions};
pub use repository::FileRepository;
pub use repository_pg::FileRepositoryPg;
pub use schema::{FileCategory, FileEntity};
pub use service::FileService;
pub use storage::ObjectStorage;
pub use storage_supabase::SupabaseStorage;
