use crate::api::error;

/// Consumed surface of the external object store. Implementations hold the
/// credentials; nothing above this trait ever sees them.
#[async_trait::async_trait]
pub trait ObjectStorage {
    async fn list_buckets(&self) -> Result<Vec<String>, error::SystemError>;

    async fn create_bucket(
        &self,
        name: &str,
        public: bool,
        size_limit: usize,
    ) -> Result<(), error::SystemError>;

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), error::SystemError>;

    async fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, error::SystemError>;

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), error::SystemError>;

    fn public_url(&self, bucket: &str, path: &str) -> String;

    async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in: u64,
    ) -> Result<String, error::SystemError>;
}
