use serde::Deserialize;
use serde_json::json;

use crate::{api::error, modules::file::storage::ObjectStorage};

/// Storage REST API client, authenticated with the service key.
#[derive(Clone)]
pub struct SupabaseStorage {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

#[derive(Deserialize)]
struct BucketInfo {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignedUrlBody {
    #[serde(alias = "signedURL")]
    signed_url: String,
}

impl SupabaseStorage {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            service_key: service_key.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/storage/v1{}", self.base_url, path)
    }

    fn auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header("apikey", &self.service_key).bearer_auth(&self.service_key)
    }

    async fn error_body(response: reqwest::Response) -> error::SystemError {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
            .unwrap_or_else(|| format!("object storage returned {}", status));
        error::SystemError::external(message)
    }
}

#[async_trait::async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn list_buckets(&self) -> Result<Vec<String>, error::SystemError> {
        let response = self.auth(self.http.get(self.endpoint("/bucket"))).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        let buckets = response.json::<Vec<BucketInfo>>().await?;
        Ok(buckets.into_iter().map(|b| b.name).collect())
    }

    async fn create_bucket(
        &self,
        name: &str,
        public: bool,
        size_limit: usize,
    ) -> Result<(), error::SystemError> {
        let response = self
            .auth(self.http.post(self.endpoint("/bucket")))
            .json(&json!({
                "name": name,
                "id": name,
                "public": public,
                "file_size_limit": size_limit,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        Ok(())
    }

    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), error::SystemError> {
        let response = self
            .auth(self.http.post(self.endpoint(&format!("/object/{}/{}", bucket, path))))
            .header("Content-Type", content_type.to_string())
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        Ok(())
    }

    async fn download(&self, bucket: &str, path: &str) -> Result<Vec<u8>, error::SystemError> {
        let response = self
            .auth(self.http.get(self.endpoint(&format!("/object/{}/{}", bucket, path))))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), error::SystemError> {
        let response = self
            .auth(self.http.delete(self.endpoint(&format!("/object/{}", bucket))))
            .json(&json!({ "prefixes": paths }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        self.endpoint(&format!("/object/public/{}/{}", bucket, path))
    }

    async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        expires_in: u64,
    ) -> Result<String, error::SystemError> {
        let response = self
            .auth(self.http.post(self.endpoint(&format!("/object/sign/{}/{}", bucket, path))))
            .json(&json!({ "expiresIn": expires_in }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        let body = response.json::<SignedUrlBody>().await?;
        // The API returns a path relative to /storage/v1.
        Ok(self.endpoint(&body.signed_url))
    }
}
