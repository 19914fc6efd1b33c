use serde_json::json;

use crate::{
    api::error,
    modules::auth::{
        model::{ProviderUser, SessionTokens},
        provider::IdentityProvider,
    },
};

/// GoTrue REST client. The service key never leaves this struct; callers
/// only ever see issued session tokens.
#[derive(Clone)]
pub struct GoTrueProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoTrueProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into(), api_key: api_key.into() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    async fn error_body(response: reqwest::Response) -> error::SystemError {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| {
                v.get("msg")
                    .or_else(|| v.get("error_description"))
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
            .unwrap_or_else(|| format!("identity provider returned {}", status));

        if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::UNAUTHORIZED
        {
            error::SystemError::unauthorized(message)
        } else {
            error::SystemError::external(message)
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for GoTrueProvider {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionTokens, error::SystemError> {
        let response = self
            .http
            .post(self.endpoint("/token?grant_type=password"))
            .header("apikey", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        Ok(response.json::<SessionTokens>().await?)
    }

    async fn get_user(&self, access_token: &str) -> Result<ProviderUser, error::SystemError> {
        let response = self
            .http
            .get(self.endpoint("/user"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        Ok(response.json::<ProviderUser>().await?)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), error::SystemError> {
        let response = self
            .http
            .post(self.endpoint("/logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_body(response).await);
        }

        Ok(())
    }
}
