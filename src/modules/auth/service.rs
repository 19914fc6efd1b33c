use log::info;
use std::sync::Arc;

use crate::ENV;
use crate::api::error;
use crate::modules::auth::model::{ProviderUser, SessionTokens};
use crate::modules::auth::provider::IdentityProvider;

#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn IdentityProvider + Send + Sync>,
}

impl AuthService {
    pub fn with_dependencies(provider: Arc<dyn IdentityProvider + Send + Sync>) -> Self {
        info!("AuthService initialized with dependencies");
        AuthService { provider }
    }

    /// Signs in with the configured demo credentials and returns the session
    /// issued by the provider.
    pub async fn login(&self) -> Result<SessionTokens, error::SystemError> {
        self.provider.sign_in(&ENV.login_email, &ENV.login_password).await
    }

    pub async fn current_user(&self, token: &str) -> Result<ProviderUser, error::SystemError> {
        self.provider.get_user(token).await
    }

    /// Provider-side revocation is best-effort; the cookie is cleared by the
    /// handler either way.
    pub async fn logout(&self, token: &str) -> Result<(), error::SystemError> {
        if let Err(err) = self.provider.sign_out(token).await {
            log::warn!("Provider sign-out failed: {}", err);
        }
        Ok(())
    }
}
