use crate::{
    api::error,
    modules::auth::model::{ProviderUser, SessionTokens},
};

/// Consumed surface of the external identity provider. Session issuance,
/// password verification and token revocation all happen on the provider's
/// side; this system only forwards.
#[async_trait::async_trait]
pub trait IdentityProvider {
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionTokens, error::SystemError>;

    async fn get_user(&self, access_token: &str) -> Result<ProviderUser, error::SystemError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), error::SystemError>;
}
