use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::user::model::{AudienceLevel, UserView};
use crate::modules::user::repository::UserRepository;
use crate::modules::user::view;
use crate::utils::Claims;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    /// All users, each projected at the level the requester is entitled to
    /// for that particular row (capped by the explicitly requested level).
    pub async fn list(
        &self,
        claims: &Claims,
        requested: AudienceLevel,
    ) -> Result<Vec<UserView>, error::SystemError> {
        let users = self.repo.find_all().await?;
        let views = users
            .iter()
            .map(|user| {
                let resolved = view::resolve_level(&claims.role, &user.id, &claims.sub);
                view::project(user, view::effective_level(requested, resolved))
            })
            .collect();
        Ok(views)
    }

    pub async fn get(
        &self,
        claims: &Claims,
        id: Uuid,
        requested: AudienceLevel,
    ) -> Result<UserView, error::SystemError> {
        let user = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("User not found"))?;

        let resolved = view::resolve_level(&claims.role, &user.id, &claims.sub);
        Ok(view::project(&user, view::effective_level(requested, resolved)))
    }

    /// Forced public projection, independent of who asks.
    pub async fn get_public(&self, id: Uuid) -> Result<UserView, error::SystemError> {
        let user = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("User not found"))?;
        Ok(view::project(&user, AudienceLevel::Public))
    }
}
