use actix_web::{HttpRequest, get, web};
use uuid::Uuid;

use crate::middlewares::get_claims;
use crate::modules::user::model::{AudienceLevel, UserView, ViewQuery};
use crate::modules::user::service::UserService;
use crate::{
    api::{error, success},
    utils::ValidatedQuery,
};

#[get("")]
pub async fn list_users(
    user_service: web::Data<UserService>,
    query: ValidatedQuery<ViewQuery>,
    req: HttpRequest,
) -> Result<success::Success<Vec<UserView>>, error::Error> {
    let claims = get_claims(&req)?;
    let requested = AudienceLevel::parse(query.0.view.as_deref());
    let users = user_service.list(&claims, requested).await?;
    Ok(success::Success::ok(Some(users)).message("Users retrieved successfully"))
}

#[get("/{id:[0-9a-fA-F-]{36}}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
    query: ValidatedQuery<ViewQuery>,
    req: HttpRequest,
) -> Result<success::Success<UserView>, error::Error> {
    let claims = get_claims(&req)?;
    let requested = AudienceLevel::parse(query.0.view.as_deref());
    let user = user_service.get(&claims, user_id.into_inner(), requested).await?;
    Ok(success::Success::ok(Some(user)).message("User retrieved successfully"))
}

#[get("/{id:[0-9a-fA-F-]{36}}/public")]
pub async fn get_user_public(
    user_service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
) -> Result<success::Success<UserView>, error::Error> {
    let user = user_service.get_public(user_id.into_inner()).await?;
    Ok(success::Success::ok(Some(user)).message("User retrieved successfully"))
}

#[get("/{id:[0-9a-fA-F-]{36}}/profile")]
pub async fn get_user_profile(
    user_service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<UserView>, error::Error> {
    let claims = get_claims(&req)?;
    // Authenticated view of one's own profile, silently public otherwise.
    let user =
        user_service.get(&claims, user_id.into_inner(), AudienceLevel::Authenticated).await?;
    Ok(success::Success::ok(Some(user)).message("Profile retrieved successfully"))
}
