use actix_web::{
    HttpRequest,
    cookie::{Cookie, time},
    get, post, web,
};

use crate::api::{error, success};
use crate::modules::auth::{model, service::AuthService};

const SESSION_COOKIE: &str = "token";

fn session_token(req: &HttpRequest) -> Result<String, error::Error> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| error::Error::unauthorized("Missing session token"))
}

#[get("/me")]
pub async fn me(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<success::Success<model::ProviderUser>, error::Error> {
    let token = session_token(&req)?;
    let user = auth_service.current_user(&token).await?;
    Ok(success::Success::ok(Some(user)).message("Current user retrieved successfully"))
}

#[get("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
) -> Result<success::Success<model::LoginResponse>, error::Error> {
    let session = auth_service.login().await?;

    let session_cookie = Cookie::build(SESSION_COOKIE, session.access_token)
        .path("/")
        .http_only(true)
        .max_age(time::Duration::days(30))
        .finish();

    Ok(success::Success::ok(Some(model::LoginResponse { message: "User signed in successfully" }))
        .message("Signin successful")
        .cookies(vec![session_cookie]))
}

#[post("/logout")]
pub async fn logout(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    if let Ok(token) = session_token(&req) {
        auth_service.logout(&token).await?;
    }

    let session_cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .max_age(time::Duration::seconds(0))
        .expires(time::OffsetDateTime::UNIX_EPOCH)
        .finish();

    Ok(success::Success::no_content().cookies(vec![session_cookie]))
}
