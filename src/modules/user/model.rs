use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

/// Disclosure tier for projected user views, ordered by increasing
/// visibility. The `Ord` derive is load-bearing: the silent-downgrade rule
/// is `min(requested, resolved)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceLevel {
    Public,
    Authenticated,
    Admin,
}

impl AudienceLevel {
    /// Malformed or missing input is treated as the lowest tier.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("authenticated") => AudienceLevel::Authenticated,
            Some("admin") => AudienceLevel::Admin,
            _ => AudienceLevel::Public,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ViewQuery {
    pub view: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PublicUserView {
    pub id: Uuid,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_verified: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct AuthenticatedUserView {
    pub id: Uuid,
    pub email: Option<String>,
    pub role: Option<String>,
    pub email_confirmed_at: Option<DateTime<Utc>>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
    pub raw_user_meta_data: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    pub phone_confirmed_at: Option<DateTime<Utc>>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub is_sso_user: bool,
    pub is_anonymous: bool,
}

/// Every `auth.users` column except the secret token fields. Adding a field
/// here requires a matching entry in the projection allow-list test.
#[derive(Debug, Serialize)]
pub struct AdminUserView {
    pub instance_id: Option<Uuid>,
    pub id: Uuid,
    pub aud: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub email_confirmed_at: Option<DateTime<Utc>>,
    pub invited_at: Option<DateTime<Utc>>,
    pub confirmation_sent_at: Option<DateTime<Utc>>,
    pub recovery_sent_at: Option<DateTime<Utc>>,
    pub email_change_sent_at: Option<DateTime<Utc>>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
    pub raw_app_meta_data: Option<Value>,
    pub raw_user_meta_data: Option<Value>,
    pub is_super_admin: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    pub phone_confirmed_at: Option<DateTime<Utc>>,
    pub phone_change: Option<String>,
    pub phone_change_sent_at: Option<DateTime<Utc>>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub email_change_confirm_status: Option<i16>,
    pub banned_until: Option<DateTime<Utc>>,
    pub reauthentication_sent_at: Option<DateTime<Utc>>,
    pub is_sso_user: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_anonymous: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UserView {
    Public(PublicUserView),
    Authenticated(AuthenticatedUserView),
    Admin(AdminUserView),
}
