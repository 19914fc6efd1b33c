//! View projection engine: pure redaction of `auth.users` rows per audience
//! level, plus the permission resolution deciding which level a requester
//! may use. Decision and redaction are deliberately separate functions.

use uuid::Uuid;

use crate::modules::user::model::{
    AdminUserView, AudienceLevel, AuthenticatedUserView, PublicUserView, UserView,
};
use crate::modules::user::schema::UserEntity;

/// Columns that never appear in any projected view, at any level.
pub const SECRET_FIELDS: [&str; 8] = [
    "encrypted_password",
    "confirmation_token",
    "recovery_token",
    "email_change_token_new",
    "email_change_token_current",
    "email_change",
    "phone_change_token",
    "reauthentication_token",
];

/// Mask an email down to its domain: `a@b.com` -> `***@b.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((_, domain)) => format!("***@{}", domain),
        None => "***".to_string(),
    }
}

pub fn project_public(user: &UserEntity) -> PublicUserView {
    PublicUserView {
        id: user.id,
        email: user.email.as_deref().map(mask_email),
        role: user.role.clone(),
        is_verified: user.email_confirmed_at.is_some(),
        created_at: user.created_at,
    }
}

pub fn project_authenticated(user: &UserEntity) -> AuthenticatedUserView {
    AuthenticatedUserView {
        id: user.id,
        email: user.email.clone(),
        role: user.role.clone(),
        email_confirmed_at: user.email_confirmed_at,
        last_sign_in_at: user.last_sign_in_at,
        raw_user_meta_data: user.raw_user_meta_data.clone(),
        created_at: user.created_at,
        updated_at: user.updated_at,
        phone: user.phone.clone(),
        phone_confirmed_at: user.phone_confirmed_at,
        confirmed_at: user.confirmed_at,
        is_sso_user: user.is_sso_user,
        is_anonymous: user.is_anonymous,
    }
}

pub fn project_admin(user: &UserEntity) -> AdminUserView {
    AdminUserView {
        instance_id: user.instance_id,
        id: user.id,
        aud: user.aud.clone(),
        role: user.role.clone(),
        email: user.email.clone(),
        email_confirmed_at: user.email_confirmed_at,
        invited_at: user.invited_at,
        confirmation_sent_at: user.confirmation_sent_at,
        recovery_sent_at: user.recovery_sent_at,
        email_change_sent_at: user.email_change_sent_at,
        last_sign_in_at: user.last_sign_in_at,
        raw_app_meta_data: user.raw_app_meta_data.clone(),
        raw_user_meta_data: user.raw_user_meta_data.clone(),
        is_super_admin: user.is_super_admin,
        created_at: user.created_at,
        updated_at: user.updated_at,
        phone: user.phone.clone(),
        phone_confirmed_at: user.phone_confirmed_at,
        phone_change: user.phone_change.clone(),
        phone_change_sent_at: user.phone_change_sent_at,
        confirmed_at: user.confirmed_at,
        email_change_confirm_status: user.email_change_confirm_status,
        banned_until: user.banned_until,
        reauthentication_sent_at: user.reauthentication_sent_at,
        is_sso_user: user.is_sso_user,
        deleted_at: user.deleted_at,
        is_anonymous: user.is_anonymous,
    }
}

pub fn project(user: &UserEntity, level: AudienceLevel) -> UserView {
    match level {
        AudienceLevel::Public => UserView::Public(project_public(user)),
        AudienceLevel::Authenticated => UserView::Authenticated(project_authenticated(user)),
        AudienceLevel::Admin => UserView::Admin(project_admin(user)),
    }
}

pub fn can_access_admin(role: &str) -> bool {
    role == "admin" || role == "super_admin"
}

pub fn can_access_authenticated(requester_id: &Uuid, target_id: &Uuid) -> bool {
    requester_id == target_id
}

/// Highest audience level a requester may use against a target record.
pub fn resolve_level(
    requester_role: &str,
    target_id: &Uuid,
    requester_id: &Uuid,
) -> AudienceLevel {
    if can_access_admin(requester_role) {
        return AudienceLevel::Admin;
    }

    if can_access_authenticated(requester_id, target_id) {
        return AudienceLevel::Authenticated;
    }

    AudienceLevel::Public
}

/// Silent-downgrade policy: an explicit request above the permitted level
/// falls back to the highest level the requester is entitled to. Never
/// escalates.
pub fn effective_level(requested: AudienceLevel, resolved: AudienceLevel) -> AudienceLevel {
    requested.min(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn sample_user() -> UserEntity {
        UserEntity {
            instance_id: Some(Uuid::nil()),
            id: Uuid::new_v4(),
            aud: Some("authenticated".to_string()),
            role: Some("authenticated".to_string()),
            email: Some("jonas@example.com".to_string()),
            encrypted_password: Some("$2a$10$hashhashhash".to_string()),
            email_confirmed_at: Some(Utc::now()),
            invited_at: Some(Utc::now()),
            confirmation_token: Some("confirmation-secret".to_string()),
            confirmation_sent_at: Some(Utc::now()),
            recovery_token: Some("recovery-secret".to_string()),
            recovery_sent_at: Some(Utc::now()),
            email_change_token_new: Some("email-change-new-secret".to_string()),
            email_change: Some("new@example.com".to_string()),
            email_change_sent_at: Some(Utc::now()),
            last_sign_in_at: Some(Utc::now()),
            raw_app_meta_data: Some(json!({"provider": "email", "providers": ["email"]})),
            raw_user_meta_data: Some(json!({"email_verified": true})),
            is_super_admin: Some(false),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            phone: Some("4915112345678".to_string()),
            phone_confirmed_at: Some(Utc::now()),
            phone_change: Some("".to_string()),
            phone_change_token: Some("phone-change-secret".to_string()),
            phone_change_sent_at: Some(Utc::now()),
            confirmed_at: Some(Utc::now()),
            email_change_token_current: Some("email-change-current-secret".to_string()),
            email_change_confirm_status: Some(0),
            banned_until: Some(Utc::now()),
            reauthentication_token: Some("reauth-secret".to_string()),
            reauthentication_sent_at: Some(Utc::now()),
            is_sso_user: false,
            deleted_at: Some(Utc::now()),
            is_anonymous: false,
        }
    }

    /// Every column of the entity; kept in sync with `UserEntity`.
    const ALL_FIELDS: [&str; 35] = [
        "instance_id",
        "id",
        "aud",
        "role",
        "email",
        "encrypted_password",
        "email_confirmed_at",
        "invited_at",
        "confirmation_token",
        "confirmation_sent_at",
        "recovery_token",
        "recovery_sent_at",
        "email_change_token_new",
        "email_change",
        "email_change_sent_at",
        "last_sign_in_at",
        "raw_app_meta_data",
        "raw_user_meta_data",
        "is_super_admin",
        "created_at",
        "updated_at",
        "phone",
        "phone_confirmed_at",
        "phone_change",
        "phone_change_token",
        "phone_change_sent_at",
        "confirmed_at",
        "email_change_token_current",
        "email_change_confirm_status",
        "banned_until",
        "reauthentication_token",
        "reauthentication_sent_at",
        "is_sso_user",
        "deleted_at",
        "is_anonymous",
    ];

    fn keys_of(view: &impl serde::Serialize) -> BTreeSet<String> {
        let value = serde_json::to_value(view).unwrap();
        value.as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn masks_email_to_domain_only() {
        assert_eq!(mask_email("a@b.com"), "***@b.com");
        assert_eq!(mask_email("very.long.local.part@sub.domain.org"), "***@sub.domain.org");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn public_view_leaks_no_secrets() {
        let user = sample_user();
        let keys = keys_of(&project_public(&user));

        assert!(!keys.contains("encrypted_password"));
        assert!(!keys.contains("instance_id"));
        assert!(keys.iter().all(|k| !k.ends_with("_token")));

        let value = serde_json::to_value(project_public(&user)).unwrap();
        assert_eq!(value["email"], "***@example.com");
        assert_eq!(value["is_verified"], true);
    }

    #[test]
    fn authenticated_view_has_full_email_but_no_secrets() {
        let user = sample_user();
        let value = serde_json::to_value(project_authenticated(&user)).unwrap();

        assert_eq!(value["email"], "jonas@example.com");
        let keys = keys_of(&project_authenticated(&user));
        for secret in SECRET_FIELDS {
            assert!(!keys.contains(secret), "secret field {secret} projected");
        }
        assert!(!keys.contains("banned_until"));
        assert!(!keys.contains("raw_app_meta_data"));
    }

    #[test]
    fn admin_view_is_exactly_all_fields_minus_secrets() {
        let user = sample_user();
        let keys = keys_of(&project_admin(&user));

        let expected: BTreeSet<String> = ALL_FIELDS
            .iter()
            .filter(|f| !SECRET_FIELDS.contains(f))
            .map(|f| f.to_string())
            .collect();

        assert_eq!(keys, expected);
    }

    #[test]
    fn resolves_admin_regardless_of_ids() {
        let target = Uuid::new_v4();
        let requester = Uuid::new_v4();
        assert_eq!(resolve_level("admin", &target, &requester), AudienceLevel::Admin);
        assert_eq!(resolve_level("super_admin", &target, &target), AudienceLevel::Admin);
    }

    #[test]
    fn resolves_authenticated_for_own_profile_only() {
        let own = Uuid::new_v4();
        let other = Uuid::new_v4();
        assert_eq!(resolve_level("authenticated", &own, &own), AudienceLevel::Authenticated);
        assert_eq!(resolve_level("authenticated", &other, &own), AudienceLevel::Public);
    }

    #[test]
    fn downgrades_silently_and_never_escalates() {
        let own = Uuid::new_v4();
        let other = Uuid::new_v4();

        // Denied admin request on own profile falls to authenticated.
        let resolved = resolve_level("authenticated", &own, &own);
        assert_eq!(effective_level(AudienceLevel::Admin, resolved), AudienceLevel::Authenticated);

        // Denied admin request on another profile falls to public.
        let resolved = resolve_level("authenticated", &other, &own);
        assert_eq!(effective_level(AudienceLevel::Admin, resolved), AudienceLevel::Public);

        // A lower explicit request is honored even for admins.
        let resolved = resolve_level("admin", &other, &own);
        assert_eq!(effective_level(AudienceLevel::Public, resolved), AudienceLevel::Public);
    }

    #[test]
    fn malformed_view_param_parses_to_public() {
        assert_eq!(AudienceLevel::parse(None), AudienceLevel::Public);
        assert_eq!(AudienceLevel::parse(Some("root")), AudienceLevel::Public);
        assert_eq!(AudienceLevel::parse(Some("ADMIN")), AudienceLevel::Public);
        assert_eq!(AudienceLevel::parse(Some("admin")), AudienceLevel::Admin);
        assert_eq!(AudienceLevel::parse(Some("authenticated")), AudienceLevel::Authenticated);
    }
}
