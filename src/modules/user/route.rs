use crate::modules::user::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(get_user_public)
            .service(get_user_profile)
            .service(get_user)
            .service(list_users),
    );
}
