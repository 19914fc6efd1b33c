use crate::modules::auth::handle::*;
use actix_web::web::{ServiceConfig, scope};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/auth").service(me).service(login).service(logout));
}
