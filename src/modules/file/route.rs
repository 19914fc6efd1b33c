use actix_web::{
    middleware::from_fn,
    web::{self, scope},
};

use crate::middlewares::require_admin;
use crate::modules::file::{handle, repository::FileRepository, storage::ObjectStorage};

pub fn configure<R, S>(cfg: &mut web::ServiceConfig)
where
    R: FileRepository + Send + Sync + 'static,
    S: ObjectStorage + Send + Sync + 'static,
{
    cfg.service(
        scope("/files")
            .service(
                scope("/admin")
                    .wrap(from_fn(require_admin))
                    .route("/stats", web::get().to(handle::storage_stats::<R, S>))
                    .route("/init-bucket", web::post().to(handle::init_bucket::<R, S>)),
            )
            .route("/upload", web::post().to(handle::upload_file::<R, S>))
            .route("/category/{category}", web::get().to(handle::list_by_category::<R, S>))
            .route("/folder/{folder}", web::get().to(handle::list_by_folder::<R, S>))
            .route(
                "/{id:[0-9a-fA-F-]{36}}/download",
                web::get().to(handle::download_file::<R, S>),
            )
            .route(
                "/{id:[0-9a-fA-F-]{36}}/signed-url",
                web::get().to(handle::get_signed_url::<R, S>),
            )
            .route("/{id:[0-9a-fA-F-]{36}}", web::get().to(handle::get_file::<R, S>))
            .route("/{id:[0-9a-fA-F-]{36}}", web::put().to(handle::update_file::<R, S>))
            .route("/{id:[0-9a-fA-F-]{36}}", web::delete().to(handle::delete_file::<R, S>))
            .route("", web::get().to(handle::list_files::<R, S>)),
    );
}
