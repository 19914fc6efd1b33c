use actix_web::{
    self, App, HttpServer,
    middleware::{Logger, from_fn},
    web,
};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::connect_database,
    middlewares::authentication,
    modules::{
        auth::{provider_gotrue::GoTrueProvider, service::AuthService},
        file::{
            model::StorageConfig, repository_pg::FileRepositoryPg, service::FileService,
            storage_supabase::SupabaseStorage,
        },
        user::{repository_pg::UserRepositoryPg, service::UserService},
    },
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    sqlx::migrate!()
        .run(&db_pool)
        .await
        .map_err(|_| std::io::Error::other("Database migration error"))?;

    let provider = GoTrueProvider::new(&ENV.supabase_url, &ENV.supabase_service_key);
    let storage = SupabaseStorage::new(&ENV.supabase_url, &ENV.supabase_service_key);

    let auth_service = AuthService::with_dependencies(Arc::new(provider));
    let user_service =
        UserService::with_dependencies(Arc::new(UserRepositoryPg::new(db_pool.clone())));

    let storage_config = StorageConfig {
        bucket_name: ENV.storage_bucket.clone(),
        max_file_size: ENV.max_file_size,
        ..StorageConfig::default()
    };
    let file_service = FileService::with_dependencies(
        Arc::new(FileRepositoryPg::new(db_pool.clone())),
        Arc::new(storage),
        storage_config,
    );

    // Default bucket creation is best-effort; failures are logged inside.
    file_service.ensure_bucket(None).await;

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(file_service.clone()))
            .service(health_check)
            .configure(modules::auth::route::configure)
            .service(
                web::scope("")
                    .wrap(from_fn(authentication))
                    .configure(modules::user::route::configure)
                    .configure(
                        modules::file::route::configure::<FileRepositoryPg, SupabaseStorage>,
                    ),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
