pub mod handle;
pub mod model;
pub mod provider;
pub mod provider_gotrue;
pub mod route;
pub mod service;
