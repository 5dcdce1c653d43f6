pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Extension, Router};
use lambda_http::{run, Error};
use tracing::info;

use crate::catalog::{CafeCatalog, Catalog};
use crate::config::Config;
use crate::routes::{cafe, health};

pub type SharedCatalog = Arc<dyn CafeCatalog>;

pub fn create_app(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/cafe", get(cafe::handler))
        .route("/health", get(health::health))
        .layer(from_fn(middleware::log_request))
        .layer(Extension(catalog))
}

pub async fn run_app(config: Config) -> Result<(), Error> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    info!(
        environment = %config.environment,
        cities = catalog.city_count(),
        "catalog loaded"
    );

    let app = create_app(Arc::new(catalog));
    run(app).await
}
