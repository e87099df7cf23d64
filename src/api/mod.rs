use axum::{Router, http::HeaderValue, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::{CatalogService, FileCatalogService};
use crate::config::Config;

pub mod episodes;
mod error;
mod observability;
pub mod pages;
mod system;
mod types;
pub mod validation;

pub use error::{ApiError, PageError};
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub catalog: Arc<dyn CatalogService>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

/// State backed by the stream directory named in `config`.
#[must_use]
pub fn create_app_state(config: Config, prometheus_handle: Option<PrometheusHandle>) -> Arc<AppState> {
    let catalog: Arc<dyn CatalogService> = Arc::new(FileCatalogService::from_config(&config));
    create_app_state_with_catalog(config, catalog, prometheus_handle)
}

#[must_use]
pub fn create_app_state_with_catalog(
    config: Config,
    catalog: Arc<dyn CatalogService>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        config: Arc::new(config),
        catalog,
        prometheus_handle,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(pages::index))
        .route("/play", get(pages::play))
        .route("/api/all", get(episodes::list_all))
        .route("/api/episode/{identifier}", get(episodes::get_episode))
        .route("/health", get(system::health))
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn(observability::logging_middleware))
        .fallback(system::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(system::handle_panic))
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
