//! Application setup and router configuration.

use std::sync::Arc;

use axum::{extract::Extension, http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use aggregator::{CatalogCache, Fetcher, QueryService};

use crate::server::routes::{health_handler, products_handler, status_handler, stores_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CatalogCache>,
    pub query: Arc<QueryService>,
}

impl AppState {
    /// Build the state around a fetcher implementation; tests inject a
    /// mock here, `main` wires in the HTTP fetcher.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        let cache = Arc::new(CatalogCache::new(fetcher));
        let query = Arc::new(QueryService::new(cache.clone()));
        Self { cache, query }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // The storefront is served separately; reads are open
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/products", get(products_handler))
        .route("/stores", get(stores_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
