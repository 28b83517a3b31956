use axum::extract::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use aggregator::registry;

use crate::server::app::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub last_updated: Option<DateTime<Utc>>,
    pub product_count: usize,
    pub is_live: bool,
    pub stores: Vec<&'static str>,
}

/// Operational snapshot. Reads the cache as-is; never triggers a refresh.
pub async fn status_handler(Extension(state): Extension<AppState>) -> Json<StatusResponse> {
    let cache_state = state.cache.get().await;

    Json(StatusResponse {
        last_updated: cache_state.last_updated,
        product_count: cache_state.product_count(),
        is_live: cache_state.is_live,
        stores: registry().iter().map(|s| s.id).collect(),
    })
}
