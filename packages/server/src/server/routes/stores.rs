use axum::Json;
use indexmap::IndexMap;

use aggregator::{registry, Source};

/// Source metadata keyed by stable source key, in display order.
pub async fn stores_handler() -> Json<IndexMap<&'static str, &'static Source>> {
    let stores: IndexMap<_, _> = registry().iter().map(|s| (s.id, s)).collect();
    Json(stores)
}
