use axum::extract::{Extension, Query};
use axum::Json;
use serde::Deserialize;

use aggregator::{ProductFilter, QueryResult, SortKey};

use super::ApiError;
use crate::server::app::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProductsParams {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    /// Free-text search over name and subtitle
    pub q: Option<String>,
    pub store: Option<String>,
    /// One of price-asc, price-desc, name, savings
    pub sort: Option<String>,
}

/// Filtered catalog lookup. Triggers a cache refresh first when the cached
/// catalog is older than the freshness window; a refresh failure with a
/// prior catalog silently serves the stale state.
pub async fn products_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ProductsParams>,
) -> Result<Json<QueryResult>, ApiError> {
    let filter = ProductFilter {
        category: params.category,
        subcategory: params.subcategory,
        text: params.q,
        store: params.store,
    };
    let sort = params.sort.as_deref().and_then(SortKey::parse);

    let result = state.query.query(&filter, sort).await?;
    Ok(Json(result))
}
