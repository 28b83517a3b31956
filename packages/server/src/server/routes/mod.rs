mod health;
mod products;
mod status;
mod stores;

pub use health::health_handler;
pub use products::products_handler;
pub use status::status_handler;
pub use stores::stores_handler;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Generic service failure. Only reached when no usable catalog state
/// exists at all; "no results" is an empty, successful response.
pub struct ApiError(aggregator::DataError);

impl From<aggregator::DataError> for ApiError {
    fn from(err: aggregator::DataError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed without usable cache state");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Kunde inte hämta produkter" })),
        )
            .into_response()
    }
}
