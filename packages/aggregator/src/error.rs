//! Typed errors for the aggregation engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Extraction strategy
//! misses are deliberately not represented here: a strategy that fails to
//! parse simply yields nothing and the next strategy runs.

use thiserror::Error;

/// Errors from fetching a single source page.
///
/// Always recovered by the orchestrator: a failed source contributes zero
/// tuples for the cycle and is retried on the next refresh.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request exceeded the per-fetch timeout
    #[error("timeout fetching {url}")]
    Timeout { url: String },

    /// Connection-level failure (DNS, TLS, reset, ...)
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Configuration defects in the catalog data.
///
/// Fatal to the refresh cycle that hits them; the last good cache state
/// keeps being served.
#[derive(Debug, Error)]
pub enum DataError {
    /// A product without any price entry cannot be enriched
    #[error("product {product} has no price entries")]
    EmptyPriceMap { product: String },
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
