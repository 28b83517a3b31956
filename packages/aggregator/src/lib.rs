// Stromstad Deals - Price Aggregation Engine
//
// This crate aggregates per-product prices from independent retail sites
// into a single enriched catalog. External pages are unstructured and
// frequently yield nothing useful, so extraction and orchestration degrade
// gracefully: a failed source scores zero tuples, never a failed refresh.
//
// Pipeline: Query -> (if stale) Orchestrator -> [Fetch -> Extract] x N
// concurrently -> liveness signal -> Enricher over the reference catalog
// -> Cache swap -> filtered response.

pub mod cache;
pub mod catalog;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod orchestrator;
pub mod query;
pub mod sources;
pub mod testing;

pub use cache::{CacheState, CatalogCache, FRESHNESS_WINDOW_SECS};
pub use catalog::{reference_catalog, PriceEntry, Product};
pub use enrich::{enrich, EnrichedProduct};
pub use error::{DataError, FetchError};
pub use extract::RawTuple;
pub use fetch::{Fetcher, HttpFetcher};
pub use orchestrator::{HarvestSummary, LIVE_THRESHOLD};
pub use query::{ProductFilter, QueryResult, QueryService, SortKey};
pub use sources::{registry, Source};
