// Stromstad Deals - API server
//
// Thin HTTP surface over the aggregation engine: the engine owns scraping,
// caching and query logic; this crate owns configuration, routing and
// response shaping.

pub mod config;
pub mod server;

pub use config::*;
