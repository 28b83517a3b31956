//! Freshness-bounded cache of the enriched catalog.
//!
//! The cache is an explicitly owned state container: constructed once at
//! startup and handed by `Arc` to the query service, never process-global
//! state. Readers always observe a fully-built catalog; the state is only
//! replaced with a single write-lock swap after the whole refresh pipeline
//! has finished.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::catalog;
use crate::enrich::{enrich, EnrichedProduct};
use crate::error::DataError;
use crate::fetch::Fetcher;
use crate::orchestrator;

/// Maximum age of a cached catalog before a refresh is due.
pub const FRESHNESS_WINDOW_SECS: i64 = 3 * 60 * 60;

/// Snapshot of the cached catalog. Empty before the first successful
/// refresh.
#[derive(Debug, Clone, Default)]
pub struct CacheState {
    pub products: Option<Arc<Vec<EnrichedProduct>>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub is_live: bool,
}

impl CacheState {
    pub fn product_count(&self) -> usize {
        self.products.as_ref().map_or(0, |p| p.len())
    }

    fn is_stale(&self) -> bool {
        match (&self.products, self.last_updated) {
            (Some(_), Some(ts)) => Utc::now() - ts > Duration::seconds(FRESHNESS_WINDOW_SECS),
            _ => true,
        }
    }
}

/// Owns the cached catalog and the refresh pipeline.
pub struct CatalogCache {
    fetcher: Arc<dyn Fetcher>,
    state: RwLock<CacheState>,
    // Serializes refreshes: a staleness check that loses the race waits
    // here instead of launching a second pipeline against the same sources
    refresh_gate: Mutex<()>,
}

impl CatalogCache {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            state: RwLock::new(CacheState::default()),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Current snapshot, without side effects.
    pub async fn get(&self) -> CacheState {
        self.state.read().await.clone()
    }

    pub async fn is_stale(&self) -> bool {
        self.state.read().await.is_stale()
    }

    /// Run the harvest + enrichment pipeline and swap in the new state.
    ///
    /// De-duplicated: concurrent callers queue on the gate, and whoever
    /// enters after a completed refresh re-checks freshness and returns the
    /// new state without re-running the pipeline. A `DataError` aborts the
    /// cycle and leaves the previous state in place.
    pub async fn refresh(&self) -> Result<CacheState, DataError> {
        let _gate = self.refresh_gate.lock().await;

        {
            let state = self.state.read().await;
            if !state.is_stale() {
                return Ok(state.clone());
            }
        }

        let summary = orchestrator::harvest(self.fetcher.as_ref()).await;
        let products = enrich(catalog::reference_catalog())?;

        let new_state = CacheState {
            products: Some(Arc::new(products)),
            last_updated: Some(Utc::now()),
            is_live: summary.is_live,
        };
        *self.state.write().await = new_state.clone();

        info!(
            product_count = new_state.product_count(),
            is_live = new_state.is_live,
            "catalog refreshed"
        );
        Ok(new_state)
    }

    /// Snapshot for serving: refreshes first when stale. A failed refresh
    /// falls back to the last good state; only a failure with no prior
    /// state at all propagates.
    pub async fn ensure_fresh(&self) -> Result<CacheState, DataError> {
        let state = self.get().await;
        if !state.is_stale() {
            return Ok(state);
        }

        match self.refresh().await {
            Ok(fresh) => Ok(fresh),
            Err(e) if state.products.is_some() => {
                tracing::error!(error = %e, "refresh failed; serving stale catalog");
                Ok(state)
            }
            Err(e) => Err(e),
        }
    }
}
