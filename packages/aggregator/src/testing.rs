//! Testing utilities: a configurable mock fetcher.
//!
//! Lets applications exercise the refresh pipeline without network calls,
//! and lets tests assert on how many fetches a refresh actually issued
//! (one per source, exactly once per refresh cycle).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::fetch::Fetcher;

/// Canned outcome for one URL.
#[derive(Debug, Clone)]
pub enum CannedResponse {
    Body(String),
    Timeout,
    Status(u16),
}

/// Mock fetcher with canned per-URL responses and call tracking.
///
/// URLs without a configured response time out, which mimics an
/// unreachable source.
#[derive(Default)]
pub struct MockFetcher {
    responses: RwLock<HashMap<String, CannedResponse>>,
    calls: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned successful body for a URL (builder pattern).
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses
            .write()
            .expect("mock lock poisoned")
            .insert(url.into(), CannedResponse::Body(body.into()));
        self
    }

    /// Canned failure for a URL (builder pattern).
    pub fn with_failure(self, url: impl Into<String>, response: CannedResponse) -> Self {
        self.responses
            .write()
            .expect("mock lock poisoned")
            .insert(url.into(), response);
        self
    }

    /// Total number of fetch calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let response = self
            .responses
            .read()
            .expect("mock lock poisoned")
            .get(url)
            .cloned();

        match response {
            Some(CannedResponse::Body(body)) => Ok(body),
            Some(CannedResponse::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            Some(CannedResponse::Timeout) | None => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
        }
    }
}

/// A Next.js-style page body yielding `count` offer tuples, convenient for
/// driving the liveness signal from tests.
pub fn willys_page_with_offers(count: usize) -> String {
    let offers: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"name": "Vara {i}", "price": {}.90}}"#, 10 + i))
        .collect();
    format!(
        r#"<html><body><script id="__NEXT_DATA__" type="application/json">
            {{"props": {{"pageProps": {{"offers": [{}]}}}}}}
        </script></body></html>"#,
        offers.join(",")
    )
}
