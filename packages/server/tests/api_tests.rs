//! HTTP-level tests for the API surface, exercised with a mock fetcher so
//! no network is touched. All sources failing is the baseline: the service
//! must still answer with the reference catalog, flagged not-live.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use aggregator::testing::{willys_page_with_offers, MockFetcher};
use aggregator::{registry, LIVE_THRESHOLD};
use server_core::server::{build_app, AppState};

fn app_with(fetcher: MockFetcher) -> Router {
    build_app(AppState::new(Arc::new(fetcher)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn products_returns_full_catalog_when_sources_are_down() {
    let (status, json) = get_json(app_with(MockFetcher::new()), "/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["products"].as_array().unwrap().len(), 35);
    assert_eq!(json["isLive"], false);
    assert!(json["lastUpdated"].is_string());
}

#[tokio::test]
async fn products_serializes_enrichment_fields() {
    let (_, json) = get_json(app_with(MockFetcher::new()), "/products?q=mellanmj").await;

    let products = json["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);

    let p = &products[0];
    assert_eq!(p["id"], "mellanmjolk-1l");
    assert_eq!(p["bestStore"], "eurocash");
    assert_eq!(p["bestPrice"], 13.5);
    assert_eq!(p["savings"], 1.4);
    assert_eq!(p["prices"]["ica"]["price"], 14.9);
    assert_eq!(p["prices"]["ica"]["inOffer"], false);
}

#[tokio::test]
async fn products_filters_compose() {
    let (_, json) = get_json(
        app_with(MockFetcher::new()),
        "/products?category=mejeri&store=ica",
    )
    .await;

    let products = json["products"].as_array().unwrap();
    assert_eq!(products.len(), 7);
    for p in products {
        assert_eq!(p["category"], "mejeri");
        assert!(p["prices"]["ica"].is_object());
    }
}

#[tokio::test]
async fn products_sentinel_all_means_unfiltered() {
    let (_, json) = get_json(
        app_with(MockFetcher::new()),
        "/products?category=alla&store=all",
    )
    .await;
    assert_eq!(json["products"].as_array().unwrap().len(), 35);
}

#[tokio::test]
async fn products_reports_live_when_a_source_yields_enough_tuples() {
    let willys_url = registry()
        .iter()
        .find(|s| s.id == "willys")
        .unwrap()
        .scrape_url();
    let fetcher =
        MockFetcher::new().with_body(willys_url, willys_page_with_offers(LIVE_THRESHOLD + 1));

    let (_, json) = get_json(app_with(fetcher), "/products").await;
    assert_eq!(json["isLive"], true);
}

#[tokio::test]
async fn stores_lists_source_metadata() {
    let (status, json) = get_json(app_with(MockFetcher::new()), "/stores").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ica"]["shortName"], "ICA");
    assert_eq!(json["willys"]["color"], "#009F3E");
    assert!(json["ica"]["offersUrl"].is_string());
    assert!(json["eurocash"]["url"].is_string());
}

#[tokio::test]
async fn status_snapshot_has_no_side_effects() {
    let fetcher = Arc::new(MockFetcher::new());
    let state = AppState::new(fetcher.clone());
    let app = build_app(state);

    let (status, json) = get_json(app, "/status").await;

    assert_eq!(status, StatusCode::OK);
    // No refresh was triggered: empty cache, zero fetches
    assert_eq!(json["productCount"], 0);
    assert_eq!(json["isLive"], false);
    assert!(json["lastUpdated"].is_null());
    assert_eq!(json["stores"].as_array().unwrap().len(), 4);
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn health_answers_ok() {
    let (status, json) = get_json(app_with(MockFetcher::new()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
