// Main entry point for the API server

use std::sync::Arc;

use anyhow::{Context, Result};
use aggregator::HttpFetcher;
use server_core::{
    server::{build_app, AppState},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,aggregator=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Stromstad Deals API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Build application state around the production fetcher
    let state = AppState::new(Arc::new(HttpFetcher::new()));

    // Warm the cache before accepting traffic. A failed first refresh is
    // not fatal; the first query retries it.
    if let Err(e) = state.cache.refresh().await {
        tracing::error!(error = %e, "initial catalog refresh failed");
    }

    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Stromstad Deals -> http://localhost:{}", config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
