//! # Catalog Service
//!
//! Serves the product catalog over HTTP until Ctrl-C, then drains the Product actor.
//!
//! Reads config from env vars (or a `.env` file); see [`catalog_service::config`].

use catalog_service::api::{build_router, AppState};
use catalog_service::config::Config;
use catalog_service::gate::AccessGate;
use catalog_service::lifecycle::{setup_tracing, CatalogSystem};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Config::from_env()?;
    info!(?config, "Starting catalog service");

    let system = CatalogSystem::with_capacity(config.channel_capacity);
    let state = AppState::new(system.product_client.clone(), AccessGate::new(config.api_key));
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Catalog service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router (and its client clones) is gone once serve returns.
    system.shutdown().await?;
    info!("Catalog service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
