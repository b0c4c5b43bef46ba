pub mod api;

use crate::application::pipeline::PredictionPipeline;
use anyhow::Result;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PredictionPipeline>,
}

/// Builds the router; split out from `serve` so tests can drive it
/// without binding a socket.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/predict", get(api::predict_handler))
        .layer(cors)
        .with_state(state)
}

/// Start the axum server
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    info!("Registering routes:");
    info!("  GET /predict?ticker=AAPL&period=1y&interval=1d");

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received. Exiting...");
}
