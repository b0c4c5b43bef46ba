//! Trendcast - next-close prediction service
//!
//! Runs an HTTP listener with a single route, `GET /predict`, that
//! downloads recent closes for a ticker, trains a fresh regression model
//! on sliding lookback windows and returns the predicted next closing
//! price plus an Up/Down/Neutral trend label.
//!
//! # Usage
//! ```sh
//! PORT=8000 cargo run
//! ```
//!
//! # Environment Variables
//! - `PORT` - Listener port (default: 8000)
//! - `DEFAULT_TICKER`, `DEFAULT_PERIOD`, `DEFAULT_INTERVAL` - Fallbacks for
//!   absent query parameters (default: AAPL, 1y, 1d)
//! - `WINDOW_SIZE`, `SPLIT_FRACTION`, `TREND_THRESHOLD` - Pipeline tunables
//!   (default: 20, 0.95, 0.002)

use anyhow::Result;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;
use trendcast::application::pipeline::PredictionPipeline;
use trendcast::config::Config;
use trendcast::infrastructure::yahoo::YahooFinanceClient;
use trendcast::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Trendcast {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: port={}, window_size={}, split_fraction={}, trend_threshold={}",
        config.port,
        config.pipeline.window_size,
        config.pipeline.split_fraction,
        config.pipeline.trend_threshold
    );

    let source = Arc::new(YahooFinanceClient::new());
    let pipeline = Arc::new(PredictionPipeline::new(source, config.pipeline.clone()));

    server::serve(AppState { pipeline }, config.port).await
}
