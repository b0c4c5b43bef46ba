use anyhow::{Context, Result};
use std::env;

/// Tunables threaded into the prediction pipeline. Explicit configuration
/// rather than embedded literals; every request shares the same instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub default_ticker: String,
    pub default_period: String,
    pub default_interval: String,
    pub window_size: usize,
    pub split_fraction: f64,
    pub trend_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_ticker: "AAPL".to_string(),
            default_period: "1y".to_string(),
            default_interval: "1d".to_string(),
            window_size: 20,
            split_fraction: 0.95,
            trend_threshold: 0.002,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            anyhow::bail!("WINDOW_SIZE must be at least 1");
        }
        if !(self.split_fraction > 0.0 && self.split_fraction <= 1.0) {
            anyhow::bail!(
                "SPLIT_FRACTION must be in (0, 1], got {}",
                self.split_fraction
            );
        }
        if self.trend_threshold < 0.0 {
            anyhow::bail!(
                "TREND_THRESHOLD must be non-negative, got {}",
                self.trend_threshold
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub pipeline: PipelineConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("Invalid PORT")?;

        let default_ticker = env::var("DEFAULT_TICKER").unwrap_or_else(|_| "AAPL".to_string());
        let default_period = env::var("DEFAULT_PERIOD").unwrap_or_else(|_| "1y".to_string());
        let default_interval = env::var("DEFAULT_INTERVAL").unwrap_or_else(|_| "1d".to_string());

        let window_size = env::var("WINDOW_SIZE")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<usize>()
            .context("Invalid WINDOW_SIZE")?;

        let split_fraction = env::var("SPLIT_FRACTION")
            .unwrap_or_else(|_| "0.95".to_string())
            .parse::<f64>()
            .context("Invalid SPLIT_FRACTION")?;

        let trend_threshold = env::var("TREND_THRESHOLD")
            .unwrap_or_else(|_| "0.002".to_string())
            .parse::<f64>()
            .context("Invalid TREND_THRESHOLD")?;

        let pipeline = PipelineConfig {
            default_ticker,
            default_period,
            default_interval,
            window_size,
            split_fraction,
            trend_threshold,
        };
        pipeline.validate()?;

        Ok(Self { port, pipeline })
    }
}
