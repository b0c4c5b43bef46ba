use thiserror::Error;

/// Errors related to the upstream market data source
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("No stock data found for {ticker}; check ticker symbol or interval")]
    NoData { ticker: String },

    #[error("Market data request failed: {reason}")]
    Upstream { reason: String },
}

/// Errors raised anywhere in the prediction pipeline
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error("Insufficient history for window size {window_size}: fetched {points} closes")]
    InsufficientData { points: usize, window_size: usize },

    #[error("Model training failed: {reason}")]
    Training { reason: String },

    #[error("Model inference failed: {reason}")]
    Inference { reason: String },
}
