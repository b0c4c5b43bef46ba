use crate::domain::errors::MarketDataError;
use crate::domain::types::PricePoint;
use async_trait::async_trait;

// Need async_trait for async functions in traits
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetches the chronological closing-price series for a ticker.
    /// `period` and `interval` are passed through verbatim in the upstream
    /// source's own vocabulary (e.g. "1y", "1d").
    async fn fetch_closes(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PricePoint>, MarketDataError>;
}
