use crate::domain::errors::MarketDataError;
use crate::domain::ports::MarketDataSource;
use crate::domain::types::PricePoint;
use async_trait::async_trait;
use chrono::DateTime;
use rust_decimal::Decimal;

/// Data source returning a canned close series, one point per day.
/// An empty series reproduces the upstream no-data failure.
pub struct MockMarketDataSource {
    points: Vec<PricePoint>,
}

impl MockMarketDataSource {
    pub fn with_closes(closes: &[f64]) -> Self {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, close)| PricePoint {
                timestamp: DateTime::from_timestamp(86_400 * i as i64, 0).unwrap_or_default(),
                close: Decimal::from_f64_retain(*close).unwrap_or(Decimal::ZERO),
            })
            .collect();
        Self { points }
    }

    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }
}

#[async_trait]
impl MarketDataSource for MockMarketDataSource {
    async fn fetch_closes(
        &self,
        ticker: &str,
        _period: &str,
        _interval: &str,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        if self.points.is_empty() {
            return Err(MarketDataError::NoData {
                ticker: ticker.to_string(),
            });
        }
        Ok(self.points.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replays_closes_in_order() {
        let source = MockMarketDataSource::with_closes(&[1.0, 2.0, 3.0]);
        let points = tokio_test::block_on(source.fetch_closes("TEST", "1y", "1d")).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].close, Decimal::from_f64_retain(1.0).unwrap());
        assert!(points[0].timestamp < points[2].timestamp);
    }

    #[test]
    fn test_empty_mock_reports_no_data() {
        let source = MockMarketDataSource::empty();
        let err = tokio_test::block_on(source.fetch_closes("TEST", "1y", "1d")).unwrap_err();

        assert!(matches!(err, MarketDataError::NoData { .. }));
    }
}
