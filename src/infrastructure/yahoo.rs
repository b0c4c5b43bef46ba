use crate::domain::errors::MarketDataError;
use crate::domain::ports::MarketDataSource;
use crate::domain::types::PricePoint;
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, error};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Closing-price fetcher backed by the Yahoo Finance chart API.
///
/// `period` maps onto Yahoo's `range` parameter ("1d", "5d", "1mo", "3mo",
/// "6mo", "1y", "2y", "5y", "10y", "ytd", "max") and `interval` onto its
/// `interval` parameter ("1m".."1h", "1d", "5d", "1wk", "1mo", "3mo"); both
/// are passed through verbatim. One attempt per request, no retry, default
/// client timeouts.
pub struct YahooFinanceClient {
    client: Client,
    base_url: String,
}

impl YahooFinanceClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Vec<Option<f64>>,
}

#[async_trait]
impl MarketDataSource for YahooFinanceClient {
    async fn fetch_closes(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        let url = format!("{}/{}", self.base_url, ticker);
        debug!(
            "Fetching closes for {} (range={}, interval={})",
            ticker, period, interval
        );

        let response = self
            .client
            .get(&url)
            .query(&[("range", period), ("interval", interval)])
            // Yahoo rejects requests without a browser user agent
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await
            .map_err(|e| MarketDataError::Upstream {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Yahoo chart request for {} failed ({}): {}", ticker, status, body);
            // Unknown tickers come back as 404 with an error body
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(MarketDataError::NoData {
                    ticker: ticker.to_string(),
                });
            }
            return Err(MarketDataError::Upstream {
                reason: format!("status {}", status),
            });
        }

        let payload: ChartResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::Upstream {
                    reason: e.to_string(),
                })?;

        if let Some(err) = payload.chart.error {
            error!(
                "Yahoo chart error for {}: {} ({})",
                ticker, err.description, err.code
            );
            return Err(MarketDataError::NoData {
                ticker: ticker.to_string(),
            });
        }

        let result = payload
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::NoData {
                ticker: ticker.to_string(),
            })?;

        let timestamps = result.timestamp.unwrap_or_default();
        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        let mut points = Vec::with_capacity(timestamps.len());
        for (ts, close) in timestamps.iter().zip(closes) {
            // Non-trading rows carry a null close; skip them
            let Some(close) = close else { continue };
            let Some(timestamp) = DateTime::from_timestamp(*ts, 0) else {
                continue;
            };
            points.push(PricePoint {
                timestamp,
                close: Decimal::from_f64_retain(close).unwrap_or(Decimal::ZERO),
            });
        }

        if points.is_empty() {
            return Err(MarketDataError::NoData {
                ticker: ticker.to_string(),
            });
        }

        debug!("Fetched {} closes for {}", points.len(), ticker);
        Ok(points)
    }
}
