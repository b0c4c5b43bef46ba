use crate::domain::types::Trend;
use crate::server::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Query parameters for /predict; absent fields fall back to the
/// configured defaults.
#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    pub ticker: Option<String>,
    pub period: Option<String>,
    pub interval: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub ticker: String,
    pub predicted_price: f64,
    pub trend: Trend,
}

pub async fn predict_handler(
    State(state): State<AppState>,
    Query(query): Query<PredictQuery>,
) -> impl IntoResponse {
    let config = state.pipeline.config();
    let ticker = query
        .ticker
        .unwrap_or_else(|| config.default_ticker.clone());
    let period = query
        .period
        .unwrap_or_else(|| config.default_period.clone());
    let interval = query
        .interval
        .unwrap_or_else(|| config.default_interval.clone());

    info!(
        "Received prediction request for {} (period={}, interval={})",
        ticker, period, interval
    );

    match state
        .pipeline
        .predict_next_close(&ticker, &period, &interval)
        .await
    {
        Ok(prediction) => {
            let response = PredictResponse {
                ticker: ticker.to_uppercase(),
                predicted_price: round_price(prediction.predicted_price),
                trend: prediction.trend,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Prediction for {} failed: {}", ticker, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}

fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_price_to_two_decimals() {
        assert_eq!(round_price(189.37345), 189.37);
        assert_eq!(round_price(189.375), 189.38);
        assert_eq!(round_price(190.0), 190.0);
    }
}
