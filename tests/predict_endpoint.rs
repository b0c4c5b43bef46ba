use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;
use trendcast::application::pipeline::PredictionPipeline;
use trendcast::config::PipelineConfig;
use trendcast::infrastructure::mock::MockMarketDataSource;
use trendcast::server::{AppState, router};

fn app_with(source: MockMarketDataSource, window_size: usize) -> axum::Router {
    let config = PipelineConfig {
        window_size,
        ..PipelineConfig::default()
    };
    let pipeline = Arc::new(PredictionPipeline::new(Arc::new(source), config));
    router(AppState { pipeline })
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn rising_closes() -> Vec<f64> {
    (1..=40).map(|v| v as f64).collect()
}

#[tokio::test]
async fn test_predict_returns_price_and_trend() {
    let app = app_with(MockMarketDataSource::with_closes(&rising_closes()), 5);

    let (status, json) = get_json(app, "/predict?ticker=TSLA&period=1y&interval=1d").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ticker"], "TSLA");
    assert!(json["predicted_price"].is_number());
    assert!(matches!(
        json["trend"].as_str().unwrap(),
        "Up" | "Down" | "Neutral"
    ));
}

#[tokio::test]
async fn test_ticker_is_uppercased_in_response() {
    let app = app_with(MockMarketDataSource::with_closes(&rising_closes()), 5);

    let (status, json) = get_json(app, "/predict?ticker=aapl").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ticker"], "AAPL");
}

#[tokio::test]
async fn test_absent_parameters_fall_back_to_defaults() {
    let app = app_with(MockMarketDataSource::with_closes(&rising_closes()), 5);

    let (status, json) = get_json(app, "/predict").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ticker"], "AAPL");
}

#[tokio::test]
async fn test_empty_fetch_maps_to_500_with_error_body() {
    let app = app_with(MockMarketDataSource::empty(), 5);

    let (status, json) = get_json(app, "/predict?ticker=NOPE").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("No stock data found")
    );
}

#[tokio::test]
async fn test_insufficient_history_maps_to_500() {
    // 10 closes cannot fill a window of 20
    let short: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    let app = app_with(MockMarketDataSource::with_closes(&short), 20);

    let (status, json) = get_json(app, "/predict?ticker=AAPL").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("Insufficient"));
}

#[tokio::test]
async fn test_predicted_price_is_rounded_to_cents() {
    let app = app_with(MockMarketDataSource::with_closes(&rising_closes()), 5);

    let (_, json) = get_json(app, "/predict?ticker=TSLA").await;

    let price = json["predicted_price"].as_f64().unwrap();
    assert!((price * 100.0 - (price * 100.0).round()).abs() < 1e-9);
}
