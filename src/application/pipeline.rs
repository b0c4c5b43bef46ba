use crate::application::ml::model::NextCloseModel;
use crate::application::ml::scaler::MinMaxScaler;
use crate::application::ml::windowing::WindowedSeries;
use crate::config::PipelineConfig;
use crate::domain::errors::PredictError;
use crate::domain::ports::MarketDataSource;
use crate::domain::types::{Prediction, Trend};
use rust_decimal::prelude::ToPrimitive;
use std::sync::Arc;
use tracing::{debug, info};

/// Per-request pipeline: fetch -> scale -> window -> split -> train ->
/// predict. Holds no state between runs; every request re-fetches and
/// retrains from scratch.
pub struct PredictionPipeline {
    source: Arc<dyn MarketDataSource>,
    config: PipelineConfig,
}

impl PredictionPipeline {
    pub fn new(source: Arc<dyn MarketDataSource>, config: PipelineConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub async fn predict_next_close(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Prediction, PredictError> {
        let window_size = self.config.window_size;

        let points = self.source.fetch_closes(ticker, period, interval).await?;
        debug!("Fetched {} closes for {}", points.len(), ticker);

        if points.len() <= window_size {
            return Err(PredictError::InsufficientData {
                points: points.len(),
                window_size,
            });
        }

        let closes: Vec<f64> = points
            .iter()
            .map(|p| p.close.to_f64().unwrap_or(0.0))
            .collect();

        // The scaler is fit on the entire fetched series and threaded
        // through to invert the model's scaled-space output.
        let scaler = MinMaxScaler::fit(&closes);
        let scaled = scaler.transform(&closes);

        let windowed = WindowedSeries::build(&scaled, window_size);
        let (train, test) = windowed.split_at_fraction(self.config.split_fraction);

        if train.is_empty() {
            return Err(PredictError::InsufficientData {
                points: points.len(),
                window_size,
            });
        }

        let (Some(last_window), Some(last_label)) = (test.windows().last(), test.labels().last())
        else {
            return Err(PredictError::InsufficientData {
                points: points.len(),
                window_size,
            });
        };

        debug!(
            "Training on {} windows, holding out {} for {}",
            train.len(),
            test.len(),
            ticker
        );
        let model = NextCloseModel::fit(train.windows(), train.labels())?;

        // Only the most recent window feeds the prediction; the reference
        // price is the last true observed next-value, not the predicted one.
        let predicted_price = scaler.inverse(model.predict_one(last_window)?);
        let reference_price = scaler.inverse(*last_label);

        // A zero reference price is left unguarded; the division yields
        // inf/NaN and propagates.
        let pct_change = (predicted_price - reference_price) / reference_price;
        let trend = Trend::classify(pct_change, self.config.trend_threshold);

        info!(
            "Prediction for {}: price={:.2}, reference={:.2}, change={:+.4}%, trend={}",
            ticker,
            predicted_price,
            reference_price,
            pct_change * 100.0,
            trend
        );

        Ok(Prediction {
            predicted_price,
            reference_price,
            pct_change,
            trend,
        })
    }
}
