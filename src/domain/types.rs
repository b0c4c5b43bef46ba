use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single close observation in a chronological price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: Decimal,
}

/// Discretized direction of the predicted price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Classifies a fractional price change against a symmetric dead-zone.
    /// Strict inequalities: a change of exactly +-threshold is Neutral.
    pub fn classify(pct_change: f64, threshold: f64) -> Self {
        if pct_change > threshold {
            Trend::Up
        } else if pct_change < -threshold {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Outcome of one pipeline run, in original price units.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub predicted_price: f64,
    pub reference_price: f64,
    pub pct_change: f64,
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.002;

    #[test]
    fn test_classify_above_threshold_is_up() {
        assert_eq!(Trend::classify(0.0021, THRESHOLD), Trend::Up);
    }

    #[test]
    fn test_classify_below_threshold_is_down() {
        assert_eq!(Trend::classify(-0.0021, THRESHOLD), Trend::Down);
    }

    #[test]
    fn test_classify_exactly_at_threshold_is_neutral() {
        assert_eq!(Trend::classify(THRESHOLD, THRESHOLD), Trend::Neutral);
        assert_eq!(Trend::classify(-THRESHOLD, THRESHOLD), Trend::Neutral);
    }

    #[test]
    fn test_classify_zero_change_is_neutral() {
        assert_eq!(Trend::classify(0.0, THRESHOLD), Trend::Neutral);
    }

    #[test]
    fn test_trend_serializes_to_plain_label() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"Up\"");
        assert_eq!(serde_json::to_string(&Trend::Neutral).unwrap(), "\"Neutral\"");
    }
}
