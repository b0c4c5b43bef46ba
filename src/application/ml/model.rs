use crate::domain::errors::PredictError;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

const N_TREES: usize = 100;
const RANDOM_SEED: u64 = 42;

/// Random forest regressor mapping a flattened lookback window of scaled
/// closes to the next scaled close. Lookback positions are treated as an
/// unordered feature set; there is no recurrence or positional weighting.
/// Fit fresh per request, never reused.
pub struct NextCloseModel {
    inner: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl NextCloseModel {
    /// Single fixed-configuration fit; the seed keeps repeated fits on
    /// identical data deterministic. The caller must reject an empty
    /// training set before calling.
    pub fn fit(windows: &[Vec<f64>], labels: &[f64]) -> Result<Self, PredictError> {
        let x = DenseMatrix::from_2d_vec(&windows.to_vec()).map_err(|e| {
            PredictError::Training {
                reason: e.to_string(),
            }
        })?;

        let params = RandomForestRegressorParameters::default()
            .with_n_trees(N_TREES)
            .with_seed(RANDOM_SEED);

        let inner = RandomForestRegressor::fit(&x, &labels.to_vec(), params).map_err(|e| {
            PredictError::Training {
                reason: e.to_string(),
            }
        })?;

        Ok(Self { inner })
    }

    /// Predicts the next scaled close from a single lookback window.
    pub fn predict_one(&self, window: &[f64]) -> Result<f64, PredictError> {
        let x = DenseMatrix::from_2d_vec(&vec![window.to_vec()]).map_err(|e| {
            PredictError::Inference {
                reason: e.to_string(),
            }
        })?;

        let predictions = self.inner.predict(&x).map_err(|e| PredictError::Inference {
            reason: e.to_string(),
        })?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictError::Inference {
                reason: "no prediction returned".to_string(),
            })
    }
}
