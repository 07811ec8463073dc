use crate::domain::errors::InferenceError;
use crate::domain::features::FeatureVector;

/// Interface to the loaded regression model.
///
/// Inference is read-only, so one loaded model may serve arbitrarily many
/// concurrent callers without locking.
pub trait RegressionModel: Send + Sync {
    /// Predict the log1p-scale charge for a single engineered feature row.
    fn predict_log_charge(&self, features: &FeatureVector) -> Result<f64, InferenceError>;

    /// Get model name/type.
    fn name(&self) -> &str;
}
