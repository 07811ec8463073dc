use crate::domain::errors::InferenceError;
use crate::domain::features::FeatureVector;
use crate::domain::ports::RegressionModel;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Test double returning a fixed log-scale prediction.
///
/// Clones share the call counter, so a test can hand one clone to the
/// estimator and observe inference calls through another.
#[derive(Clone)]
pub struct FixedLogChargeModel {
    pred_log: f64,
    calls: Arc<AtomicUsize>,
}

impl FixedLogChargeModel {
    pub fn new(pred_log: f64) -> Self {
        Self {
            pred_log,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of inference calls made against this model.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RegressionModel for FixedLogChargeModel {
    fn predict_log_charge(&self, _features: &FeatureVector) -> Result<f64, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pred_log)
    }

    fn name(&self) -> &str {
        "fixed log-charge mock"
    }
}

/// Test double whose inference always fails.
pub struct FailingModel;

impl RegressionModel for FailingModel {
    fn predict_log_charge(&self, _features: &FeatureVector) -> Result<f64, InferenceError> {
        Err(InferenceError::ModelFailure {
            reason: "mock failure".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing mock"
    }
}
