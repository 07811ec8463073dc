use crate::config::EstimatorConfig;
use crate::domain::errors::{InferenceError, ModelLoadError, PredictionError};
use crate::domain::features::FeatureVector;
use crate::domain::ports::RegressionModel;
use crate::domain::prediction::{PredictionResult, RiskCategory};
use crate::domain::profile::CustomerProfile;
use crate::infrastructure::smartcore_model::SmartcoreChargeModel;
use tracing::{debug, error};

/// Premium estimation service.
///
/// Holds the loaded regression model for the process lifetime. Construct it
/// once at initialization and pass it to request handlers; it never mutates
/// after construction.
pub struct PremiumEstimator {
    model: Box<dyn RegressionModel>,
}

impl PremiumEstimator {
    pub fn new(model: Box<dyn RegressionModel>) -> Self {
        Self { model }
    }

    /// Builds the estimator from configuration, loading the model artifact.
    ///
    /// A missing or unreadable artifact is fatal; the service refuses to
    /// start without a model.
    pub fn from_config(config: &EstimatorConfig) -> Result<Self, ModelLoadError> {
        let model = SmartcoreChargeModel::load(&config.model_path)?;
        Ok(Self::new(Box::new(model)))
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Runs the full pipeline for one profile: validate, engineer features,
    /// infer, back-transform, classify.
    pub fn predict(
        &self,
        profile: &CustomerProfile,
    ) -> Result<PredictionResult, PredictionError> {
        profile.validate()?;

        let features = FeatureVector::from_profile(profile);

        let pred_log = match self.model.predict_log_charge(&features) {
            Ok(value) => value,
            Err(e) => {
                error!("Inference failed on model '{}': {}", self.model.name(), e);
                return Err(e.into());
            }
        };

        // Inverse of the log1p transform applied to the training targets
        let estimated_charge = pred_log.exp_m1();
        if !estimated_charge.is_finite() {
            return Err(InferenceError::NonFiniteOutput {
                value: estimated_charge,
            }
            .into());
        }

        let risk_category = RiskCategory::from_charge(estimated_charge);
        debug!(
            "Prediction complete: charge={:.2} risk={}",
            estimated_charge, risk_category
        );

        Ok(PredictionResult {
            estimated_charge,
            risk_category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{Region, Sex, SmokingStatus};
    use crate::infrastructure::mock::{FailingModel, FixedLogChargeModel};

    fn valid_profile() -> CustomerProfile {
        CustomerProfile {
            age: 30,
            sex: Sex::Male,
            bmi: 25.0,
            children: 0,
            smoker: SmokingStatus::No,
            region: Region::Northeast,
        }
    }

    #[test]
    fn test_back_transform_lands_on_charge() {
        // ln(12001) back-transforms through expm1 to 12000
        let estimator =
            PremiumEstimator::new(Box::new(FixedLogChargeModel::new(12_001f64.ln())));

        let result = estimator.predict(&valid_profile()).unwrap();
        assert!((result.estimated_charge - 12_000.0).abs() < 1e-6);
        assert_ne!(result.risk_category, RiskCategory::High);
    }

    #[test]
    fn test_high_risk_classification() {
        let estimator =
            PremiumEstimator::new(Box::new(FixedLogChargeModel::new(30_001f64.ln())));

        let result = estimator.predict(&valid_profile()).unwrap();
        assert!((result.estimated_charge - 30_000.0).abs() < 1e-5);
        assert_eq!(result.risk_category, RiskCategory::High);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let estimator =
            PremiumEstimator::new(Box::new(FixedLogChargeModel::new(9.2)));
        let profile = valid_profile();

        assert_eq!(
            estimator.predict(&profile).unwrap(),
            estimator.predict(&profile).unwrap()
        );
    }

    #[test]
    fn test_invalid_profile_never_reaches_model() {
        let model = FixedLogChargeModel::new(9.2);
        let estimator = PremiumEstimator::new(Box::new(model.clone()));

        let mut profile = valid_profile();
        profile.age = 17;

        let err = estimator.predict(&profile).unwrap_err();
        match err {
            PredictionError::Validation(v) => assert_eq!(v.field(), "age"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn test_inference_failure_is_surfaced() {
        let estimator = PremiumEstimator::new(Box::new(FailingModel));

        let err = estimator.predict(&valid_profile()).unwrap_err();
        assert!(matches!(err, PredictionError::Inference(_)));
    }

    #[test]
    fn test_non_finite_model_output_rejected() {
        let estimator =
            PremiumEstimator::new(Box::new(FixedLogChargeModel::new(f64::NAN)));

        let err = estimator.predict(&valid_profile()).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::Inference(InferenceError::NonFiniteOutput { .. })
        ));
    }
}
