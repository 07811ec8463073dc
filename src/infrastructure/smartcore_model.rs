use crate::domain::errors::{InferenceError, ModelLoadError};
use crate::domain::features::FeatureVector;
use crate::domain::ml::feature_registry;
use crate::domain::ports::RegressionModel;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

/// Regression model backed by a smartcore random forest, deserialized once
/// from a serde_json artifact at startup.
#[derive(Debug)]
pub struct SmartcoreChargeModel {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
    path: PathBuf,
}

impl SmartcoreChargeModel {
    /// Loads the artifact from disk. Any failure here is fatal to startup.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ModelLoadError> {
        let path = path.into();

        if !path.exists() {
            return Err(ModelLoadError::NotFound { path });
        }

        let file = File::open(&path).map_err(|source| ModelLoadError::Io {
            path: path.clone(),
            source,
        })?;

        let model = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ModelLoadError::Deserialize {
                path: path.clone(),
                source,
            }
        })?;

        info!("Loaded premium model from {:?}", path);
        Ok(Self { model, path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl RegressionModel for SmartcoreChargeModel {
    fn predict_log_charge(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let row = feature_registry::features_to_f64_row(features);

        let matrix = DenseMatrix::from_2d_vec(&vec![row]).map_err(|e| {
            InferenceError::FeatureMatrix {
                reason: e.to_string(),
            }
        })?;

        let predictions = self
            .model
            .predict(&matrix)
            .map_err(|e| InferenceError::ModelFailure {
                reason: e.to_string(),
            })?;

        predictions
            .first()
            .copied()
            .ok_or(InferenceError::EmptyOutput)
    }

    fn name(&self) -> &str {
        "smartcore random forest"
    }
}
