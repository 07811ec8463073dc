use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "insurance_model.json";

/// Process-wide estimator configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    pub model_path: PathBuf,
}

impl EstimatorConfig {
    pub fn from_env() -> Result<Self> {
        let model_path =
            env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());

        if model_path.trim().is_empty() {
            anyhow::bail!("MODEL_PATH must not be empty");
        }

        Ok(Self {
            model_path: PathBuf::from(model_path),
        })
    }
}
