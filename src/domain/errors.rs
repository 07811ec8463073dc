use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when an input field falls outside its declared domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("age {value} outside supported range {min}..={max}")]
    AgeOutOfRange { value: u32, min: u32, max: u32 },

    #[error("bmi {value:.1} outside supported range {min:.1}..={max:.1}")]
    BmiOutOfRange { value: f64, min: f64, max: f64 },

    #[error("children {value} outside supported range {min}..={max}")]
    ChildrenOutOfRange { value: u8, min: u8, max: u8 },

    #[error("weight {value:.1}kg outside supported range {min:.0}..={max:.0}")]
    WeightOutOfRange { value: f64, min: f64, max: f64 },

    #[error("height {value:.1}cm outside supported range {min:.0}..={max:.0}")]
    HeightOutOfRange { value: f64, min: f64, max: f64 },

    #[error("unknown sex '{0}', expected 'male' or 'female'")]
    UnknownSex(String),

    #[error("unknown smoking status '{0}', expected 'no' or 'yes'")]
    UnknownSmokingStatus(String),

    #[error("unknown region '{0}', expected one of northeast, northwest, southeast, southwest")]
    UnknownRegion(String),
}

impl ValidationError {
    /// Name of the input field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::AgeOutOfRange { .. } => "age",
            Self::BmiOutOfRange { .. } => "bmi",
            Self::ChildrenOutOfRange { .. } => "children",
            Self::WeightOutOfRange { .. } => "weight",
            Self::HeightOutOfRange { .. } => "height",
            Self::UnknownSex(_) => "sex",
            Self::UnknownSmokingStatus(_) => "smoker",
            Self::UnknownRegion(_) => "region",
        }
    }
}

/// Errors while loading the model artifact at startup.
///
/// Fatal: without a model there is no degraded mode, so construction of the
/// estimator must refuse to complete.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model artifact not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read model artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize model artifact {path:?}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-request inference failures, surfaced to the caller as
/// "prediction unavailable". Never retried, never defaulted.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("failed to assemble feature matrix: {reason}")]
    FeatureMatrix { reason: String },

    #[error("model inference failed: {reason}")]
    ModelFailure { reason: String },

    #[error("model returned no prediction for the input row")]
    EmptyOutput,

    #[error("model returned a non-finite prediction: {value}")]
    NonFiniteOutput { value: f64 },
}

/// Umbrella error returned by the predict pipeline.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}
