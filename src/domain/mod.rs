// Customer attributes and validation
pub mod profile;

// Engineered model inputs
pub mod features;

// ML feature encoding
pub mod ml;

// Prediction outcome and risk classification
pub mod prediction;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;

// Reported offline model metrics
pub mod metrics;

// BMI calculator (prefill helper for the bmi input)
pub mod bmi;

// Static advisory text
pub mod advice;
