use crate::domain::features::FeatureVector;
use crate::domain::profile::{Region, Sex, SmokingStatus};

/// Ordered list of feature names.
/// This order MUST match exactly the column order the model was trained on.
/// Any change here is a breaking change for shipped model artifacts.
pub const FEATURE_NAMES: &[&str] = &[
    "age",
    "sex",
    "bmi",
    "children",
    "smoker",
    "region",
    "bmi_over_30",
    "age_bmi_interaction",
    "smoker_age_interaction",
    "children_over_2",
];

/// Label encoding for `sex`. Must match the training pipeline.
pub fn encode_sex(sex: Sex) -> f64 {
    match sex {
        Sex::Female => 0.0,
        Sex::Male => 1.0,
    }
}

/// Label encoding for `smoker`. Must match the training pipeline.
pub fn encode_smoker(smoker: SmokingStatus) -> f64 {
    match smoker {
        SmokingStatus::No => 0.0,
        SmokingStatus::Yes => 1.0,
    }
}

/// Label encoding for `region`. Must match the training pipeline.
pub fn encode_region(region: Region) -> f64 {
    match region {
        Region::Northeast => 0.0,
        Region::Northwest => 1.0,
        Region::Southeast => 2.0,
        Region::Southwest => 3.0,
    }
}

/// Flattens an engineered feature vector into a single f64 row for
/// inference, in [`FEATURE_NAMES`] order.
pub fn features_to_f64_row(features: &FeatureVector) -> Vec<f64> {
    vec![
        f64::from(features.age),
        encode_sex(features.sex),
        features.bmi,
        f64::from(features.children),
        encode_smoker(features.smoker),
        encode_region(features.region),
        f64::from(features.bmi_over_30),
        features.age_bmi_interaction,
        f64::from(features.smoker_age_interaction),
        f64::from(features.children_over_2),
    ]
}
