use crate::domain::errors::ValidationError;
use crate::domain::profile::{MAX_BMI, MIN_BMI};
use serde::Serialize;
use std::fmt;

pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 250.0;
pub const MIN_HEIGHT_CM: f64 = 100.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;

/// Standard BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BMI from weight in kilograms and height in centimetres:
/// `weight / (height/100)²`.
///
/// Independent of the estimator; exists only to prefill the bmi input.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Result<f64, ValidationError> {
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(ValidationError::WeightOutOfRange {
            value: weight_kg,
            min: MIN_WEIGHT_KG,
            max: MAX_WEIGHT_KG,
        });
    }

    if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
        return Err(ValidationError::HeightOutOfRange {
            value: height_cm,
            min: MIN_HEIGHT_CM,
            max: MAX_HEIGHT_CM,
        });
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Folds a calculated BMI into the domain accepted by the profile form.
pub fn clamp_to_profile_domain(bmi: f64) -> f64 {
    bmi.clamp(MIN_BMI, MAX_BMI)
}
