use crate::domain::profile::{CustomerProfile, Region, Sex, SmokingStatus};
use serde::Serialize;

/// Engineered model inputs derived from a [`CustomerProfile`].
///
/// Pure function of the profile: identical profiles always yield identical
/// feature vectors. Carries the six raw fields through unchanged plus the
/// four interaction/threshold features the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub age: u32,
    pub sex: Sex,
    pub bmi: f64,
    pub children: u8,
    pub smoker: SmokingStatus,
    pub region: Region,
    pub bmi_over_30: u8,
    pub age_bmi_interaction: f64,
    pub smoker_age_interaction: u32,
    pub children_over_2: u8,
}

impl FeatureVector {
    pub fn from_profile(profile: &CustomerProfile) -> Self {
        Self {
            age: profile.age,
            sex: profile.sex,
            bmi: profile.bmi,
            children: profile.children,
            smoker: profile.smoker,
            region: profile.region,
            bmi_over_30: u8::from(profile.bmi > 30.0),
            age_bmi_interaction: f64::from(profile.age) * profile.bmi,
            smoker_age_interaction: match profile.smoker {
                SmokingStatus::Yes => profile.age,
                SmokingStatus::No => 0,
            },
            children_over_2: u8::from(profile.children > 2),
        }
    }
}
