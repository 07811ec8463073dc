use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;
pub const MIN_BMI: f64 = 10.0;
pub const MAX_BMI: f64 = 50.0;
pub const MAX_CHILDREN: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(ValidationError::UnknownSex(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    No,
    Yes,
}

impl SmokingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokingStatus::No => "no",
            SmokingStatus::Yes => "yes",
        }
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SmokingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no" => Ok(SmokingStatus::No),
            "yes" => Ok(SmokingStatus::Yes),
            _ => Err(ValidationError::UnknownSmokingStatus(s.to_string())),
        }
    }
}

/// Geographic region labels carried through from the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Northeast => "northeast",
            Region::Northwest => "northwest",
            Region::Southeast => "southeast",
            Region::Southwest => "southwest",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "northeast" => Ok(Region::Northeast),
            "northwest" => Ok(Region::Northwest),
            "southeast" => Ok(Region::Southeast),
            "southwest" => Ok(Region::Southwest),
            _ => Err(ValidationError::UnknownRegion(s.to_string())),
        }
    }
}

/// Customer attributes collected by the input form.
///
/// Immutable, constructed per request. The numeric domains mirror the bounds
/// the form widgets enforce; enum fields are valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub age: u32,
    pub sex: Sex,
    pub bmi: f64,
    pub children: u8,
    pub smoker: SmokingStatus,
    pub region: Region,
}

impl CustomerProfile {
    /// Checks every field against its declared domain.
    ///
    /// A rejected profile must never reach inference; callers reject the
    /// single request and prompt the user to correct input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            warn!("Validation FAILED: age {} out of range", self.age);
            return Err(ValidationError::AgeOutOfRange {
                value: self.age,
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }

        // NaN fails the range check as well
        if !(MIN_BMI..=MAX_BMI).contains(&self.bmi) {
            warn!("Validation FAILED: bmi {} out of range", self.bmi);
            return Err(ValidationError::BmiOutOfRange {
                value: self.bmi,
                min: MIN_BMI,
                max: MAX_BMI,
            });
        }

        if self.children > MAX_CHILDREN {
            warn!("Validation FAILED: children {} out of range", self.children);
            return Err(ValidationError::ChildrenOutOfRange {
                value: self.children,
                min: 0,
                max: MAX_CHILDREN,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_profile() -> CustomerProfile {
        CustomerProfile {
            age: 30,
            sex: Sex::Female,
            bmi: 25.0,
            children: 0,
            smoker: SmokingStatus::No,
            region: Region::Southeast,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(valid_profile().validate().is_ok());
    }

    #[test]
    fn test_domain_boundaries_pass() {
        let mut profile = valid_profile();
        profile.age = MIN_AGE;
        profile.bmi = MAX_BMI;
        profile.children = MAX_CHILDREN;
        assert!(profile.validate().is_ok());

        profile.age = MAX_AGE;
        profile.bmi = MIN_BMI;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_underage_rejected() {
        let mut profile = valid_profile();
        profile.age = 17;

        let err = profile.validate().unwrap_err();
        assert_eq!(err.field(), "age");
    }

    #[test]
    fn test_bmi_out_of_range_rejected() {
        let mut profile = valid_profile();
        profile.bmi = 55.0;

        let err = profile.validate().unwrap_err();
        assert_eq!(err.field(), "bmi");
    }

    #[test]
    fn test_nan_bmi_rejected() {
        let mut profile = valid_profile();
        profile.bmi = f64::NAN;

        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_too_many_children_rejected() {
        let mut profile = valid_profile();
        profile.children = 6;

        let err = profile.validate().unwrap_err();
        assert_eq!(err.field(), "children");
    }

    #[test]
    fn test_enum_labels_round_trip() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("yes".parse::<SmokingStatus>().unwrap(), SmokingStatus::Yes);
        assert_eq!("southwest".parse::<Region>().unwrap(), Region::Southwest);
        assert_eq!(Region::Northeast.to_string(), "northeast");
    }

    #[test]
    fn test_unknown_region_rejected() {
        let err = "midwest".parse::<Region>().unwrap_err();
        assert_eq!(err.field(), "region");
        assert!(err.to_string().contains("midwest"));
    }

    #[test]
    fn test_profile_serde_labels() {
        let profile = valid_profile();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"female\""));
        assert!(json.contains("\"no\""));
        assert!(json.contains("\"southeast\""));

        let back: CustomerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
