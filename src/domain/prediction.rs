use serde::Serialize;
use std::fmt;

/// Charge above which a prediction classifies as medium risk.
pub const MEDIUM_RISK_THRESHOLD: f64 = 12_000.0;

/// Charge above which a prediction classifies as high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 25_000.0;

/// Coarse three-bucket label derived purely from the predicted charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Classifies an estimated charge into exactly one bucket.
    ///
    /// Comparisons are strict: a charge of exactly 12000 is low and exactly
    /// 25000 is medium.
    pub fn from_charge(charge: f64) -> Self {
        if charge > HIGH_RISK_THRESHOLD {
            RiskCategory::High
        } else if charge > MEDIUM_RISK_THRESHOLD {
            RiskCategory::Medium
        } else {
            RiskCategory::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Estimated annual charge in currency units, non-negative.
    pub estimated_charge: f64,
    pub risk_category: RiskCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_buckets() {
        assert_eq!(RiskCategory::from_charge(0.0), RiskCategory::Low);
        assert_eq!(RiskCategory::from_charge(11_999.99), RiskCategory::Low);
        assert_eq!(RiskCategory::from_charge(12_000.01), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_charge(20_000.0), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_charge(25_000.01), RiskCategory::High);
        assert_eq!(RiskCategory::from_charge(100_000.0), RiskCategory::High);
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(
            RiskCategory::from_charge(MEDIUM_RISK_THRESHOLD),
            RiskCategory::Low
        );
        assert_eq!(
            RiskCategory::from_charge(HIGH_RISK_THRESHOLD),
            RiskCategory::Medium
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskCategory::High.to_string(), "high");
        assert_eq!(RiskCategory::Medium.as_str(), "medium");
    }

    #[test]
    fn test_result_serializes_lowercase_category() {
        let result = PredictionResult {
            estimated_charge: 13_500.0,
            risk_category: RiskCategory::Medium,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"medium\""));
    }
}
