//! Prediction domain types

use serde::{Deserialize, Serialize};

/// Target organs, in the order models are loaded and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Organ {
    Liver,
    Kidney,
    Lung,
}

impl Organ {
    pub const ALL: [Organ; 3] = [Organ::Liver, Organ::Kidney, Organ::Lung];

    /// Wire-format name (matches the response map keys)
    pub fn as_str(&self) -> &'static str {
        match self {
            Organ::Liver => "LIVER",
            Organ::Kidney => "KIDNEY",
            Organ::Lung => "LUNG",
        }
    }

    /// Capitalized name for human-facing text ("Liver risk")
    pub fn display_name(&self) -> &'static str {
        match self {
            Organ::Liver => "Liver",
            Organ::Kidney => "Kidney",
            Organ::Lung => "Lung",
        }
    }
}

impl std::fmt::Display for Organ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative risk bucket for a single organ probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Thresholds are strict: 0.65 is still Moderate, 0.35 is still Low.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.65 {
            RiskLevel::High
        } else if probability > 0.35 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-organ classifier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganPrediction {
    /// Positive-class probability, rounded to 4 decimals
    pub probability: f64,
    pub risk_level: RiskLevel,
}

impl OrganPrediction {
    pub fn from_probability(probability: f64) -> Self {
        Self {
            probability,
            risk_level: RiskLevel::from_probability(probability),
        }
    }
}

/// Confidence label derived from the spread of the organ probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Low spread across organs means the models agree.
    pub fn from_variance(variance: f64) -> Self {
        if variance < 0.02 {
            Confidence::High
        } else if variance < 0.05 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audience for the generated explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationMode {
    #[default]
    Clinical,
    /// Any value other than "clinical" means plain patient language
    #[serde(other)]
    Lay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds_are_strict() {
        assert_eq!(RiskLevel::from_probability(0.66), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.65), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.36), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.35), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
    }

    #[test]
    fn test_confidence_buckets() {
        assert_eq!(Confidence::from_variance(0.0), Confidence::High);
        assert_eq!(Confidence::from_variance(0.019), Confidence::High);
        assert_eq!(Confidence::from_variance(0.02), Confidence::Medium);
        assert_eq!(Confidence::from_variance(0.049), Confidence::Medium);
        assert_eq!(Confidence::from_variance(0.05), Confidence::Low);
    }

    #[test]
    fn test_organ_wire_names() {
        assert_eq!(Organ::Liver.as_str(), "LIVER");
        assert_eq!(Organ::Kidney.display_name(), "Kidney");
        assert_eq!(
            serde_json::to_string(&Organ::Lung).unwrap(),
            "\"LUNG\""
        );
    }

    #[test]
    fn test_organ_map_keys_roundtrip() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert(Organ::Liver, OrganPrediction::from_probability(0.9));
        map.insert(Organ::Lung, OrganPrediction::from_probability(0.1));

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("\"LIVER\""));

        let back: BTreeMap<Organ, OrganPrediction> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[&Organ::Liver].risk_level, RiskLevel::High);
    }

    #[test]
    fn test_explanation_mode_fallback() {
        let clinical: ExplanationMode = serde_json::from_str("\"clinical\"").unwrap();
        assert_eq!(clinical, ExplanationMode::Clinical);

        // Anything unrecognized is treated as lay language
        let lay: ExplanationMode = serde_json::from_str("\"patient\"").unwrap();
        assert_eq!(lay, ExplanationMode::Lay);
    }
}
