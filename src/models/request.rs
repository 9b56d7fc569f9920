//! Request schemas
//!
//! Every field is optional with a default. Incoming values are only
//! type-coerced here; categorical cleanup happens in the feature encoder.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::prediction::{ExplanationMode, Organ, OrganPrediction};

/// Body of `POST /predict`
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default = "default_unk")]
    pub sex: String,
    #[serde(default = "default_unk")]
    pub reporter_type: String,
    #[serde(default = "default_drug_count")]
    pub drug_count: u32,
    #[serde(default)]
    pub reaction_count: u32,
    #[serde(default)]
    pub serious_outcome: u8,
    #[serde(default)]
    pub polypharmacy: u8,
    #[serde(default = "default_unknown")]
    pub route: String,
    #[serde(default = "default_dose_bin")]
    pub dose_bin: String,
    #[serde(default = "default_unknown")]
    pub indication: String,
    #[serde(default = "default_unknown")]
    pub active_ingredient: String,
    #[serde(default)]
    pub explanation_mode: ExplanationMode,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            age: None,
            sex: default_unk(),
            reporter_type: default_unk(),
            drug_count: default_drug_count(),
            reaction_count: 0,
            serious_outcome: 0,
            polypharmacy: 0,
            route: default_unknown(),
            dose_bin: default_dose_bin(),
            indication: default_unknown(),
            active_ingredient: default_unknown(),
            explanation_mode: ExplanationMode::default(),
        }
    }
}

/// Body of `POST /detailed-analysis`. The client echoes back the results
/// of a previous `/predict` call.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailedAnalysisRequest {
    pub predictions: BTreeMap<Organ, OrganPrediction>,
    pub overall_risk_score: f64,
    pub primary_driver: String,
    pub confidence: String,
    pub drug_class: String,
    pub drug_name: String,
}

fn default_unk() -> String {
    "UNK".to_string()
}

fn default_unknown() -> String {
    "UNKNOWN".to_string()
}

fn default_dose_bin() -> String {
    "Unknown".to_string()
}

fn default_drug_count() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_gets_defaults() {
        let req: PredictionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.age, None);
        assert_eq!(req.sex, "UNK");
        assert_eq!(req.reporter_type, "UNK");
        assert_eq!(req.drug_count, 1);
        assert_eq!(req.reaction_count, 0);
        assert_eq!(req.serious_outcome, 0);
        assert_eq!(req.polypharmacy, 0);
        assert_eq!(req.route, "UNKNOWN");
        assert_eq!(req.dose_bin, "Unknown");
        assert_eq!(req.indication, "UNKNOWN");
        assert_eq!(req.active_ingredient, "UNKNOWN");
        assert_eq!(req.explanation_mode, ExplanationMode::Clinical);
    }

    #[test]
    fn test_partial_body_overrides() {
        let req: PredictionRequest = serde_json::from_str(
            r#"{"age": 70, "active_ingredient": "warfarin", "polypharmacy": 1, "explanation_mode": "simple"}"#,
        )
        .unwrap();
        assert_eq!(req.age, Some(70));
        assert_eq!(req.active_ingredient, "warfarin");
        assert_eq!(req.polypharmacy, 1);
        assert_eq!(req.explanation_mode, ExplanationMode::Lay);
    }

    #[test]
    fn test_detailed_request_parses_prediction_map() {
        let req: DetailedAnalysisRequest = serde_json::from_str(
            r#"{
                "predictions": {
                    "LIVER": {"probability": 0.9, "risk_level": "High"},
                    "KIDNEY": {"probability": 0.1, "risk_level": "Low"},
                    "LUNG": {"probability": 0.1, "risk_level": "Low"}
                },
                "overall_risk_score": 44.5,
                "primary_driver": "Liver risk",
                "confidence": "Low",
                "drug_class": "Analgesic",
                "drug_name": "PARACETAMOL"
            }"#,
        )
        .unwrap();
        assert_eq!(req.predictions.len(), 3);
        assert_eq!(req.predictions[&Organ::Liver].probability, 0.9);
        assert_eq!(req.drug_name, "PARACETAMOL");
    }
}
