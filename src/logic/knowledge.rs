//! Static drug knowledge tables
//!
//! Curated pharmacology lookups used to enrich prompts and responses.
//! These are reference data, not model inputs.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Known risk profile for a drug, used only to enrich prompts.
#[derive(Debug, Clone, Copy)]
pub struct DrugRiskProfile {
    pub primary_concern: &'static str,
    pub risk_factors: &'static [&'static str],
    pub monitoring: &'static str,
}

static DRUG_CLASSES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("PARACETAMOL", "Analgesic"),
        ("ACETAMINOPHEN", "Analgesic"),
        ("IBUPROFEN", "NSAID"),
        ("ASPIRIN", "NSAID"),
        ("NAPROXEN", "NSAID"),
        ("DICLOFENAC", "NSAID"),
        ("ATORVASTATIN", "Statin"),
        ("SIMVASTATIN", "Statin"),
        ("ROSUVASTATIN", "Statin"),
        ("METFORMIN", "Antidiabetic"),
        ("INSULIN", "Antidiabetic"),
        ("AMOXICILLIN", "Antibiotic"),
        ("CIPROFLOXACIN", "Antibiotic"),
        ("AZITHROMYCIN", "Antibiotic"),
        ("MORPHINE", "Opioid"),
        ("CODEINE", "Opioid"),
        ("OXYCODONE", "Opioid"),
        ("WARFARIN", "Anticoagulant"),
        ("HEPARIN", "Anticoagulant"),
        ("OMEPRAZOLE", "Proton Pump Inhibitor"),
        ("PANTOPRAZOLE", "Proton Pump Inhibitor"),
        ("AMLODIPINE", "Calcium Channel Blocker"),
        ("LISINOPRIL", "ACE Inhibitor"),
        ("LOSARTAN", "ARB"),
        ("METOPROLOL", "Beta Blocker"),
        ("FUROSEMIDE", "Diuretic"),
        ("PREDNISONE", "Corticosteroid"),
        ("ALBUTEROL", "Bronchodilator"),
    ])
});

static DRUG_RISK_PROFILES: Lazy<HashMap<&'static str, DrugRiskProfile>> = Lazy::new(|| {
    HashMap::from([
        (
            "PARACETAMOL",
            DrugRiskProfile {
                primary_concern: "hepatotoxicity",
                risk_factors: &["chronic use", "overdose", "alcohol consumption"],
                monitoring: "liver function tests",
            },
        ),
        (
            "ACETAMINOPHEN",
            DrugRiskProfile {
                primary_concern: "hepatotoxicity",
                risk_factors: &["chronic use", "overdose", "alcohol consumption"],
                monitoring: "liver function tests",
            },
        ),
        (
            "IBUPROFEN",
            DrugRiskProfile {
                primary_concern: "GI bleeding and renal dysfunction",
                risk_factors: &["elderly", "chronic use", "dehydration"],
                monitoring: "renal function, GI symptoms",
            },
        ),
        (
            "ATORVASTATIN",
            DrugRiskProfile {
                primary_concern: "myopathy and liver enzyme elevation",
                risk_factors: &["high dose", "drug interactions"],
                monitoring: "CK levels, liver enzymes",
            },
        ),
        (
            "METFORMIN",
            DrugRiskProfile {
                primary_concern: "lactic acidosis",
                risk_factors: &["renal impairment", "heart failure"],
                monitoring: "renal function, lactate levels",
            },
        ),
        (
            "WARFARIN",
            DrugRiskProfile {
                primary_concern: "bleeding risk",
                risk_factors: &["drug interactions", "dietary changes"],
                monitoring: "INR levels",
            },
        ),
    ])
});

/// Therapeutic class for a drug name, "Unknown Class" when unmapped.
pub fn drug_class(drug_name: &str) -> &'static str {
    DRUG_CLASSES
        .get(drug_name.trim().to_uppercase().as_str())
        .copied()
        .unwrap_or("Unknown Class")
}

/// Known risk profile, if the drug is in the knowledge base.
pub fn risk_profile(drug_name: &str) -> Option<&'static DrugRiskProfile> {
    DRUG_RISK_PROFILES.get(drug_name.trim().to_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drug_class_lookup() {
        assert_eq!(drug_class("PARACETAMOL"), "Analgesic");
        assert_eq!(drug_class("warfarin"), "Anticoagulant");
        assert_eq!(drug_class(" ibuprofen "), "NSAID");
    }

    #[test]
    fn test_unknown_drug_class() {
        assert_eq!(drug_class("NOVELDRUG"), "Unknown Class");
        assert_eq!(drug_class(""), "Unknown Class");
    }

    #[test]
    fn test_risk_profile_lookup() {
        let profile = risk_profile("paracetamol").unwrap();
        assert_eq!(profile.primary_concern, "hepatotoxicity");
        assert!(profile.risk_factors.contains(&"overdose"));

        assert!(risk_profile("LISINOPRIL").is_none());
    }
}
