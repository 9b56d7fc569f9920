//! Prompt Composer
//!
//! Pure string templating for the explanation provider. Two variants:
//! a summary prompt for `/predict` and a structured five-section prompt
//! for `/detailed-analysis`. Neither performs any I/O.

use std::collections::BTreeMap;

use crate::logic::knowledge;
use crate::models::{Confidence, ExplanationMode, Organ, OrganPrediction};

/// One line per organ: `- LIVER: 90.0% (High)`
fn organ_summary(predictions: &BTreeMap<Organ, OrganPrediction>) -> String {
    predictions
        .iter()
        .map(|(organ, pred)| {
            format!(
                "- {}: {:.1}% ({})",
                organ,
                pred.probability * 100.0,
                pred.risk_level
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary prompt for the `/predict` explanation.
#[allow(clippy::too_many_arguments)]
pub fn summary_prompt(
    drug_name: &str,
    drug_class: &str,
    age_bucket: &str,
    sex: &str,
    polypharmacy: u8,
    predictions: &BTreeMap<Organ, OrganPrediction>,
    overall_risk: f64,
    confidence: Confidence,
    mode: ExplanationMode,
) -> String {
    let mut prompt = String::from("You are a clinical pharmacology AI assistant.\n\n");

    let mode_instruction = match mode {
        ExplanationMode::Clinical => {
            "Audience: Healthcare professionals. Use medical terminology."
        }
        ExplanationMode::Lay => "Audience: Patients. Use simple language.",
    };
    prompt.push_str(mode_instruction);
    prompt.push_str("\n\n");

    prompt.push_str(&format!(
        "Drug: {drug_name}\nClass: {drug_class}\nAge group: {age_bucket}\nSex: {sex}\nPolypharmacy: {}\n",
        if polypharmacy == 1 { "Yes" } else { "No" },
    ));

    if let Some(profile) = knowledge::risk_profile(drug_name) {
        prompt.push_str(&format!(
            "\nKnown risk profile for {drug_name}:\n\
             - Primary concern: {}\n\
             - Risk factors: {}\n\
             - Monitoring: {}\n",
            profile.primary_concern,
            profile.risk_factors.join(", "),
            profile.monitoring,
        ));
    }

    prompt.push_str(&format!(
        "\nML Predictions:\n{}\nOverall risk: {overall_risk}%\nConfidence: {confidence}\n",
        organ_summary(predictions),
    ));

    prompt.push_str("\nExplain reasoning and end with [GREEN ALERT / YELLOW ALERT / RED ALERT].\n");

    prompt
}

/// Structured prompt for the `/detailed-analysis` report.
pub fn detailed_prompt(
    drug_name: &str,
    drug_class: &str,
    predictions: &BTreeMap<Organ, OrganPrediction>,
    overall_risk: f64,
    primary_driver: &str,
    confidence: &str,
) -> String {
    format!(
        "You are an expert clinical pharmacologist providing comprehensive risk analysis.\n\
         \n\
         Drug: {drug_name}\n\
         Class: {drug_class}\n\
         Overall Risk Score: {overall_risk}%\n\
         Primary Risk Driver: {primary_driver}\n\
         Confidence: {confidence}\n\
         \n\
         Organ-Specific Predictions:\n\
         {}\n\
         \n\
         Provide a detailed analysis with the following structure:\n\
         \n\
         1. IDENTIFIED ISSUES\n\
         \x20  - List key risk factors and concerns\n\
         \x20  - Highlight organ-specific vulnerabilities\n\
         \n\
         2. POSSIBLE CONSEQUENCES\n\
         \x20  - Short-term adverse effects\n\
         \x20  - Long-term complications\n\
         \x20  - Risk of progression\n\
         \n\
         3. RISK PATHWAYS\n\
         \x20  - Biological mechanisms involved\n\
         \x20  - Drug-organ interactions\n\
         \x20  - Compounding factors\n\
         \n\
         4. MONITORING RECOMMENDATIONS\n\
         \x20  - Laboratory tests required\n\
         \x20  - Clinical signs to watch for\n\
         \x20  - Follow-up schedule\n\
         \x20  - When to seek immediate care\n\
         \n\
         5. RISK MITIGATION STRATEGIES\n\
         \x20  - Dose adjustments if needed\n\
         \x20  - Alternative therapies to consider\n\
         \x20  - Lifestyle modifications\n\
         \x20  - Drug interactions to avoid\n\
         \n\
         Be specific, evidence-based, and clinically actionable. Use medical terminology appropriately.\n",
        organ_summary(predictions),
    )
}

/// Deterministic explanation used when the provider is unavailable.
pub fn fallback_explanation(primary_driver: &str) -> String {
    format!(
        "Risk assessment indicates {primary_driver} as the main concern. Monitoring recommended."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictions(liver: f64, kidney: f64, lung: f64) -> BTreeMap<Organ, OrganPrediction> {
        let mut map = BTreeMap::new();
        map.insert(Organ::Liver, OrganPrediction::from_probability(liver));
        map.insert(Organ::Kidney, OrganPrediction::from_probability(kidney));
        map.insert(Organ::Lung, OrganPrediction::from_probability(lung));
        map
    }

    #[test]
    fn test_summary_prompt_embeds_predictions_and_alert_directive() {
        let prompt = summary_prompt(
            "PARACETAMOL",
            "Analgesic",
            "19-45",
            "F",
            1,
            &predictions(0.7, 0.2, 0.1),
            35.3,
            Confidence::Low,
            ExplanationMode::Clinical,
        );

        assert!(prompt.contains("Drug: PARACETAMOL"));
        assert!(prompt.contains("Class: Analgesic"));
        assert!(prompt.contains("Polypharmacy: Yes"));
        assert!(prompt.contains("- LIVER: 70.0% (High)"));
        assert!(prompt.contains("Overall risk: 35.3%"));
        assert!(prompt.contains("[GREEN ALERT / YELLOW ALERT / RED ALERT]"));
        assert!(prompt.contains("Healthcare professionals"));
        // Drug is in the knowledge base, so its profile is embedded
        assert!(prompt.contains("Primary concern: hepatotoxicity"));
    }

    #[test]
    fn test_summary_prompt_lay_audience_and_unknown_drug() {
        let prompt = summary_prompt(
            "NOVELDRUG",
            "Unknown Class",
            "65+",
            "M",
            0,
            &predictions(0.1, 0.1, 0.1),
            10.0,
            Confidence::High,
            ExplanationMode::Lay,
        );

        assert!(prompt.contains("Audience: Patients. Use simple language."));
        assert!(prompt.contains("Polypharmacy: No"));
        assert!(!prompt.contains("Known risk profile"));
    }

    #[test]
    fn test_detailed_prompt_reflects_liver_dominance() {
        let prompt = detailed_prompt(
            "PARACETAMOL",
            "Analgesic",
            &predictions(0.9, 0.1, 0.1),
            44.5,
            "Liver risk",
            "Low",
        );

        assert!(prompt.contains("- LIVER: 90.0% (High)"));
        assert!(prompt.contains("- KIDNEY: 10.0% (Low)"));
        assert!(prompt.contains("Primary Risk Driver: Liver risk"));
    }

    #[test]
    fn test_detailed_prompt_has_five_sections() {
        let prompt = detailed_prompt("X", "Unknown Class", &predictions(0.5, 0.5, 0.5), 50.0, "Liver risk", "High");
        for section in [
            "1. IDENTIFIED ISSUES",
            "2. POSSIBLE CONSEQUENCES",
            "3. RISK PATHWAYS",
            "4. MONITORING RECOMMENDATIONS",
            "5. RISK MITIGATION STRATEGIES",
        ] {
            assert!(prompt.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn test_fallback_contains_primary_driver() {
        let fallback = fallback_explanation("Liver risk, Polypharmacy");
        assert!(!fallback.is_empty());
        assert!(fallback.contains("Liver risk, Polypharmacy"));
    }
}
