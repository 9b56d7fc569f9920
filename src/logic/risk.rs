//! Risk Aggregator
//!
//! Folds the three organ probabilities into one percentage score,
//! derives a confidence label from their spread, and names the dominant
//! risk driver.

use std::collections::BTreeMap;

use crate::models::{Confidence, Organ, OrganPrediction};

/// Fixed aggregation weight per organ. Weights sum to 1.0.
pub fn organ_weight(organ: Organ) -> f64 {
    match organ {
        Organ::Liver => 0.40,
        Organ::Kidney => 0.35,
        Organ::Lung => 0.25,
    }
}

/// Weighted sum of the organ probabilities, scaled to a percentage and
/// rounded to 1 decimal.
pub fn overall_risk_score(predictions: &BTreeMap<Organ, OrganPrediction>) -> f64 {
    let overall: f64 = predictions
        .iter()
        .map(|(organ, pred)| pred.probability * organ_weight(*organ))
        .sum();
    (overall * 100.0 * 10.0).round() / 10.0
}

/// Confidence from the population variance of the probabilities.
pub fn confidence(predictions: &BTreeMap<Organ, OrganPrediction>) -> Confidence {
    let probs: Vec<f64> = predictions.values().map(|p| p.probability).collect();
    Confidence::from_variance(population_variance(&probs))
}

fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// The dominant factor behind the score. The highest-probability organ is
/// named only when it clears the Moderate threshold; polypharmacy is
/// appended independently.
pub fn primary_driver(predictions: &BTreeMap<Organ, OrganPrediction>, polypharmacy: u8) -> String {
    let mut factors: Vec<String> = Vec::new();

    // First max wins on ties, in fixed organ order
    let max_entry = predictions
        .iter()
        .fold(None::<(&Organ, &OrganPrediction)>, |best, (organ, pred)| {
            match best {
                Some((_, b)) if b.probability >= pred.probability => best,
                _ => Some((organ, pred)),
            }
        });

    if let Some((organ, pred)) = max_entry {
        if pred.probability > 0.35 {
            factors.push(format!("{} risk", organ.display_name()));
        }
    }
    if polypharmacy == 1 {
        factors.push("Polypharmacy".to_string());
    }

    if factors.is_empty() {
        "Low overall risk profile".to_string()
    } else {
        factors.join(", ")
    }
}
