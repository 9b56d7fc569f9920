//! Prediction handler
//!
//! The full pipeline for `POST /predict`: encode, run the three organ
//! classifiers, aggregate, compose the summary prompt, and ask the
//! explanation provider. A provider failure degrades to the canned
//! fallback sentence; the prediction itself still succeeds.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::llm::SUMMARY_MAX_TOKENS;
use crate::logic::{features, knowledge, prompt, risk};
use crate::models::{Confidence, Organ, OrganPrediction, PredictionRequest};
use crate::{AppResult, AppState};

/// Fixed disclaimer attached to every prediction
const DISCLAIMER: &str =
    "This is an ML-based risk estimation from FAERS data. Not a medical diagnosis.";

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub status: &'static str,
    pub predictions: BTreeMap<Organ, OrganPrediction>,
    pub overall_risk_score: f64,
    pub confidence: Confidence,
    pub primary_driver: String,
    pub drug_class: &'static str,
    pub drug_name: String,
    pub default_explanation: String,
    pub disclaimer: &'static str,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictionRequest>,
) -> AppResult<Json<PredictionResponse>> {
    let age_bucket = features::age_bucket(req.age);
    let drug_name = req.active_ingredient.trim().to_uppercase();
    let drug_class = knowledge::drug_class(&drug_name);

    let vector = state.encoders.encode(&req);
    tracing::debug!(features = %vector.to_log_entry(), "encoded request");

    let predictions = state.models.predict_all(&vector)?;
    let overall_risk = risk::overall_risk_score(&predictions);
    let confidence = risk::confidence(&predictions);
    let primary_driver = risk::primary_driver(&predictions, req.polypharmacy);

    let agent_prompt = prompt::summary_prompt(
        &drug_name,
        drug_class,
        age_bucket,
        &req.sex,
        req.polypharmacy,
        &predictions,
        overall_risk,
        confidence,
        req.explanation_mode,
    );

    let explanation = match state.llm.complete(&agent_prompt, SUMMARY_MAX_TOKENS).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Explanation provider failed: {}", e);
            prompt::fallback_explanation(&primary_driver)
        }
    };

    tracing::info!(
        "Prediction served: drug={} overall={}% driver={}",
        drug_name,
        overall_risk,
        primary_driver
    );

    Ok(Json(PredictionResponse {
        status: "success",
        predictions,
        overall_risk_score: overall_risk,
        confidence,
        primary_driver,
        drug_class,
        drug_name,
        default_explanation: explanation,
        disclaimer: DISCLAIMER,
    }))
}
