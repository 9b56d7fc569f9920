//! Detailed analysis handler
//!
//! Composes the five-section report prompt from an earlier prediction's
//! results and forwards it to the explanation provider. Unlike `/predict`
//! there is no fallback: a provider failure is a 500.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::llm::DETAILED_MAX_TOKENS;
use crate::logic::prompt;
use crate::models::DetailedAnalysisRequest;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct DetailedAnalysisResponse {
    pub status: &'static str,
    pub detailed_explanation: String,
}

pub async fn detailed_analysis(
    State(state): State<AppState>,
    Json(req): Json<DetailedAnalysisRequest>,
) -> AppResult<Json<DetailedAnalysisResponse>> {
    let detailed_prompt = prompt::detailed_prompt(
        &req.drug_name,
        &req.drug_class,
        &req.predictions,
        req.overall_risk_score,
        &req.primary_driver,
        &req.confidence,
    );

    let detailed_explanation = state
        .llm
        .complete(&detailed_prompt, DETAILED_MAX_TOKENS)
        .await
        .map_err(|e| AppError::Analysis(e.to_string()))?;

    tracing::info!("Detailed analysis served: drug={}", req.drug_name);

    Ok(Json(DetailedAnalysisResponse {
        status: "success",
        detailed_explanation,
    }))
}
