//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::model::ModelError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Any unexpected failure in a request handler; the raw message is
    /// surfaced to the caller.
    Internal(String),

    /// Detailed-analysis failures are wrapped rather than recovered;
    /// this endpoint has no fallback.
    Analysis(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                msg
            }
            AppError::Analysis(msg) => {
                tracing::error!("Detailed analysis error: {}", msg);
                format!("Failed to generate detailed analysis: {msg}")
            }
        };

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::Internal(err.to_string())
    }
}
