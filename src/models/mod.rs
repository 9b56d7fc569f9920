//! API schema and domain types

pub mod prediction;
pub mod request;

pub use prediction::{Confidence, ExplanationMode, Organ, OrganPrediction, RiskLevel};
pub use request::{DetailedAnalysisRequest, PredictionRequest};
