//! MediVision API Server
//!
//! Explainable pharmacovigilance risk prediction over FAERS-trained
//! organ-damage classifiers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      MEDIVISION API                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐  ┌───────────┐  ┌──────────┐  ┌─────────────┐ │
//! │  │ Feature  │→ │ Organ     │→ │ Risk     │→ │ Prompt      │ │
//! │  │ Encoder  │  │ Predictor │  │ Aggreg.  │  │ Composer    │ │
//! │  └──────────┘  └───────────┘  └──────────┘  └──────┬──────┘ │
//! │   label          3x ONNX        weights,           ▼        │
//! │   encoders       sessions       variance    chat-completion │
//! │                                              provider (ext) │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Artifacts load once at startup; a missing model or encoder refuses
//! startup entirely. Requests are stateless and independent.

mod config;
mod error;
mod handlers;
mod llm;
mod logic;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::llm::ExplanationClient;
use crate::logic::features::EncoderSet;
use crate::logic::model::ModelRegistry;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medivision_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env().expect("Failed to load configuration");

    tracing::info!("MediVision API starting...");
    tracing::info!("Artifacts directory: {}", config.artifacts_dir.display());

    // Load artifacts - any failure here is fatal
    let encoders = EncoderSet::load(&config.artifacts_dir).expect("Failed to load label encoders");
    let registry =
        ModelRegistry::load(&config.artifacts_dir).expect("Failed to load model artifacts");

    tracing::info!(
        "Loaded {} organ models and {} label encoders",
        registry.organ_count(),
        encoders.columns()
    );

    let llm = ExplanationClient::new(
        config.groq_api_key.clone(),
        config.groq_base_url.clone(),
        config.groq_model.clone(),
    );

    // Build application state
    let state = AppState {
        encoders: Arc::new(encoders),
        models: Arc::new(registry),
        llm,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state: artifacts loaded once, read-only afterwards
#[derive(Clone)]
pub struct AppState {
    pub encoders: Arc<EncoderSet>,
    pub models: Arc<ModelRegistry>,
    pub llm: ExplanationClient,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::info))
        .route("/predict", post(handlers::predict::predict))
        .route("/detailed-analysis", post(handlers::analysis::detailed_analysis))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
