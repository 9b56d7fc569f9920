//! Configuration module

use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Directory holding the model and encoder artifacts
    pub artifacts_dir: PathBuf,

    /// Explanation provider API key (required)
    pub groq_api_key: String,

    /// Explanation provider base URL (OpenAI-compatible)
    pub groq_base_url: String,

    /// Chat model identifier
    pub groq_model: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// The provider API key has no default; a missing key refuses startup.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            artifacts_dir: env::var("MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("models_improved")),

            groq_api_key: env::var("GROQ_API_KEY")
                .context("GROQ_API_KEY not set in environment")?,

            groq_base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),

            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
        })
    }
}
