//! Chat-completion client for the explanation provider
//!
//! One POST per explanation, no retries; callers decide whether a failure
//! degrades to a fallback or surfaces as an error. Timeouts are left to
//! the client defaults.

use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Token ceiling for the `/predict` summary explanation
pub const SUMMARY_MAX_TOKENS: u32 = 400;

/// Token ceiling for the `/detailed-analysis` report
pub const DETAILED_MAX_TOKENS: u32 = 1500;

/// Sampling temperature for every explanation call
const TEMPERATURE: f64 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("no content in completion response")]
    EmptyResponse,
}

/// Thin client over an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ExplanationClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl ExplanationClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// Send one prompt and return the trimmed completion text.
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let request = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "temperature": TEMPERATURE,
            "max_tokens": max_tokens
        });

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let json: serde_json::Value = resp.json().await?;

        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or(LlmError::EmptyResponse)
    }
}
