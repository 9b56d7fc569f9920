//! Explanation provider boundary

pub mod client;

pub use client::{ExplanationClient, LlmError, DETAILED_MAX_TOKENS, SUMMARY_MAX_TOKENS};
