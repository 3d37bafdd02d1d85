//! Gemini-backed oracle over the `generateContent` REST endpoint.

use std::time::Duration;

use serde_json::{json, Value};
use tracing::debug;

use crate::prompt::{build_analysis_prompt, build_move_prompt, sanitize_reply};
use crate::{Difficulty, MoveOracle, OracleError};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Effective ceiling on one oracle call; beyond this the session falls
/// back to a random legal move anyway.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

pub struct GeminiOracle {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiOracle {
    pub fn new(api_key: impl Into<String>) -> Result<Self, OracleError> {
        Self::with_model(api_key, DEFAULT_MODEL, DEFAULT_TIMEOUT)
    }

    pub fn with_model(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, OracleError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    fn generate(
        &self,
        prompt: &str,
        temperature: f64,
        max_output_tokens: u32,
    ) -> Result<String, OracleError> {
        let url = format!("{API_BASE}/{}:generateContent?key={}", self.model, self.api_key);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": temperature,
                "maxOutputTokens": max_output_tokens,
            },
        });

        let response = self.client.post(&url).json(&body).send()?;
        if response.status().as_u16() == 429 {
            return Err(OracleError::QuotaExhausted);
        }
        let value: Value = response.error_for_status()?.json()?;

        let text = value["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| OracleError::Malformed(value.to_string()))?;
        Ok(text.to_string())
    }

    /// One-line position commentary. Purely cosmetic; failures surface as
    /// typed errors for the caller to render, never as state changes.
    pub fn analyze_position(&self, fen: &str) -> Result<String, OracleError> {
        let text = self.generate(&build_analysis_prompt(fen), 0.2, 40)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(OracleError::EmptyReply);
        }
        Ok(trimmed.to_string())
    }
}

impl MoveOracle for GeminiOracle {
    fn propose_move(
        &mut self,
        fen: &str,
        san_history: &[String],
        difficulty: Difficulty,
    ) -> Result<String, OracleError> {
        let prompt = build_move_prompt(fen, san_history, difficulty);
        let raw = self.generate(&prompt, 0.1, 5)?;
        debug!(reply = %raw, "oracle reply");
        sanitize_reply(&raw).ok_or(OracleError::EmptyReply)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
