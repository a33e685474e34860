// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gemini text generation client.
//!
//! One non-streaming `generateContent` call per roast. The returned text is
//! passed through untouched.

use crate::config::Config;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Generation failures. The display string is what callers see as `details`.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Gemini API key not configured")]
    NotConfigured,

    #[error("{0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Response was blocked: {0}")]
    Blocked(String),

    #[error("Gemini returned no text")]
    Empty,
}

/// Gemini client bound to one model.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(GEMINI_HTTP_TIMEOUT)
            .build()
            .context("failed building Gemini HTTP client")?;

        Ok(Self {
            http,
            api_base: config.gemini_api_base.clone(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Send a prompt and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if !self.is_configured() {
            return Err(GenerationError::NotConfigured);
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api(upstream_error_message(status, &body)));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Api(format!("Failed to parse response: {}", e)))?;

        extract_text(api_response)
    }
}

/// Prefer the `error.message` field of a Gemini error payload.
fn upstream_error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Gemini API error {}: {}", status, body))
}

fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenerationError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::Empty)?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(GenerationError::Blocked("SAFETY".to_string()));
    }

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        return Err(GenerationError::Empty);
    }
    Ok(text)
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = parse(
            r#"{"candidates": [{"content": {"role": "model",
                "parts": [{"text": "Hello "}, {"text": "runner"}]},
                "finishReason": "STOP"}]}"#,
        );
        assert_eq!(extract_text(response).unwrap(), "Hello runner");
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let response = parse(r#"{"candidates": []}"#);
        assert!(matches!(extract_text(response), Err(GenerationError::Empty)));
    }

    #[test]
    fn test_extract_text_safety_block() {
        let response = parse(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#);
        assert!(matches!(
            extract_text(response),
            Err(GenerationError::Blocked(_))
        ));

        let response = parse(r#"{"promptFeedback": {"blockReason": "OTHER"}}"#);
        assert!(matches!(
            extract_text(response),
            Err(GenerationError::Blocked(reason)) if reason == "OTHER"
        ));
    }

    #[test]
    fn test_upstream_error_message_prefers_payload() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            upstream_error_message(reqwest::StatusCode::BAD_REQUEST, body),
            "API key not valid"
        );

        let message = upstream_error_message(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert!(message.contains("502"));
        assert!(message.contains("upstream down"));
    }

    #[tokio::test]
    async fn test_generate_without_key_is_not_configured() {
        let config = Config {
            gemini_api_key: String::new(),
            ..Config::test_default()
        };
        let client = GeminiClient::new(&config).unwrap();
        assert!(matches!(
            client.generate("hi").await,
            Err(GenerationError::NotConfigured)
        ));
    }
}
