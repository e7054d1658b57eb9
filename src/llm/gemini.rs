//! Google generative-language API client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent`. The system
//! instruction and sampling temperature are fixed at construction; each call
//! carries the prior history plus the current utterance as the final user
//! content. Pure parsing in `parse_response` for testability.

use std::time::Duration;

use super::config::LlmConfig;
use super::types::{ChatTurn, LlmError, Turn};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    system_instruction: String,
    temperature: f32,
}

impl GeminiClient {
    /// Build a client from typed config plus the fixed persona settings.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: LlmConfig, system_instruction: String, temperature: f32) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_key: config.api_key,
            model: config.model,
            base_url: config.base_url,
            system_instruction,
            temperature,
        })
    }

    /// Return the configured model name (e.g. `"gemini-3-flash-preview"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl ChatTurn for GeminiClient {
    async fn send_turn(&self, utterance: &str, history: &[Turn]) -> Result<String, LlmError> {
        let body = build_request(&self.system_instruction, self.temperature, utterance, history);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(serde::Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

// =============================================================================
// REQUEST BUILDING / PARSING
// =============================================================================

fn build_request<'a>(
    system_instruction: &'a str,
    temperature: f32,
    utterance: &'a str,
    history: &'a [Turn],
) -> ApiRequest<'a> {
    let mut contents: Vec<Content<'a>> = history
        .iter()
        .map(|turn| Content { role: &turn.role, parts: vec![Part { text: &turn.text }] })
        .collect();
    contents.push(Content { role: "user", parts: vec![Part { text: utterance }] });

    ApiRequest {
        system_instruction: SystemInstruction { parts: vec![Part { text: system_instruction }] },
        contents,
        generation_config: GenerationConfig { temperature },
    }
}

/// Extract the reply text from a generateContent response body.
///
/// A well-formed response with no candidates or no text parts yields an empty
/// string; the orchestrator maps that to its own fallback. Only undecodable
/// bodies are errors.
fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text = api
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    Ok(text)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
