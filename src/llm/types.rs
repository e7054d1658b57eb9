//! LLM types — adapter-neutral history records and errors.
//!
//! The orchestrator talks to the remote model through the [`ChatTurn`] trait
//! so tests can substitute a mock backend for the real HTTP client.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by remote-model operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// No credential was configured at startup; every call fails.
    #[error("model backend not configured")]
    NotConfigured,

    /// The HTTP request to the model provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// HISTORY RECORD
// =============================================================================

/// One prior conversation entry sent as context with a turn.
///
/// `role` is the provider wire value (`"user"` or `"model"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: String,
    pub text: String,
}

impl Turn {
    #[must_use]
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self { role: role.into(), text: text.into() }
    }
}

// =============================================================================
// CHAT TURN TRAIT
// =============================================================================

/// Async trait for one remote chat turn. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ChatTurn: Send + Sync {
    /// Send `utterance` with the prior `history` and return the reply text.
    ///
    /// An empty reply is a valid success: the orchestrator substitutes its
    /// own fallback text. Only transport/status/parse problems are errors.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the response is
    /// malformed, or no backend is configured.
    async fn send_turn(&self, utterance: &str, history: &[Turn]) -> Result<String, LlmError>;
}

/// Backend used when startup found no credential. Always fails, so a missing
/// key surfaces as an ordinary per-turn failure rather than a crash.
pub struct Unconfigured;

#[async_trait::async_trait]
impl ChatTurn for Unconfigured {
    async fn send_turn(&self, _utterance: &str, _history: &[Turn]) -> Result<String, LlmError> {
        Err(LlmError::NotConfigured)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
