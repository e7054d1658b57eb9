//! LLM — remote-model adapter for the digital-twin chat.
//!
//! DESIGN
//! ======
//! The orchestrator depends only on the [`ChatTurn`] trait; the concrete
//! backend is the Google generative-language client in [`gemini`], configured
//! from environment variables. A missing credential degrades to
//! [`types::Unconfigured`] so that chat turns fail visibly instead of the
//! process refusing to start.

pub mod config;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{ChatTurn, LlmError, Turn, Unconfigured};
