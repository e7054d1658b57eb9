//! Chat — conversation store and request orchestration.

pub mod orchestrator;
pub mod store;

pub use orchestrator::{ChatSession, SubmitOutcome, TurnState};
pub use store::{ChatEvent, ConversationStore, Message, Role};
