//! Conversation store — the append-only message log.
//!
//! DESIGN
//! ======
//! The log is the single source of truth for what the conversation looks
//! like. Element 0 is always the canonical greeting; mutation is append or a
//! full reset back to the singleton greeting, never an in-place edit.
//! Presentation layers subscribe for [`ChatEvent`]s and redraw; the store
//! never knows who is listening.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::persona;

// =============================================================================
// MESSAGE
// =============================================================================

/// Author of one conversation turn. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// The provider wire value for this role.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// One turn in the conversation. Immutable after creation; the timestamp is
/// display-only.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into(), timestamp: Utc::now() }
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into(), timestamp: Utc::now() }
    }

    fn greeting() -> Self {
        Self::model(persona::GREETING)
    }
}

// =============================================================================
// CHANGE NOTIFICATIONS
// =============================================================================

/// Published to subscribers on every store mutation.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A message was appended to the end of the log.
    Appended(Message),
    /// The log was replaced with the singleton greeting.
    Reset,
}

// =============================================================================
// STORE
// =============================================================================

/// Ordered, append-only conversation log seeded with the greeting.
pub struct ConversationStore {
    log: Vec<Message>,
    watchers: Vec<mpsc::UnboundedSender<ChatEvent>>,
}

impl ConversationStore {
    #[must_use]
    pub fn new() -> Self {
        Self { log: vec![Message::greeting()], watchers: Vec::new() }
    }

    /// Append one message to the end of the log and notify subscribers.
    pub fn append(&mut self, message: Message) {
        self.log.push(message.clone());
        self.publish(&ChatEvent::Appended(message));
    }

    /// Replace the log with the singleton greeting and notify subscribers.
    pub fn reset(&mut self) {
        self.log = vec![Message::greeting()];
        self.publish(&ChatEvent::Reset);
    }

    /// The log in chronological order. Callers must not rely on capacity;
    /// the slice is invalidated by the next mutation.
    #[must_use]
    pub fn current(&self) -> &[Message] {
        &self.log
    }

    /// Register a subscriber. Dropped receivers are pruned on the next
    /// publish.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ChatEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.watchers.push(tx);
        rx
    }

    fn publish(&mut self, event: &ChatEvent) {
        self.watchers.retain(|w| w.send(event.clone()).is_ok());
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
