//! AI request orchestrator — one outstanding remote turn at a time.
//!
//! DESIGN
//! ======
//! `ChatSession` pairs the conversation store with an Idle/Sending gate.
//! `submit` appends the user message optimistically, snapshots the history as
//! it stood *before* that append, makes exactly one remote call, and settles
//! with exactly one model-role append: the reply, or a fixed fallback. The
//! write lock is held only around state changes, never across the network
//! await; mutual exclusion of requests comes from the gate, not the lock.
//!
//! Every turn ends back in Idle: transport failures, error statuses, and
//! unparseable bodies all collapse to the connection fallback, and an empty
//! reply gets its own apology text, so no outcome leaves the session stuck.

use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use tracing::{info, warn};

use super::store::{ChatEvent, ConversationStore, Message};
use crate::llm::{ChatTurn, Turn};
use crate::persona;

// =============================================================================
// TYPES
// =============================================================================

/// Request gate. `Sending` means a remote call is in flight and new submits
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Sending,
}

/// How a `submit` call settled. Rejections have no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A model-role message (reply or fallback) was appended.
    Replied,
    /// The utterance was empty or whitespace-only.
    RejectedEmpty,
    /// Another turn was already in flight.
    RejectedBusy,
    /// The session was reset while the call was in flight; the settled reply
    /// was discarded without an append.
    Discarded,
}

struct SessionInner {
    store: ConversationStore,
    state: TurnState,
    /// Bumped by `reset` so an in-flight turn can detect it was superseded.
    generation: u64,
}

// =============================================================================
// SESSION
// =============================================================================

/// One conversation instance: store, gate, and the remote-model backend.
pub struct ChatSession {
    inner: RwLock<SessionInner>,
    backend: Arc<dyn ChatTurn>,
}

impl ChatSession {
    #[must_use]
    pub fn new(backend: Arc<dyn ChatTurn>) -> Self {
        let inner = SessionInner { store: ConversationStore::new(), state: TurnState::Idle, generation: 0 };
        Self { inner: RwLock::new(inner), backend }
    }

    /// Snapshot of the conversation log in chronological order.
    pub async fn log(&self) -> Vec<Message> {
        self.inner.read().await.store.current().to_vec()
    }

    pub async fn state(&self) -> TurnState {
        self.inner.read().await.state
    }

    /// Register a presentation-layer subscriber for store changes.
    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<ChatEvent> {
        self.inner.write().await.store.subscribe()
    }

    /// Start over: singleton greeting log, Idle gate. Accepted in any state;
    /// a turn still in flight will notice the generation bump when it settles
    /// and discard its reply.
    pub async fn reset(&self) {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.state = TurnState::Idle;
        inner.store.reset();
        info!("chat: conversation reset");
    }

    /// Submit one user utterance and settle the turn.
    ///
    /// Empty input and submits while Sending are silent no-ops (reported in
    /// the outcome, but with no log change and no remote call). Otherwise the
    /// user message is appended immediately and the turn always settles with
    /// exactly one model-role append.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::RejectedEmpty;
        }

        let (history, generation) = {
            let mut inner = self.inner.write().await;
            if inner.state == TurnState::Sending {
                info!("chat: submit rejected, turn already in flight");
                return SubmitOutcome::RejectedBusy;
            }

            // History is the log as it stood before this utterance; the
            // utterance itself travels in the dedicated field. Earlier
            // fallback texts stay in history, matching the reference
            // behavior (flagged in DESIGN.md).
            let history: Vec<Turn> = inner
                .store
                .current()
                .iter()
                .map(|m| Turn::new(m.role.wire_name(), m.text.clone()))
                .collect();
            inner.store.append(Message::user(trimmed));
            inner.state = TurnState::Sending;
            (history, inner.generation)
        };

        info!(history_len = history.len(), utterance_len = trimmed.len(), "chat: turn started");
        let result = self.backend.send_turn(trimmed, &history).await;

        let reply = match result {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                info!("chat: empty reply, substituting fallback");
                persona::FALLBACK_EMPTY_REPLY.to_string()
            }
            Err(e) => {
                warn!(error = %e, "chat: turn failed");
                persona::FALLBACK_CONNECTION_ERROR.to_string()
            }
        };

        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            info!("chat: session reset mid-turn, reply discarded");
            return SubmitOutcome::Discarded;
        }
        inner.store.append(Message::model(reply));
        inner.state = TurnState::Idle;
        SubmitOutcome::Replied
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
