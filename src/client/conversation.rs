//! Conversation state machine for the chat widget.
//!
//! DESIGN
//! ======
//! `Idle → Submitting → Streaming → Idle`, with an `Error` pseudo-state
//! carrying a displayable message. A user message is immutable once
//! appended; the single in-flight assistant message is the only thing ever
//! mutated, located by id. The Idle-only submission rule guarantees at
//! most one outstanding exchange per conversation.

use serde::Serialize;
use uuid::Uuid;

use crate::llm::types::{ChatMessage, Role};

/// Fixed notice shown in place of a partial answer when an exchange fails.
pub const FALLBACK_NOTICE: &str = "Sorry — something went wrong while answering. Please try again.";

// =============================================================================
// TYPES
// =============================================================================

/// One displayed message. `id` orders and addresses it; the wire payload
/// strips ids via [`Conversation::request_payload`].
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
}

/// Exchange lifecycle phase. `Submitting` covers the window between the
/// user message going out and response headers arriving; `Streaming`
/// covers the window with a live assistant placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Streaming,
    Error(String),
}

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    phase: Phase,
    active: Option<Uuid>,
}

// =============================================================================
// TRANSITIONS
// =============================================================================

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True from submission until the stream completes or errors.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting | Phase::Streaming)
    }

    /// Submit a user message. Rejected (returning `None`, with no state
    /// change at all) when the text trims to empty or an exchange is in
    /// flight. Acceptance clears any prior error.
    pub fn submit(&mut self, text: &str) -> Option<Uuid> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_loading() {
            return None;
        }

        let id = Uuid::new_v4();
        self.messages
            .push(Message { id, role: Role::User, content: trimmed.to_owned() });
        self.phase = Phase::Submitting;
        self.active = None;
        Some(id)
    }

    /// Response headers arrived: append the empty assistant placeholder.
    /// Only valid while `Submitting`.
    pub fn begin_stream(&mut self) -> Option<Uuid> {
        if self.phase != Phase::Submitting {
            return None;
        }

        let id = Uuid::new_v4();
        self.messages
            .push(Message { id, role: Role::Assistant, content: String::new() });
        self.phase = Phase::Streaming;
        self.active = Some(id);
        Some(id)
    }

    /// Publish the accumulated buffer as the in-flight assistant message's
    /// content. Chunks addressed to anything but the active message are
    /// ignored — stale updates after completion must not land.
    pub fn apply_chunk(&mut self, id: Uuid, buffer: &str) {
        if self.phase != Phase::Streaming || self.active != Some(id) {
            return;
        }
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            buffer.clone_into(&mut message.content);
        }
    }

    /// Stream finished: whatever was last published is permanent.
    pub fn complete(&mut self) {
        self.phase = Phase::Idle;
        self.active = None;
    }

    /// Exchange failed. A partial assistant answer is replaced by the
    /// fixed fallback notice; with no placeholder yet, no message is
    /// appended and the error rides on the phase alone.
    pub fn fail(&mut self, notice: impl Into<String>) {
        if let Some(id) = self.active.take() {
            if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
                FALLBACK_NOTICE.clone_into(&mut message.content);
            }
        }
        self.phase = Phase::Error(notice.into());
    }

    /// Dismiss a displayed error, returning to `Idle`.
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, Phase::Error(_)) {
            self.phase = Phase::Idle;
        }
    }

    /// "New chat": discard everything.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.phase = Phase::Idle;
        self.active = None;
    }

    /// The id-stripped payload sent verbatim to `POST /chat`.
    #[must_use]
    pub fn request_payload(&self) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .map(|m| ChatMessage { role: m.role, content: m.content.clone() })
            .collect()
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
