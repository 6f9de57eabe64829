use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

/// A single message within a conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The text content of the message.
    pub text: String,
    /// The author of the message.
    pub speaker: Speaker,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: Speaker::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: Speaker::Bot,
        }
    }
}

/// Identifies the submit a pending reply belongs to.
///
/// Carries the conversation id so a ticket issued before a reset can never
/// resolve against the conversation that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    pub session_id: Uuid,
    pub seq: u64,
}

/// What happened to a submitted utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// User turn appended; a bot turn will follow.
    Accepted { ticket: Ticket },
    /// Text was empty or whitespace only. Nothing changed.
    RejectedEmpty,
    /// A reply is still pending. Nothing changed.
    RejectedBusy,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Read-only view of a conversation, published to observers after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The unique identifier for the conversation (UUID).
    pub session_id: Uuid,
    /// Turns in conversational order.
    pub turns: Vec<Turn>,
    /// Whether a bot turn is pending (drives the typing indicator).
    pub awaiting_response: bool,
}

impl SessionSnapshot {
    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
