use serde::Serialize;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::models::{SessionSnapshot, SubmitOutcome, Ticket};

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone, PartialEq, Eq)]
pub enum ActorError {
    /// The session actor has stopped (closed, or every handle dropped).
    #[error("Session is closed")]
    Closed,
    /// An error indicating that an actor operation timed out.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for ActorError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        ActorError::Timeout(format!("Actor operation timed out: {}", err))
    }
}

impl From<oneshot::error::RecvError> for ActorError {
    fn from(_: oneshot::error::RecvError) -> Self {
        ActorError::Closed
    }
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the session actor.
#[derive(Debug)]
pub enum SessionMessage {
    /// A user utterance to append.
    Submit {
        text: String,
        /// A channel to report whether the utterance was accepted.
        responder: oneshot::Sender<SubmitOutcome>,
    },
    /// Delivered by the scheduler once the typing delay has elapsed.
    Resolve { ticket: Ticket },
    /// Discard the conversation (cancelling any pending reply) and start a new one.
    Reset {
        /// Receives the id of the new conversation.
        responder: oneshot::Sender<Uuid>,
    },
    /// A request for the current transcript.
    Snapshot {
        responder: oneshot::Sender<SessionSnapshot>,
    },
    /// Cancel any pending reply and stop the actor.
    Close { responder: oneshot::Sender<()> },
}
