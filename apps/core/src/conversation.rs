//! Conversation - the turn-taking state machine.
//!
//! `Idle` --submit--> `AwaitingResponse` --resolve--> `Idle`. The transcript
//! is append-only; a user turn without its bot turn is the observable
//! "typing" state. Timing lives in the session actor, not here.

use tracing::debug;
use uuid::Uuid;

use crate::actors::traits::Responder;
use crate::models::{SessionSnapshot, SubmitOutcome, Ticket, Turn};

#[derive(Debug, Clone)]
struct PendingReply {
    ticket: Ticket,
    text: String,
}

/// One conversation: ordered turns plus at most one pending reply
#[derive(Debug, Clone)]
pub struct Conversation {
    id: Uuid,
    turns: Vec<Turn>,
    pending: Option<PendingReply>,
    next_seq: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
            pending: None,
            next_seq: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.pending.is_some()
    }

    /// Appends a user turn and starts waiting for the reply.
    ///
    /// Whitespace-only text, or any text while a reply is pending, is
    /// rejected without touching the transcript.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            debug!(session_id = %self.id, "Ignoring empty submission");
            return SubmitOutcome::RejectedEmpty;
        }
        if self.pending.is_some() {
            debug!(session_id = %self.id, "Ignoring submission while awaiting response");
            return SubmitOutcome::RejectedBusy;
        }

        let ticket = Ticket {
            session_id: self.id,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        self.turns.push(Turn::user(text));
        self.pending = Some(PendingReply {
            ticket,
            text: text.to_string(),
        });

        SubmitOutcome::Accepted { ticket }
    }

    /// Produces and appends the bot turn for the pending submission.
    ///
    /// Returns `None` without side effects when nothing is pending or the
    /// ticket does not belong to the pending submission.
    pub fn resolve<R>(&mut self, ticket: Ticket, responder: &mut R) -> Option<&Turn>
    where
        R: Responder + ?Sized,
    {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {}
            _ => return None,
        }
        let pending = self.pending.take()?;

        let packet = responder.reply(&pending.text);
        debug!(
            session_id = %self.id,
            seq = ticket.seq,
            intent = %packet.classification.intent,
            "Resolved pending reply"
        );

        self.turns.push(Turn::bot(packet.response));
        self.turns.last()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            turns: self.turns.clone(),
            awaiting_response: self.is_awaiting_response(),
        }
    }
}
