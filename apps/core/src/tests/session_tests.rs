//! Conversation Tests
//!
//! The turn-taking state machine without an actor or a timer.

use crate::brain::{CannedReply, ResponseEngine};
use crate::conversation::Conversation;
use crate::models::{Speaker, SubmitOutcome, Ticket, Turn};

fn ticket_of(outcome: SubmitOutcome) -> Ticket {
    match outcome {
        SubmitOutcome::Accepted { ticket } => ticket,
        other => panic!("expected Accepted, got {:?}", other),
    }
}

#[cfg(test)]
mod rejection_tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_are_noops() {
        let mut conversation = Conversation::new();

        for text in ["", "   ", "\t\n"] {
            assert_eq!(conversation.submit(text), SubmitOutcome::RejectedEmpty);
        }

        assert!(conversation.turns().is_empty());
        assert!(!conversation.is_awaiting_response());
    }

    #[test]
    fn test_submit_while_awaiting_is_noop() {
        let mut conversation = Conversation::new();
        conversation.submit("glioma");
        let before = conversation.snapshot();

        assert_eq!(conversation.submit("meningioma"), SubmitOutcome::RejectedBusy);
        assert_eq!(conversation.snapshot(), before);
    }

    #[test]
    fn test_empty_while_awaiting_reports_empty() {
        let mut conversation = Conversation::new();
        conversation.submit("glioma");
        assert_eq!(conversation.submit("  "), SubmitOutcome::RejectedEmpty);
    }
}

#[cfg(test)]
mod round_trip_tests {
    use super::*;

    #[test]
    fn test_round_trip_appends_user_then_bot() {
        let mut conversation = Conversation::new();
        let mut engine = ResponseEngine::with_seed(9);

        let ticket = ticket_of(conversation.submit("hello"));
        let snapshot = conversation.snapshot();
        assert!(snapshot.awaiting_response);
        assert_eq!(snapshot.turns, vec![Turn::user("hello")]);

        conversation.resolve(ticket, &mut engine);

        let snapshot = conversation.snapshot();
        assert!(!snapshot.awaiting_response);
        assert_eq!(
            snapshot.turns,
            vec![Turn::user("hello"), Turn::bot(CannedReply::Greeting.text())]
        );
    }

    #[test]
    fn test_accepts_again_after_resolve() {
        let mut conversation = Conversation::new();
        let mut engine = ResponseEngine::with_seed(9);

        let first = ticket_of(conversation.submit("glioma"));
        conversation.resolve(first, &mut engine);
        let second = ticket_of(conversation.submit("pituitary"));

        assert_ne!(first, second);
        assert_eq!(second.session_id, conversation.id());
        conversation.resolve(second, &mut engine);

        let speakers: Vec<Speaker> = conversation.turns().iter().map(|t| t.speaker).collect();
        assert_eq!(
            speakers,
            vec![Speaker::User, Speaker::Bot, Speaker::User, Speaker::Bot]
        );
    }

    #[test]
    fn test_ticket_from_previous_conversation_is_ignored() {
        let mut old = Conversation::new();
        let stale = ticket_of(old.submit("glioma"));

        let mut fresh = Conversation::new();
        let current = ticket_of(fresh.submit("meningioma"));
        // both are the first submit of their conversation
        assert_eq!(stale.seq, current.seq);

        let mut engine = ResponseEngine::with_seed(9);
        assert!(fresh.resolve(stale, &mut engine).is_none());
        assert!(fresh.is_awaiting_response());
        assert_eq!(fresh.turns().len(), 1);
    }

    #[test]
    fn test_snapshot_serializes_for_transcript_dump() {
        let mut conversation = Conversation::new();
        conversation.submit("benign");
        let json = serde_json::to_value(conversation.snapshot()).unwrap();

        assert_eq!(json["awaiting_response"], true);
        assert_eq!(json["turns"][0]["speaker"], "user");
        assert_eq!(json["turns"][0]["text"], "benign");
        assert_eq!(json["session_id"], conversation.id().to_string());
    }
}
