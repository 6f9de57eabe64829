//! Integration Tests
//!
//! Full sessions built from configuration, with the real Tokio timer under
//! paused time so the typing delay is observed exactly.

use crate::actors::session::SessionHandle;
use crate::brain::{CannedReply, KnowledgeBase};
use crate::brain::responder::GENERAL_SUFFIX;
use crate::config::AssistantConfig;
use crate::models::{Speaker, Turn};
use tokio::time::{sleep, Duration};

fn config(seed: u64) -> AssistantConfig {
    AssistantConfig {
        typing_delay_ms: 1000,
        rng_seed: Some(seed),
        ..AssistantConfig::default()
    }
}

#[cfg(test)]
mod workflow_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_typing_delay() {
        let session = SessionHandle::new(&config(1));

        session.submit("hello").await.unwrap();

        sleep(Duration::from_millis(999)).await;
        let snapshot = session.snapshot().await.unwrap();
        assert!(snapshot.awaiting_response);
        assert_eq!(snapshot.turns.len(), 1);

        sleep(Duration::from_millis(2)).await;
        let snapshot = session.snapshot().await.unwrap();
        assert!(!snapshot.awaiting_response);
        assert_eq!(
            snapshot.turns,
            vec![Turn::user("hello"), Turn::bot(CannedReply::Greeting.text())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_glioma_symptoms_conversation() {
        let session = SessionHandle::new(&config(7));
        let mut snapshots = session.subscribe();

        session
            .submit("What are the symptoms of glioma?")
            .await
            .unwrap();
        let snapshot = snapshots
            .wait_for(|s| s.turns.len() == 2)
            .await
            .unwrap()
            .clone();

        let reply = &snapshot.turns[1];
        assert_eq!(reply.speaker, Speaker::Bot);
        assert!(reply.text.starts_with("Glioma symptoms include: "));
        assert!(reply
            .text
            .ends_with("Other common symptoms are progressive headaches, seizures, and neurological deficits. Would you like to know about treatment options?"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_question_gets_topic_menu() {
        let session = SessionHandle::new(&config(3));
        let mut snapshots = session.subscribe();

        session.submit("xyz nonsense").await.unwrap();
        let snapshot = snapshots
            .wait_for(|s| !s.awaiting_response && !s.turns.is_empty())
            .await
            .unwrap()
            .clone();

        let text = &snapshot.turns[1].text;
        assert!(text.ends_with(GENERAL_SUFFIX));
        assert!(KnowledgeBase::builtin()
            .general()
            .iter()
            .any(|sentence| text.starts_with(sentence)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_before_delay_leaves_new_session_untouched() {
        let session = SessionHandle::new(&config(1));

        session.submit("glioma").await.unwrap();
        sleep(Duration::from_millis(500)).await;
        let new_id = session.reset().await.unwrap();

        sleep(Duration::from_millis(2000)).await;
        let snapshot = session.snapshot().await.unwrap();
        assert_eq!(snapshot.session_id, new_id);
        assert!(snapshot.turns.is_empty());
        assert!(!snapshot.awaiting_response);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_seed_same_transcript() {
        let queries = ["glioma", "meningioma surgery", "no tumor signs", "xyz nonsense"];

        let mut transcripts = Vec::new();
        for _ in 0..2 {
            let session = SessionHandle::new(&config(99));
            for query in queries {
                session.submit(query).await.unwrap();
                sleep(Duration::from_millis(1001)).await;
            }
            transcripts.push(session.snapshot().await.unwrap().turns);
            session.close().await.unwrap();
        }

        assert_eq!(transcripts[0].len(), queries.len() * 2);
        assert_eq!(transcripts[0], transcripts[1]);
    }
}
