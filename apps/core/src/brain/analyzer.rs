//! Response Engine - main orchestrator for the brain module.
//!
//! Classifies an utterance, picks the reply and records timing in a
//! [`ReplyPacket`].

use chrono::Utc;
use std::time::Instant;
use tracing::debug;

use super::context_packet::ReplyPacket;
use super::intent::IntentClassifier;
use super::responder::ResponseSelector;

/// Orchestrates intent classification and response selection
pub struct ResponseEngine {
    classifier: IntentClassifier,
    selector: ResponseSelector,
}

impl Default for ResponseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseEngine {
    /// Create an engine seeded from OS entropy
    pub fn new() -> Self {
        Self::with_selector(ResponseSelector::new())
    }

    /// Create an engine whose draws are reproducible for `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_selector(ResponseSelector::with_seed(seed))
    }

    pub fn with_selector(selector: ResponseSelector) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            selector,
        }
    }

    /// Produce the reply for a query
    pub fn reply(&mut self, query: &str) -> ReplyPacket {
        let start = Instant::now();

        let mut packet = ReplyPacket::new(query.to_string());

        // 1. Classify
        packet.classification = self.classifier.classify(query);

        // 2. Select and format
        packet.response = self.selector.respond(&packet.classification.intent);

        // 3. Timing
        packet.processing_time_us = start.elapsed().as_micros() as u64;
        packet.timestamp = Utc::now();

        debug!(
            intent = %packet.classification.intent,
            keyword = packet.classification.matched_keyword.as_deref().unwrap_or("-"),
            elapsed_us = packet.processing_time_us,
            "Reply generated"
        );

        packet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::{CannedReply, Facet, Intent, Topic};

    #[test]
    fn test_basic_reply() {
        let mut engine = ResponseEngine::with_seed(11);

        let packet = engine.reply("What is a meningioma?");

        assert_eq!(packet.query, "What is a meningioma?");
        assert_eq!(
            packet.intent(),
            Intent::Knowledge {
                topic: Topic::Meningioma,
                facet: Facet::Description
            }
        );
        assert!(packet
            .response
            .ends_with("Would you like to know about symptoms or treatment?"));
    }

    #[test]
    fn test_greeting_reply() {
        let mut engine = ResponseEngine::with_seed(11);

        let packet = engine.reply("hello");
        assert_eq!(
            packet.intent(),
            Intent::Canned {
                reply: CannedReply::Greeting
            }
        );
        assert_eq!(packet.response, CannedReply::Greeting.text());
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = ResponseEngine::with_seed(5);
        let mut b = ResponseEngine::with_seed(5);

        for query in ["glioma prognosis", "xyz", "pituitary risk", "benign"] {
            assert_eq!(a.reply(query).response, b.reply(query).response);
        }
    }
}
