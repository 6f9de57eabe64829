//! Reply Packet - output structure for one engine turn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::intent::{Classification, Intent};

/// Everything the engine produced for a single utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyPacket {
    /// Original user query
    pub query: String,

    /// Resolved intent and the keyword that selected it
    pub classification: Classification,

    /// Final reply text
    pub response: String,

    /// Processing time in microseconds
    pub processing_time_us: u64,

    /// Timestamp of the reply
    pub timestamp: DateTime<Utc>,
}

impl ReplyPacket {
    /// Create a packet for `query` with no reply yet
    pub fn new(query: String) -> Self {
        Self {
            query,
            classification: Classification {
                intent: Intent::General,
                matched_keyword: None,
            },
            response: String::new(),
            processing_time_us: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn intent(&self) -> Intent {
        self.classification.intent
    }
}
