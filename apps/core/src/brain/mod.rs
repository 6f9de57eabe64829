//! # Brain Module
//!
//! Rule-based reply engine for the Brain Tumor Assistant.
//! Classifies user input into a topic/facet space and answers from a static
//! knowledge table. No model, no network.
//!
//! ## Components
//! - `knowledge`: Static topic/facet sentence tables
//! - `intent`: Ordered keyword rules (greeting, topic, facet, canned, general)
//! - `responder`: Uniform draw + fixed templates, seedable
//! - `context_packet`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod context_packet;
pub mod intent;
pub mod knowledge;
pub mod responder;

pub use analyzer::ResponseEngine;
pub use context_packet::ReplyPacket;
pub use intent::{CannedReply, Classification, Intent, IntentClassifier};
pub use knowledge::{Facet, KnowledgeBase, KnowledgeEntry, Topic};
pub use responder::{ResponseSelector, Template};
