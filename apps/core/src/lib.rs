//! Brain Tumor Assistant core.
//!
//! A rule-based conversational engine: keyword classification over a fixed
//! topic/facet space, replies drawn from a static knowledge table, and a
//! session actor that turns a submit into a delayed bot turn.

pub mod actors;
pub mod brain;
pub mod config;
pub mod conversation;
pub mod error;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use actors::{SessionHandle, SessionOptions};
pub use brain::{Facet, Intent, ResponseEngine, Topic};
pub use config::{AssistantConfig, LogFormat};
pub use conversation::Conversation;
pub use error::AppError;
pub use models::{SessionSnapshot, Speaker, SubmitOutcome, Ticket, Turn};
