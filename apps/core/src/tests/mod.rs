//! Test Module
//!
//! Cross-module test suite for the assistant core.
//!
//! ## Test Categories
//! - `brain_tests`: Classification and reply properties over the full engine
//! - `session_tests`: Conversation state machine (submit, resolve, rejection)
//! - `actor_tests`: Session actor with a manual scheduler and scripted responder
//! - `integration_tests`: Real timer under paused Tokio time
//! - `chaos_test`: Concurrent submits and resets

pub mod integration_tests;
pub mod session_tests;
