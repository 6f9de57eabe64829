//! Actor layer: one session actor per conversation window.
//!
//! - `messages`: mailbox protocol and actor errors
//! - `traits`: `Responder` and `Scheduler` seams
//! - `scheduler`: typing-delay strategies
//! - `session`: the session actor and its handle

pub mod messages;
pub mod scheduler;
pub mod session;
pub mod traits;

pub use messages::{ActorError, SessionMessage};
pub use scheduler::{ImmediateScheduler, ManualScheduler, TokioScheduler};
pub use session::{SessionHandle, SessionOptions};
pub use traits::{Job, Responder, ScheduledTask, Scheduler};
