use futures::future::BoxFuture;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::brain::{ReplyPacket, ResponseEngine};

/// Defines the interface for the component that answers an utterance.
///
/// The session actor only needs text in and a reply packet out, so tests
/// can swap the rule engine for a scripted one.
pub trait Responder: Send + 'static {
    /// Produces the reply for a single utterance. Must not fail.
    fn reply(&mut self, query: &str) -> ReplyPacket;
}

impl Responder for ResponseEngine {
    fn reply(&mut self, query: &str) -> ReplyPacket {
        ResponseEngine::reply(self, query)
    }
}

/// Work handed to a [`Scheduler`].
pub type Job = BoxFuture<'static, ()>;

/// Defines how the typing delay between submit and resolve is realised.
///
/// Production uses a real timer; tests run jobs immediately or on demand.
pub trait Scheduler: Send + Sync + 'static {
    /// Runs `job` after `delay` unless the returned task is cancelled first.
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask;
}

/// Handle to a scheduled job. Cancelling is idempotent.
#[derive(Debug, Clone, Default)]
pub struct ScheduledTask {
    token: CancellationToken,
}

impl ScheduledTask {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
