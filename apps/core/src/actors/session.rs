use futures::FutureExt;
use std::ops::ControlFlow;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{timeout, Duration};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::actors::messages::{ActorError, AppError, SessionMessage};
use crate::actors::scheduler::TokioScheduler;
use crate::actors::traits::{Responder, ScheduledTask, Scheduler};
use crate::brain::{ResponseEngine, ResponseSelector};
use crate::config::AssistantConfig;
use crate::conversation::Conversation;
use crate::models::{SessionSnapshot, SubmitOutcome, Ticket};

/// Tuning for a single session actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Delay between an accepted submit and the bot turn.
    pub typing_delay: Duration,
    pub mailbox_capacity: usize,
    /// Upper bound on how long a handle waits for the actor to answer.
    pub reply_timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&AssistantConfig::default())
    }
}

impl From<&AssistantConfig> for SessionOptions {
    fn from(config: &AssistantConfig) -> Self {
        Self {
            typing_delay: config.typing_delay(),
            mailbox_capacity: config.mailbox_capacity,
            reply_timeout: config.reply_timeout(),
        }
    }
}

/// A handle to a session actor.
///
/// The actor owns one [`Conversation`] at a time. Handles are cheap to clone;
/// the actor stops on [`SessionHandle::close`] or once every handle is dropped.
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
    snapshots: watch::Receiver<SessionSnapshot>,
    reply_timeout: Duration,
}

impl SessionHandle {
    /// Spawns a session backed by the rule engine and a real timer.
    pub fn new(config: &AssistantConfig) -> Self {
        let engine = ResponseEngine::with_selector(ResponseSelector::from_seed(config.rng_seed));
        Self::spawn(engine, TokioScheduler, SessionOptions::from(config))
    }

    /// Spawns a session with an explicit responder and scheduler.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<R, S>(responder: R, scheduler: S, options: SessionOptions) -> Self
    where
        R: Responder,
        S: Scheduler,
    {
        let (sender, receiver) = mpsc::channel(options.mailbox_capacity.max(1));
        let conversation = Conversation::new();
        let (publisher, snapshots) = watch::channel(conversation.snapshot());

        let runner = SessionRunner {
            receiver,
            mailbox: sender.downgrade(),
            conversation,
            responder,
            scheduler,
            typing_delay: options.typing_delay,
            pending: None,
            publisher,
        };
        tokio::spawn(runner.run());

        Self {
            sender,
            snapshots,
            reply_timeout: options.reply_timeout,
        }
    }

    /// Submits a user utterance.
    ///
    /// Rejections (empty text, reply still pending) are reported in the
    /// returned outcome, not as errors.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, AppError> {
        let text = text.to_string();
        self.request(|responder| SessionMessage::Submit { text, responder })
            .await
    }

    /// Discards the conversation and starts a new one. Returns the new session id.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<Uuid, AppError> {
        self.request(|responder| SessionMessage::Reset { responder })
            .await
    }

    /// Fetches the current transcript from the actor.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, AppError> {
        self.request(|responder| SessionMessage::Snapshot { responder })
            .await
    }

    /// Stops the actor, cancelling any pending reply.
    #[instrument(skip(self))]
    pub async fn close(&self) -> Result<(), AppError> {
        self.request(|responder| SessionMessage::Close { responder })
            .await
    }

    /// A receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// The most recently published snapshot, without a round trip to the actor.
    pub fn current(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> SessionMessage,
    ) -> Result<T, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(build(send))
            .await
            .map_err(|_| ActorError::Closed)?;
        let reply = timeout(self.reply_timeout, recv)
            .await
            .map_err(ActorError::from)?
            .map_err(ActorError::from)?;
        Ok(reply)
    }
}

// --- Actor Runner ---
struct SessionRunner<R, S> {
    receiver: mpsc::Receiver<SessionMessage>,
    /// Weak so that dropping every handle stops the actor.
    mailbox: mpsc::WeakSender<SessionMessage>,
    conversation: Conversation,
    responder: R,
    scheduler: S,
    typing_delay: Duration,
    pending: Option<ScheduledTask>,
    publisher: watch::Sender<SessionSnapshot>,
}

impl<R, S> SessionRunner<R, S>
where
    R: Responder,
    S: Scheduler,
{
    async fn run(mut self) {
        info!(session_id = %self.conversation.id(), "Session started");
        while let Some(msg) = self.receiver.recv().await {
            if self.handle_message(msg).is_break() {
                break;
            }
        }
        self.cancel_pending();
        info!(session_id = %self.conversation.id(), "Session stopped");
    }

    fn handle_message(&mut self, msg: SessionMessage) -> ControlFlow<()> {
        match msg {
            SessionMessage::Submit { text, responder } => {
                let outcome = self.conversation.submit(&text);
                if let SubmitOutcome::Accepted { ticket } = outcome {
                    self.schedule_resolve(ticket);
                    self.publish();
                }
                let _ = responder.send(outcome);
            }
            SessionMessage::Resolve { ticket } => {
                if self
                    .conversation
                    .resolve(ticket, &mut self.responder)
                    .is_some()
                {
                    self.pending = None;
                    self.publish();
                } else {
                    debug!(
                        session_id = %self.conversation.id(),
                        stale_session = %ticket.session_id,
                        seq = ticket.seq,
                        "Ignoring stale resolve"
                    );
                }
            }
            SessionMessage::Reset { responder } => {
                self.cancel_pending();
                let previous = self.conversation.id();
                self.conversation = Conversation::new();
                info!(%previous, session_id = %self.conversation.id(), "Session reset");
                self.publish();
                let _ = responder.send(self.conversation.id());
            }
            SessionMessage::Snapshot { responder } => {
                let _ = responder.send(self.conversation.snapshot());
            }
            SessionMessage::Close { responder } => {
                info!(session_id = %self.conversation.id(), "Session closing");
                self.cancel_pending();
                let _ = responder.send(());
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn schedule_resolve(&mut self, ticket: Ticket) {
        let mailbox = self.mailbox.clone();
        let job = async move {
            match mailbox.upgrade() {
                Some(sender) => {
                    if sender.send(SessionMessage::Resolve { ticket }).await.is_err() {
                        debug!(seq = ticket.seq, "Session gone before resolve");
                    }
                }
                None => debug!(seq = ticket.seq, "Session gone before resolve"),
            }
        }
        .boxed();

        if let Some(stale) = self.pending.replace(self.scheduler.schedule(self.typing_delay, job)) {
            warn!("Replacing a scheduled resolve that was still pending");
            stale.cancel();
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            debug!(session_id = %self.conversation.id(), "Cancelling pending resolve");
            task.cancel();
        }
    }

    fn publish(&self) {
        self.publisher.send_replace(self.conversation.snapshot());
    }
}
