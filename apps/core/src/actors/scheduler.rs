//! Scheduler strategies for the typing delay.
//!
//! - `TokioScheduler`: real timer, cancellable through a `CancellationToken`
//! - `ImmediateScheduler`: zero delay, still cancellable until the job runs
//! - `ManualScheduler`: holds jobs until `fire_all` is called

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::traits::{Job, ScheduledTask, Scheduler};

/// Runs jobs on the Tokio runtime after the requested delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask {
        let token = CancellationToken::new();
        let child = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = child.cancelled() => {
                    debug!("Scheduled job cancelled before it ran");
                }
                _ = tokio::time::sleep(delay) => {
                    if !child.is_cancelled() {
                        job.await;
                    }
                }
            }
        });

        ScheduledTask::new(token)
    }
}

/// Ignores the requested delay. Used by tests that only care about outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule(&self, _delay: Duration, job: Job) -> ScheduledTask {
        TokioScheduler.schedule(Duration::ZERO, job)
    }
}

struct QueuedJob {
    task: ScheduledTask,
    delay: Duration,
    job: Job,
}

/// Queues jobs until the owner fires them. Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Arc<Mutex<Vec<QueuedJob>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs queued and not cancelled
    pub fn pending(&self) -> usize {
        self.lock().iter().filter(|q| !q.task.is_cancelled()).count()
    }

    /// Delay requested by the most recently queued job
    pub fn last_delay(&self) -> Option<Duration> {
        self.lock().last().map(|q| q.delay)
    }

    /// Runs every queued job that has not been cancelled. Returns how many ran.
    pub async fn fire_all(&self) -> usize {
        let queued: Vec<QueuedJob> = self.lock().drain(..).collect();

        let mut fired = 0;
        for QueuedJob { task, job, .. } in queued {
            if task.is_cancelled() {
                continue;
            }
            job.await;
            fired += 1;
        }
        fired
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<QueuedJob>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask {
        let task = ScheduledTask::new(CancellationToken::new());
        self.lock().push(QueuedJob {
            task: task.clone(),
            delay,
            job,
        });
        task
    }
}
