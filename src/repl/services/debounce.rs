//! Debounced dispatch of user input
//!
//! A [`Debouncer`] accepts a rapid stream of string values and invokes its
//! action at most once per quiet period. In latest-only mode (the mode the
//! search flow uses) each new value replaces the pending one and restarts the
//! quiet period, so the action sees exactly the last value of a typing burst,
//! one quiet period after the burst ends. Cancellation is value-blind: a
//! burst of identical values still fires once.
//!
//! All dispatcher state lives on a single worker task; the inbox channel
//! serializes concurrent producers, so cancel-then-reschedule is atomic and
//! at most one invocation is ever pending.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::Instant;

/// Errors from building a [`Debouncer`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DebounceError {
    /// The quiet period must be positive
    #[error("debounce delay must be greater than zero")]
    ZeroDelay,
}

/// Defers an action until input activity pauses
pub struct Debouncer {
    tx: mpsc::Sender<String>,
    worker: JoinHandle<()>,
}

impl Debouncer {
    /// Spawn a debouncer worker.
    ///
    /// With `latest_only` set, values submitted within one quiet window
    /// supersede each other and only the last is passed to `action`. Without
    /// it, every submission is scheduled independently and fires `delay`
    /// after its own arrival.
    ///
    /// A zero `delay` is rejected: it would fire on every keystroke and
    /// defeat the point of debouncing.
    pub fn spawn<F>(delay: Duration, latest_only: bool, action: F) -> Result<Self, DebounceError>
    where
        F: FnMut(String) + Send + 'static,
    {
        if delay.is_zero() {
            return Err(DebounceError::ZeroDelay);
        }

        let (tx, rx) = mpsc::channel(64);
        let worker = if latest_only {
            tokio::spawn(run_latest(rx, delay, action))
        } else {
            tokio::spawn(run_each(rx, delay, action))
        };

        Ok(Self { tx, worker })
    }

    /// Hand a new value to the dispatcher.
    ///
    /// Cancels the pending invocation (latest-only mode) and schedules a new
    /// one a full quiet period ahead, regardless of whether the value changed.
    pub async fn submit<S: Into<String>>(&self, value: S) {
        if self.tx.send(value.into()).await.is_err() {
            tracing::warn!("Value submitted to a stopped debouncer, dropping it");
        }
    }

    /// Stop the worker immediately. Pending invocations never fire.
    pub fn shutdown(&self) {
        self.worker.abort();
    }
}

// Dropping the Debouncer closes the inbox; the worker then exits without
// firing whatever was still pending, which is the teardown contract.

/// Latest-value-wins loop: one deadline, one pending value.
async fn run_latest<F>(mut rx: mpsc::Receiver<String>, delay: Duration, mut action: F)
where
    F: FnMut(String) + Send + 'static,
{
    let mut deadline: Option<Instant> = None;
    let mut pending: Option<String> = None;

    loop {
        let received = match deadline {
            Some(at) => match tokio::time::timeout_at(at, rx.recv()).await {
                Ok(received) => received,
                Err(_) => {
                    // Quiet period elapsed uninterrupted: fire with the
                    // latest value seen.
                    deadline = None;
                    if let Some(value) = pending.take() {
                        tracing::debug!("Debounce settled on '{}'", value);
                        action(value);
                    }
                    continue;
                }
            },
            None => rx.recv().await,
        };

        let Some(value) = received else {
            break;
        };

        // New input supersedes the pending invocation before anything is
        // rescheduled, value-blind.
        pending = Some(value);
        deadline = Some(Instant::now() + delay);
    }
}

/// Independent-schedule loop: every submission fires after its own delay.
async fn run_each<F>(mut rx: mpsc::Receiver<String>, delay: Duration, mut action: F)
where
    F: FnMut(String) + Send + 'static,
{
    let mut scheduled: JoinSet<String> = JoinSet::new();

    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Some(value) => {
                    scheduled.spawn(async move {
                        tokio::time::sleep(delay).await;
                        value
                    });
                }
                None => break,
            },
            Some(fired) = scheduled.join_next(), if !scheduled.is_empty() => {
                match fired {
                    Ok(value) => action(value),
                    Err(err) => tracing::warn!("Scheduled firing failed: {}", err),
                }
            }
        }
    }
}
