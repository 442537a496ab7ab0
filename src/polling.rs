// ABOUTME: Cancellable repeating invocation of a service operation.
// ABOUTME: One active loop per controller, publishing into a watch slot.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::services::ServiceError;

/// Latest result published by a polling loop.
pub type PollOutcome<T> = Result<T, Arc<ServiceError>>;

struct ActiveLoop {
    cancel: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Repeats a service operation on an interval until stopped.
///
/// At most one loop is active per controller; the active-loop handle is an
/// owned field mutated only through `start`/`stop`, which take `&mut self`
/// (single-writer). Results land in a shared watch slot, so consumers
/// always observe the latest completed call rather than call order.
pub struct PollingController<T> {
    slot: watch::Sender<Option<PollOutcome<T>>>,
    active: Option<ActiveLoop>,
}

impl<T: Clone + Send + Sync + 'static> PollingController<T> {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self { slot, active: None }
    }

    /// Observe published results. `None` until the first call completes.
    pub fn subscribe(&self) -> watch::Receiver<Option<PollOutcome<T>>> {
        self.slot.subscribe()
    }

    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.handle.is_finished())
    }

    /// Start a repeating loop: invoke, publish, sleep, repeat.
    ///
    /// An already-running loop is stopped first, so two loops never share
    /// the publish slot. Each iteration is cancellable both during the
    /// operation and during the sleep.
    pub fn start<F, Fut>(&mut self, interval: Duration, op: F)
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, ServiceError>> + Send,
    {
        self.stop();

        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let slot = self.slot.clone();
        let handle = tokio::spawn(async move {
            loop {
                let outcome = tokio::select! {
                    _ = cancel_rx.changed() => return,
                    outcome = op() => outcome,
                };
                // A stop that raced the call's completion wins: a stopped
                // loop never publishes again.
                if *cancel_rx.borrow() {
                    return;
                }
                slot.send_replace(Some(outcome.map_err(Arc::new)));
                tokio::select! {
                    _ = cancel_rx.changed() => return,
                    _ = tokio::time::sleep(interval) => {}
                }
            }
        });

        self.active = Some(ActiveLoop {
            cancel: cancel_tx,
            handle,
        });
    }

    /// Stop the active loop. Idempotent; interrupts an in-progress sleep
    /// or in-flight call promptly, and a stopped loop never publishes
    /// again.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            let _ = active.cancel.send(true);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for PollingController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PollingController<T> {
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            let _ = active.cancel.send(true);
        }
    }
}
