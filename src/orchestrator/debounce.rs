//! Cancelable scheduled task slot.
//!
//! Each debounce channel owns exactly one [`DebounceSlot`]. Scheduling always
//! cancels whatever is still pending, so at most one timer per channel is
//! ever counting down.
//!
//! Only the wait is cancelable. Once the delay elapses the fire future is
//! spawned as its own task, so a later reschedule cannot abort a request that
//! is already in flight.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A single pending-timer slot with a fixed delay.
#[derive(Debug)]
pub struct DebounceSlot {
    label: &'static str,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl DebounceSlot {
    pub fn new(label: &'static str, delay: Duration) -> Self {
        Self {
            label,
            delay,
            pending: None,
        }
    }

    /// Cancel any pending timer and schedule `fire` to run after the delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, fire: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.cancel() {
            tracing::trace!(channel = self.label, "pending timer superseded");
        }

        // Deadline taken now, not when the timer task is first polled
        let deadline = tokio::time::Instant::now() + self.delay;
        let label = self.label;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            tracing::trace!(channel = label, "timer fired");
            // No await between here and the spawn: an abort either lands
            // before the fire starts or not at all.
            tokio::spawn(fire);
        }));
    }

    /// Cancel the pending timer. Returns whether one was still counting down.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    /// Whether a timer is scheduled and has not fired yet.
    pub fn is_scheduled(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebounceSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
