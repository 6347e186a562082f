// SPDX-License-Identifier: MPL-2.0
//! Cancellable deferred messages.
//!
//! A [`Scheduler`] posts a message to its [`Inbox`] once a delay has
//! elapsed. Each scheduled message is backed by a tokio task and returned as a
//! [`Timer`] handle; cancelling or dropping the handle aborts the task so the
//! message is never delivered.
//!
//! Deadlines are computed when [`Scheduler::after`] is called, not when the
//! task is first polled, so ordering follows call order under a paused clock.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

type Sink<M> = Arc<dyn Fn(M) + Send + Sync>;

/// Schedules messages of type `M` for later delivery.
pub struct Scheduler<M> {
    sink: Sink<M>,
}

impl<M> Clone for Scheduler<M> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<M> std::fmt::Debug for Scheduler<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler").finish_non_exhaustive()
    }
}

impl<M: Send + 'static> Scheduler<M> {
    /// Creates a scheduler and the inbox its messages are delivered to.
    pub fn channel() -> (Self, Inbox<M>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink: Sink<M> = Arc::new(move |message| {
            // The inbox may already be gone during shutdown.
            let _ = tx.send(message);
        });
        (Self { sink }, Inbox { rx })
    }

    /// Delivers `message` once `delay` has elapsed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn after(&self, delay: Duration, message: M) -> Timer {
        let deadline = Instant::now() + delay;
        let sink = Arc::clone(&self.sink);
        let handle = tokio::spawn(async move {
            time::sleep_until(deadline).await;
            sink(message);
        });
        Timer { handle, deadline }
    }

    /// Returns a scheduler for an inner message type whose messages are
    /// wrapped with `f` before reaching this scheduler's inbox.
    pub fn map<N, F>(&self, f: F) -> Scheduler<N>
    where
        N: Send + 'static,
        F: Fn(N) -> M + Send + Sync + 'static,
    {
        let sink = Arc::clone(&self.sink);
        Scheduler {
            sink: Arc::new(move |message| sink(f(message))),
        }
    }
}

/// Receiving end of a [`Scheduler`].
#[derive(Debug)]
pub struct Inbox<M> {
    rx: mpsc::UnboundedReceiver<M>,
}

impl<M> Inbox<M> {
    /// Waits for the next delivered message.
    ///
    /// Returns `None` once every scheduler feeding this inbox is dropped.
    pub async fn recv(&mut self) -> Option<M> {
        self.rx.recv().await
    }

    /// Returns a message that is already delivered, without waiting.
    pub fn try_recv(&mut self) -> Option<M> {
        self.rx.try_recv().ok()
    }
}

/// Handle to a scheduled message. Dropping it cancels delivery.
#[derive(Debug)]
pub struct Timer {
    handle: JoinHandle<()>,
    deadline: Instant,
}

impl Timer {
    /// Cancels delivery if the message has not been sent yet.
    pub fn cancel(self) {
        // Drop aborts.
    }

    /// Returns whether the message is still waiting to be delivered.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Returns when the message is due.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Keeps at most one pending message: each trigger replaces the previous one.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<Timer>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `message` after `wait`, cancelling any earlier trigger.
    pub fn trigger<M: Send + 'static>(
        &mut self,
        scheduler: &Scheduler<M>,
        wait: Duration,
        message: M,
    ) {
        self.pending = Some(scheduler.after(wait, message));
    }

    /// Cancels the pending trigger, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns whether a trigger is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(Timer::is_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn message_is_delivered_after_delay() {
        let (scheduler, mut inbox) = Scheduler::channel();
        let start = Instant::now();
        let timer = scheduler.after(Duration::from_millis(50), 7u32);
        assert_eq!(timer.deadline(), start + Duration::from_millis(50));

        time::advance(Duration::from_millis(49)).await;
        settle().await;
        assert_eq!(inbox.try_recv(), None);

        time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(inbox.try_recv(), Some(7));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn cancelled_timer_never_delivers() {
        let (scheduler, mut inbox) = Scheduler::channel();
        let timer = scheduler.after(Duration::from_millis(10), "late");
        assert!(timer.is_pending());
        timer.cancel();

        time::advance(Duration::from_millis(100)).await;
        settle().await;
        assert_eq!(inbox.try_recv(), None);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn messages_arrive_in_deadline_order() {
        let (scheduler, mut inbox) = Scheduler::channel();
        let _a = scheduler.after(Duration::from_millis(30), "a");
        let _b = scheduler.after(Duration::from_millis(10), "b");

        time::advance(Duration::from_millis(10)).await;
        settle().await;
        time::advance(Duration::from_millis(20)).await;
        settle().await;

        assert_eq!(inbox.try_recv(), Some("b"));
        assert_eq!(inbox.try_recv(), Some("a"));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn mapped_scheduler_wraps_messages() {
        let (scheduler, mut inbox) = Scheduler::<(u8, u8)>::channel();
        let inner = scheduler.map(|n: u8| (1, n));
        let _timer = inner.after(Duration::ZERO, 9);

        settle().await;
        assert_eq!(inbox.try_recv(), Some((1, 9)));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn debouncer_only_fires_latest_trigger() {
        let (scheduler, mut inbox) = Scheduler::channel();
        let mut debouncer = Debouncer::new();

        debouncer.trigger(&scheduler, Duration::from_millis(16), 1);
        time::advance(Duration::from_millis(10)).await;
        debouncer.trigger(&scheduler, Duration::from_millis(16), 2);
        assert!(debouncer.is_pending());

        time::advance(Duration::from_millis(16)).await;
        settle().await;

        assert_eq!(inbox.try_recv(), Some(2));
        assert_eq!(inbox.try_recv(), None);
        assert!(!debouncer.is_pending());
    }
}
