// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the single toast slot of a [`Surface`]. A toast moves
//! through `PreVisible -> Visible -> Dismissing` and is then detached; each
//! step is a deferred [`Message`] scheduled on a [`Scheduler`] and delivered
//! back through [`Manager::handle_message`].
//!
//! A new `show` always wins: the current toast is detached at once, without
//! an exit transition, and its pending timers are cancelled. Messages that
//! still reach the manager for a superseded toast are ignored by id.

use super::notification::{Kind, Notification, NotificationId, Phase};
use super::surface::Surface;
use super::timer::{Inbox, Scheduler, Timer};
use super::timings::Timings;

/// Deferred lifecycle steps, addressed to one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Start the entrance transition.
    Reveal(NotificationId),
    /// Start the exit transition.
    BeginDismiss(NotificationId),
    /// Detach once the exit transition has finished.
    Remove(NotificationId),
}

impl Message {
    #[must_use]
    pub fn id(self) -> NotificationId {
        match self {
            Message::Reveal(id) | Message::BeginDismiss(id) | Message::Remove(id) => id,
        }
    }
}

/// The attached toast and the timers that will advance it.
#[derive(Debug)]
struct Active {
    notification: Notification,
    phase: Phase,
    reveal: Option<Timer>,
    dismiss: Option<Timer>,
    remove: Option<Timer>,
}

impl Active {
    fn cancel_timers(&mut self) {
        for timer in [self.reveal.take(), self.dismiss.take(), self.remove.take()]
            .into_iter()
            .flatten()
        {
            timer.cancel();
        }
    }
}

/// Manages the one toast shown on a surface.
#[derive(Debug)]
pub struct Manager<S> {
    surface: S,
    timings: Timings,
    scheduler: Scheduler<Message>,
    active: Option<Active>,
}

impl<S: Surface> Manager<S> {
    /// Creates a manager that schedules its lifecycle steps on `scheduler`.
    pub fn new(surface: S, timings: Timings, scheduler: Scheduler<Message>) -> Self {
        Self {
            surface,
            timings,
            scheduler,
            active: None,
        }
    }

    /// Creates a manager together with the inbox its timers deliver to.
    pub fn with_inbox(surface: S, timings: Timings) -> (Self, Inbox<Message>) {
        let (scheduler, inbox) = Scheduler::channel();
        (Self::new(surface, timings, scheduler), inbox)
    }

    /// Shows `message`, replacing any toast currently attached.
    ///
    /// The message is treated as plain text. Must be called from within a
    /// tokio runtime.
    pub fn show(&mut self, message: impl Into<String>, kind: Kind) -> NotificationId {
        if let Some(mut previous) = self.active.take() {
            previous.cancel_timers();
            let id = previous.notification.id();
            self.surface.detach(id);
            tracing::debug!(?id, "notification superseded");
        }

        let notification = Notification::new(kind, message);
        let id = notification.id();
        self.surface.attach(&notification, Phase::PreVisible);
        tracing::debug!(?id, %kind, "notification attached");

        let reveal = self
            .scheduler
            .after(self.timings.reveal_delay(), Message::Reveal(id));
        let dismiss = self
            .scheduler
            .after(self.timings.display(), Message::BeginDismiss(id));

        self.active = Some(Active {
            notification,
            phase: Phase::PreVisible,
            reveal: Some(reveal),
            dismiss: Some(dismiss),
            remove: None,
        });
        id
    }

    /// Starts the exit transition of the current toast now.
    ///
    /// Returns `false` if nothing is shown or the toast is already leaving.
    pub fn dismiss(&mut self) -> bool {
        match self.active.as_ref().map(|active| active.notification.id()) {
            Some(id) => self.begin_dismiss(id),
            None => false,
        }
    }

    /// Applies a delivered lifecycle step.
    pub fn handle_message(&mut self, message: Message) {
        let id = message.id();
        let is_current = self
            .active
            .as_ref()
            .is_some_and(|active| active.notification.id() == id);
        if !is_current {
            tracing::trace!(?message, "ignoring message for detached notification");
            return;
        }

        match message {
            Message::Reveal(_) => self.reveal(id),
            Message::BeginDismiss(_) => {
                self.begin_dismiss(id);
            }
            Message::Remove(_) => self.remove(id),
        }
    }

    /// Handles every message already waiting in `inbox`.
    ///
    /// Returns the number of messages handled.
    pub fn pump(&mut self, inbox: &mut Inbox<Message>) -> usize {
        let mut handled = 0;
        while let Some(message) = inbox.try_recv() {
            self.handle_message(message);
            handled += 1;
        }
        handled
    }

    /// Returns the toast currently attached.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.active.as_ref().map(|active| &active.notification)
    }

    /// Returns the phase of the attached toast, `None` when absent.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.active.as_ref().map(|active| active.phase)
    }

    /// Returns whether any lifecycle timer is still waiting.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.active.as_ref().is_some_and(|active| {
            [&active.reveal, &active.dismiss, &active.remove]
                .into_iter()
                .flatten()
                .any(Timer::is_pending)
        })
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn reveal(&mut self, id: NotificationId) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.reveal = None;
        if active.phase != Phase::PreVisible {
            return;
        }
        active.phase = Phase::Visible;
        self.surface.set_phase(id, Phase::Visible);
        tracing::debug!(?id, "notification visible");
    }

    fn begin_dismiss(&mut self, id: NotificationId) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.phase == Phase::Dismissing {
            return false;
        }
        active.reveal = None;
        active.dismiss = None;
        active.phase = Phase::Dismissing;
        self.surface.set_phase(id, Phase::Dismissing);
        active.remove = Some(
            self.scheduler
                .after(self.timings.transition(), Message::Remove(id)),
        );
        tracing::debug!(?id, "notification dismissing");
        true
    }

    fn remove(&mut self, id: NotificationId) {
        self.active = None;
        if self.surface.detach(id) {
            tracing::debug!(?id, "notification removed");
        } else {
            tracing::trace!(?id, "notification already detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::MemorySurface;
    use std::time::Duration;
    use tokio::time;

    fn manager() -> (Manager<MemorySurface>, Inbox<Message>) {
        let timings = Timings::default();
        Manager::with_inbox(MemorySurface::new(timings.transition()), timings)
    }

    async fn advance(manager: &mut Manager<MemorySurface>, inbox: &mut Inbox<Message>, ms: u64) {
        time::advance(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        manager.pump(inbox);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn new_manager_is_empty() {
        let (manager, _inbox) = manager();
        assert!(manager.current().is_none());
        assert!(manager.phase().is_none());
        assert!(manager.surface().nodes().is_empty());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn show_attaches_in_pre_visible() {
        let (mut manager, _inbox) = manager();
        let id = manager.show("hello", Kind::Success);

        assert_eq!(manager.phase(), Some(Phase::PreVisible));
        assert_eq!(manager.current().map(Notification::id), Some(id));
        assert_eq!(manager.surface().nodes().len(), 1);
        assert!(manager.has_pending_timers());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn full_lifecycle_follows_timings() {
        let (mut manager, mut inbox) = manager();
        manager.show("hello", Kind::Info);

        advance(&mut manager, &mut inbox, 100).await;
        assert_eq!(manager.phase(), Some(Phase::Visible));

        advance(&mut manager, &mut inbox, 4_899).await;
        assert_eq!(manager.phase(), Some(Phase::Visible));

        advance(&mut manager, &mut inbox, 1).await;
        assert_eq!(manager.phase(), Some(Phase::Dismissing));

        advance(&mut manager, &mut inbox, 299).await;
        assert_eq!(manager.surface().nodes().len(), 1);

        advance(&mut manager, &mut inbox, 1).await;
        assert!(manager.phase().is_none());
        assert!(manager.surface().nodes().is_empty());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn show_supersedes_previous_without_transition() {
        let (mut manager, mut inbox) = manager();
        let first = manager.show("first", Kind::Info);
        advance(&mut manager, &mut inbox, 200).await;

        let second = manager.show("second", Kind::Error);

        assert!(manager.surface().node(first).is_none());
        let nodes = manager.surface().nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, second);
        assert_eq!(nodes[0].phase, Phase::PreVisible);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn stale_messages_are_ignored() {
        let (mut manager, _inbox) = manager();
        let first = manager.show("first", Kind::Info);
        let second = manager.show("second", Kind::Info);

        manager.handle_message(Message::Reveal(first));
        manager.handle_message(Message::BeginDismiss(first));
        manager.handle_message(Message::Remove(first));

        assert_eq!(manager.current().map(Notification::id), Some(second));
        assert_eq!(manager.phase(), Some(Phase::PreVisible));
        assert_eq!(manager.surface().nodes().len(), 1);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn manual_dismiss_plays_exit_transition() {
        let (mut manager, mut inbox) = manager();
        manager.show("bye", Kind::Info);
        advance(&mut manager, &mut inbox, 100).await;

        assert!(manager.dismiss());
        assert!(!manager.dismiss());
        assert_eq!(manager.phase(), Some(Phase::Dismissing));

        advance(&mut manager, &mut inbox, 300).await;
        assert!(manager.current().is_none());
        assert!(manager.surface().nodes().is_empty());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn dismiss_without_notification_returns_false() {
        let (mut manager, _inbox) = manager();
        assert!(!manager.dismiss());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn dismiss_before_reveal_skips_visible() {
        let (mut manager, mut inbox) = manager();
        manager.show("quick", Kind::Info);
        assert!(manager.dismiss());

        advance(&mut manager, &mut inbox, 100).await;
        assert_eq!(manager.phase(), Some(Phase::Dismissing));

        advance(&mut manager, &mut inbox, 200).await;
        assert!(manager.current().is_none());
    }
}
