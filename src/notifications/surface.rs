// SPDX-License-Identifier: MPL-2.0
//! Presentation surface the manager attaches toasts to.
//!
//! The manager is the only writer of the surface's toast slot. Implementations
//! decide how a toast is shown; [`MemorySurface`] keeps rendered nodes in
//! memory and is what the demo binary and tests use.

use super::notification::{Kind, Notification, NotificationId, Phase};
use super::render;
use std::time::Duration;

/// Where toasts are attached.
pub trait Surface {
    /// Attaches a new toast in `phase`.
    fn attach(&mut self, notification: &Notification, phase: Phase);

    /// Moves an attached toast to `phase`. Unknown ids are ignored.
    fn set_phase(&mut self, id: NotificationId, phase: Phase);

    /// Detaches a toast. Returns `false` when it was not attached, which is
    /// never an error.
    fn detach(&mut self, id: NotificationId) -> bool;
}

/// A toast node as attached to a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NotificationId,
    pub kind: Kind,
    /// Text content, exactly as passed to `show`.
    pub text: String,
    pub phase: Phase,
    /// Rendered markup for the current phase.
    pub html: String,
}

impl Node {
    #[must_use]
    pub fn class_name(&self) -> String {
        render::class_name(self.kind)
    }
}

/// In-memory surface holding rendered toast nodes.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<Node>,
    transition: Duration,
    /// Number of `detach` calls that found nothing to remove.
    missed_detaches: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new(transition: Duration) -> Self {
        Self {
            transition,
            ..Self::default()
        }
    }

    /// Returns all attached nodes in attach order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the node for `id`, if attached.
    #[must_use]
    pub fn node(&self, id: NotificationId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn missed_detaches(&self) -> usize {
        self.missed_detaches
    }
}

impl Surface for MemorySurface {
    fn attach(&mut self, notification: &Notification, phase: Phase) {
        self.nodes.push(Node {
            id: notification.id(),
            kind: notification.kind(),
            text: notification.message().to_string(),
            phase,
            html: render::to_html(notification, phase, self.transition),
        });
    }

    fn set_phase(&mut self, id: NotificationId, phase: Phase) {
        let transition = self.transition;
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.phase = phase;
            node.html = render::fragment(node.kind, &node.text, phase, transition);
        }
    }

    fn detach(&mut self, id: NotificationId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        let removed = self.nodes.len() < before;
        if !removed {
            self.missed_detaches += 1;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_renders_node() {
        let mut surface = MemorySurface::new(Duration::from_millis(300));
        let n = Notification::error("oops");
        surface.attach(&n, Phase::PreVisible);

        let node = surface.node(n.id()).expect("node attached");
        assert_eq!(node.class_name(), "notification notification-error");
        assert_eq!(node.text, "oops");
        assert!(node.html.contains("translateX(100%)"));
    }

    #[test]
    fn set_phase_rerenders_node() {
        let mut surface = MemorySurface::new(Duration::from_millis(300));
        let n = Notification::info("hello");
        surface.attach(&n, Phase::PreVisible);
        surface.set_phase(n.id(), Phase::Visible);

        let node = surface.node(n.id()).expect("node attached");
        assert_eq!(node.phase, Phase::Visible);
        assert!(node.html.contains("translateX(0)"));
    }

    #[test]
    fn detach_of_missing_node_is_harmless() {
        let mut surface = MemorySurface::new(Duration::from_millis(300));
        let kept = Notification::info("kept");
        let gone = Notification::info("gone");
        surface.attach(&kept, Phase::Visible);

        assert!(!surface.detach(gone.id()));
        assert_eq!(surface.missed_detaches(), 1);
        assert_eq!(surface.nodes().len(), 1);

        assert!(surface.detach(kept.id()));
        assert!(surface.nodes().is_empty());
    }
}
