// SPDX-License-Identifier: MPL-2.0
//! Markup for a single toast.
//!
//! A toast is one `<div>` fixed to the top-right corner of the page. Its
//! class list is `notification notification-<kind>` and its inline style
//! carries the kind gradient and the position/opacity of the current phase,
//! so the page's stylesheet only has to declare the shadow.

use super::notification::{Kind, Notification, Phase};
use quick_xml::escape::escape;
use std::time::Duration;

/// Base class shared by every toast.
pub const BASE_CLASS: &str = "notification";

const BASE_STYLE: &str = "position: fixed; top: 100px; right: 20px; padding: 1rem 2rem; \
border-radius: 10px; color: white; font-weight: 600; z-index: 10000; \
max-width: 300px; word-wrap: break-word";

/// Returns the class list for a toast of this kind.
#[must_use]
pub fn class_name(kind: Kind) -> String {
    format!("{BASE_CLASS} {BASE_CLASS}-{kind}")
}

/// Returns the background gradient for a kind.
#[must_use]
pub fn background(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "linear-gradient(135deg, #4CAF50, #45a049)",
        Kind::Error => "linear-gradient(135deg, #f44336, #da190b)",
        Kind::Info => "linear-gradient(135deg, #667eea, #764ba2)",
    }
}

/// Returns `(transform, opacity)` for a phase.
#[must_use]
pub fn placement(phase: Phase) -> (&'static str, &'static str) {
    match phase {
        Phase::Visible => ("translateX(0)", "1"),
        Phase::PreVisible | Phase::Dismissing => ("translateX(100%)", "0"),
    }
}

/// Renders the inline style for a toast.
#[must_use]
pub fn style(kind: Kind, phase: Phase, transition: Duration) -> String {
    let (transform, opacity) = placement(phase);
    let secs = transition.as_secs_f64();
    format!(
        "{BASE_STYLE}; background: {}; transform: {transform}; opacity: {opacity}; \
         transition: transform {secs}s ease, opacity {secs}s ease",
        background(kind),
    )
}

/// Renders the toast as an HTML fragment. The message is escaped and always
/// appears as text content.
#[must_use]
pub fn to_html(notification: &Notification, phase: Phase, transition: Duration) -> String {
    fragment(notification.kind(), notification.message(), phase, transition)
}

/// Renders a toast from its parts.
#[must_use]
pub fn fragment(kind: Kind, text: &str, phase: Phase, transition: Duration) -> String {
    format!(
        "<div class=\"{}\" role=\"status\" style=\"{}\">{}</div>",
        class_name(kind),
        style(kind, phase, transition),
        escape(text),
    )
}
