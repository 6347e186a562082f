// SPDX-License-Identifier: MPL-2.0
//! Events and messages consumed by the page controller.

use crate::interactions::{ContactForm, KeyPress};
use crate::notifications::NotificationMessage;

/// User and browser events, each handled synchronously by `Page::handle`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page finished loading.
    Load { viewport_height: f64 },
    /// The hamburger button was clicked.
    ToggleMenu,
    /// A navigation link was clicked.
    FollowLink { section_top: f64, header_height: f64 },
    /// The window scrolled.
    Scroll { offset: f64, viewport_height: f64 },
    /// A kaomoji on the page was clicked.
    CopyKaomoji(String),
    /// A key was pressed.
    KeyDown(KeyPress),
    /// The contact form was submitted.
    SubmitForm(ContactForm),
}

/// Deferred work delivered back to `Page::handle_message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A toast lifecycle step for the notification manager.
    Notification(NotificationMessage),
    /// The simulated form submission completed.
    FormSent,
    /// Time to put a kaomoji in the title.
    TitleFlash,
    /// Time to put the original title back.
    TitleRestore,
    /// Scrolling paused long enough to check reveals.
    ScrollSettled,
}

/// Side effects the host has to carry out after an event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Smoothly scroll the window to this offset.
    ScrollTo(f64),
}
