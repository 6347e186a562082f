// SPDX-License-Identifier: MPL-2.0
//! Page interactions that feed the toast.
//!
//! Each module holds the state and rules of one piece of page behavior; the
//! [`crate::page::Page`] controller wires them to events and timers.

pub mod clipboard;
pub mod form;
pub mod header;
pub mod kaomoji;
pub mod nav;
pub mod reveal;
pub mod shortcut;
pub mod title;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use form::{ContactForm, SubmitState, ValidationError};
pub use header::{HeaderStyle, HeaderTracker};
pub use nav::NavMenu;
pub use reveal::{RevealTracker, Section};
pub use shortcut::{KeyPress, KeyTarget, Shortcut};
pub use title::Title;
