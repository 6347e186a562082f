// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a single-slot toast following snackbar UX patterns:
//! one message at a time, the latest one wins, and each toast slides in,
//! stays for a fixed time, then slides out and is detached.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, `Kind` and `Phase`
//! - [`manager`] - `Manager` owning the toast slot and its lifecycle timers
//! - [`timer`] - Cancellable deferred messages built on tokio tasks
//! - [`surface`] - `Surface` trait and the in-memory `MemorySurface`
//! - [`render`] - Escaped HTML markup for a toast
//!
//! # Usage
//!
//! ```no_run
//! use kaomoji_page::notifications::{Kind, Manager, MemorySurface, Timings};
//!
//! # async fn demo() {
//! let timings = Timings::default();
//! let (mut manager, mut inbox) =
//!     Manager::with_inbox(MemorySurface::new(timings.transition()), timings);
//!
//! manager.show("(◕‿◕) copied!", Kind::Success);
//!
//! while let Some(message) = inbox.recv().await {
//!     manager.handle_message(message);
//!     if manager.current().is_none() {
//!         break;
//!     }
//! }
//! # }
//! ```

pub mod manager;
pub mod notification;
pub mod render;
pub mod surface;
pub mod timer;
mod timings;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, Phase};
pub use surface::{MemorySurface, Node, Surface};
pub use timer::{Debouncer, Inbox, Scheduler, Timer};
pub use timings::Timings;
