// SPDX-License-Identifier: MPL-2.0
//! `kaomoji_page` drives the interactive parts of a kaomoji showcase page.
//!
//! Its core is a single-slot toast manager with cancellable lifecycle timers;
//! around it sit the page interactions that raise toasts (copying kaomoji, the
//! contact form, keyboard shortcuts) and the cosmetic scroll and title
//! behaviors, all wired together by the [`page::Page`] controller.

#![doc(html_root_url = "https://docs.rs/kaomoji_page/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod interactions;
pub mod notifications;
pub mod page;
