// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notification**: Toast reveal, display and transition timings
//! - **Contact form**: Simulated submission delay
//! - **Title**: Page title easter egg cadence
//! - **Scroll**: Header styling thresholds and scroll debounce

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay between attaching a toast and starting its entrance transition (ms).
///
/// Long enough for the attach to be rendered before the transition starts.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 100;

/// Minimum reveal delay (ms).
pub const MIN_REVEAL_DELAY_MS: u64 = 0;

/// Maximum reveal delay (ms).
pub const MAX_REVEAL_DELAY_MS: u64 = 1_000;

/// How long a toast stays on screen before it starts dismissing (ms).
pub const DEFAULT_DISPLAY_MS: u64 = 5_000;

/// Minimum display duration (ms).
pub const MIN_DISPLAY_MS: u64 = 500;

/// Maximum display duration (ms).
pub const MAX_DISPLAY_MS: u64 = 60_000;

/// Duration of the entrance/exit transition (ms).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Minimum transition duration (ms).
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition duration (ms).
pub const MAX_TRANSITION_MS: u64 = 2_000;

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Simulated network latency of the contact form (ms).
pub const FORM_SEND_DELAY_MS: u64 = 2_000;

// ==========================================================================
// Title Defaults
// ==========================================================================

/// Interval between two kaomoji title flashes (ms).
pub const TITLE_INTERVAL_MS: u64 = 10_000;

/// How long the kaomoji stays in the title (ms).
pub const TITLE_HOLD_MS: u64 = 2_000;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll distance (px) at which the header reaches full opacity.
pub const HEADER_OPACITY_DISTANCE_PX: f64 = 100.0;

/// Maximum header background opacity.
pub const HEADER_MAX_OPACITY: f64 = 0.95;

/// Below this offset (px) the header is never hidden.
pub const HEADER_HIDE_THRESHOLD_PX: f64 = 100.0;

/// Quiet period after the last scroll event before reveal checks run (ms).
pub const SCROLL_DEBOUNCE_MS: u64 = 16;

/// Fraction of a section that must be on screen for it to animate in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom margin (px) shrinking the viewport for reveal checks.
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;
