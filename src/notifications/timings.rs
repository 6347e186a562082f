// SPDX-License-Identifier: MPL-2.0
//! Toast timing domain type.
//!
//! Bundles the three durations that drive a toast's lifecycle and keeps each
//! within its valid range.

use crate::config::{
    DEFAULT_DISPLAY_MS, DEFAULT_REVEAL_DELAY_MS, DEFAULT_TRANSITION_MS, MAX_DISPLAY_MS,
    MAX_REVEAL_DELAY_MS, MAX_TRANSITION_MS, MIN_DISPLAY_MS, MIN_REVEAL_DELAY_MS,
    MIN_TRANSITION_MS,
};
use std::time::Duration;

/// Lifecycle durations of a toast.
///
/// # Example
///
/// ```
/// use kaomoji_page::notifications::Timings;
/// use std::time::Duration;
///
/// let timings = Timings::from_millis(100, 5_000, 300);
/// assert_eq!(timings.display(), Duration::from_secs(5));
///
/// // Values outside range are clamped
/// let too_long = Timings::from_millis(100, 600_000, 300);
/// assert_eq!(too_long.display(), Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    reveal_delay: Duration,
    display: Duration,
    transition: Duration,
}

impl Timings {
    /// Creates timings from milliseconds, clamping each to its valid range.
    #[must_use]
    pub fn from_millis(reveal_delay: u64, display: u64, transition: u64) -> Self {
        Self {
            reveal_delay: Duration::from_millis(
                reveal_delay.clamp(MIN_REVEAL_DELAY_MS, MAX_REVEAL_DELAY_MS),
            ),
            display: Duration::from_millis(display.clamp(MIN_DISPLAY_MS, MAX_DISPLAY_MS)),
            transition: Duration::from_millis(
                transition.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS),
            ),
        }
    }

    /// Delay between attach and the entrance transition.
    #[must_use]
    pub fn reveal_delay(self) -> Duration {
        self.reveal_delay
    }

    /// Time from `show` until the exit transition starts.
    #[must_use]
    pub fn display(self) -> Duration {
        self.display
    }

    /// Length of the entrance and exit transitions.
    #[must_use]
    pub fn transition(self) -> Duration {
        self.transition
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_millis(
            DEFAULT_REVEAL_DELAY_MS,
            DEFAULT_DISPLAY_MS,
            DEFAULT_TRANSITION_MS,
        )
    }
}
