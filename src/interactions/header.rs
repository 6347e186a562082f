// SPDX-License-Identifier: MPL-2.0
//! Header styling driven by the scroll position.
//!
//! The header background fades in over the first 100 px and the header slides
//! away while scrolling down past that point, coming back on any upward
//! scroll.

use crate::config::{HEADER_HIDE_THRESHOLD_PX, HEADER_MAX_OPACITY, HEADER_OPACITY_DISTANCE_PX};

/// Computed header style for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    /// Background alpha, `0.0..=0.95`.
    pub opacity: f64,
    /// Whether the header is translated out of view.
    pub hidden: bool,
}

impl HeaderStyle {
    #[must_use]
    pub fn for_scroll(offset: f64, last_offset: f64) -> Self {
        let offset = offset.max(0.0);
        Self {
            opacity: (offset / HEADER_OPACITY_DISTANCE_PX).min(HEADER_MAX_OPACITY),
            hidden: offset > last_offset && offset > HEADER_HIDE_THRESHOLD_PX,
        }
    }

    /// CSS `background` value.
    #[must_use]
    pub fn background(&self) -> String {
        format!("rgba(255, 255, 255, {})", self.opacity)
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self::for_scroll(0.0, 0.0)
    }
}

/// Remembers the previous scroll offset between scroll events.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderTracker {
    last_offset: f64,
    style: HeaderStyle,
}

impl HeaderTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64) -> HeaderStyle {
        self.style = HeaderStyle::for_scroll(offset, self.last_offset);
        self.last_offset = offset;
        self.style
    }

    #[must_use]
    pub fn style(&self) -> HeaderStyle {
        self.style
    }
}
