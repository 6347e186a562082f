// SPDX-License-Identifier: MPL-2.0
//! Animate-in of page sections as they scroll into view.
//!
//! A section animates in once at least [`REVEAL_THRESHOLD`] of its height is
//! inside the viewport, whose bottom edge is pulled up by
//! [`REVEAL_BOTTOM_MARGIN_PX`]. Sections never animate out again.

use crate::config::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};

/// Class added to a section once it has been revealed.
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// A page element observed for reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Document offset of the top edge, in px.
    pub top: f64,
    pub height: f64,
    revealed: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
            revealed: false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Fraction of the section inside `[view_top, view_bottom)`.
    #[must_use]
    pub fn visible_ratio(&self, view_top: f64, view_bottom: f64) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let overlap = (self.top + self.height).min(view_bottom) - self.top.max(view_top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

/// Tracks which sections have been revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    sections: Vec<Section>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Reveals sections visible at `scroll_top` in a viewport of
    /// `viewport_height`. Returns the ids newly revealed.
    pub fn check(&mut self, scroll_top: f64, viewport_height: f64) -> Vec<String> {
        let view_bottom = scroll_top + viewport_height - REVEAL_BOTTOM_MARGIN_PX;
        let mut revealed = Vec::new();
        for section in self.sections.iter_mut().filter(|s| !s.revealed) {
            let ratio = section.visible_ratio(scroll_top, view_bottom);
            if ratio > 0.0 && ratio >= REVEAL_THRESHOLD {
                section.revealed = true;
                revealed.push(section.id.clone());
            }
        }
        revealed
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
