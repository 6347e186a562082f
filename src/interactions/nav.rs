// SPDX-License-Identifier: MPL-2.0
//! Mobile navigation menu.

/// Open/closed state of the hamburger menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu and returns the scroll position that puts a section
    /// just below the fixed header.
    pub fn follow_link(&mut self, section_top: f64, header_height: f64) -> f64 {
        self.open = false;
        (section_top - header_height).max(0.0)
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Returns the class list shared by the hamburger and the menu.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        if self.open {
            " active"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut nav = NavMenu::new();
        assert!(nav.toggle());
        assert_eq!(nav.class_suffix(), " active");
        assert!(!nav.toggle());
        assert_eq!(nav.class_suffix(), "");
    }

    #[test]
    fn following_a_link_closes_menu() {
        let mut nav = NavMenu::new();
        nav.toggle();
        let target = nav.follow_link(800.0, 70.0);
        assert!(!nav.is_open());
        assert_eq!(target, 730.0);
    }

    #[test]
    fn scroll_target_never_negative() {
        let mut nav = NavMenu::new();
        assert_eq!(nav.follow_link(20.0, 70.0), 0.0);
    }
}
