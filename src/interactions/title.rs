// SPDX-License-Identifier: MPL-2.0
//! Page title easter egg: a kaomoji briefly prepended to the title.

/// The document title and its original value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    original: String,
    current: String,
}

impl Title {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            current: original.clone(),
            original,
        }
    }

    /// Prepends `kaomoji` to the original title.
    pub fn flash(&mut self, kaomoji: &str) {
        self.current = format!("{kaomoji} {}", self.original);
    }

    pub fn restore(&mut self) {
        self.current.clone_from(&self.original);
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.current != self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_and_restore() {
        let mut title = Title::new("顔文字の世界");
        title.flash("(◕‿◕)");
        assert_eq!(title.current(), "(◕‿◕) 顔文字の世界");
        assert!(title.is_flashing());

        title.restore();
        assert_eq!(title.current(), "顔文字の世界");
        assert!(!title.is_flashing());
    }

    #[test]
    fn flashes_do_not_stack() {
        let mut title = Title::new("Kaomoji");
        title.flash("(＾▽＾)");
        title.flash("(≧◡≦)");
        assert_eq!(title.current(), "(≧◡≦) Kaomoji");
    }
}
