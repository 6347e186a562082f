// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts.
//!
//! Pressing `k` anywhere outside a text field copies a random kaomoji.

/// Element that had focus when a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyTarget {
    /// Anything that does not take text input.
    #[default]
    Page,
    Input,
    TextArea,
}

impl KeyTarget {
    /// Parses an element tag name, case-insensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") {
            KeyTarget::Input
        } else if tag.eq_ignore_ascii_case("textarea") {
            KeyTarget::TextArea
        } else {
            KeyTarget::Page
        }
    }

    #[must_use]
    pub fn accepts_text(self) -> bool {
        matches!(self, KeyTarget::Input | KeyTarget::TextArea)
    }
}

/// A key press with its modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub target: KeyTarget,
}

impl KeyPress {
    /// A key press without modifiers on the page body.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: KeyTarget) -> Self {
        self.target = target;
        self
    }
}

/// Actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    RandomKaomoji,
}

impl Shortcut {
    /// Maps a key press to a shortcut. Shift is allowed, other modifiers and
    /// presses inside text fields are not.
    #[must_use]
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        if press.ctrl || press.alt || press.meta || press.target.accepts_text() {
            return None;
        }
        press
            .key
            .eq_ignore_ascii_case("k")
            .then_some(Shortcut::RandomKaomoji)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_triggers_random_kaomoji() {
        assert_eq!(
            Shortcut::from_key(&KeyPress::plain("k")),
            Some(Shortcut::RandomKaomoji)
        );
        assert_eq!(
            Shortcut::from_key(&KeyPress::plain("K")),
            Some(Shortcut::RandomKaomoji)
        );
    }

    #[test]
    fn modifiers_disable_shortcut() {
        for press in [
            KeyPress {
                ctrl: true,
                ..KeyPress::plain("k")
            },
            KeyPress {
                alt: true,
                ..KeyPress::plain("k")
            },
            KeyPress {
                meta: true,
                ..KeyPress::plain("k")
            },
        ] {
            assert_eq!(Shortcut::from_key(&press), None);
        }
    }

    #[test]
    fn typing_in_fields_is_ignored() {
        let input = KeyPress::plain("k").with_target(KeyTarget::from_tag("INPUT"));
        let area = KeyPress::plain("k").with_target(KeyTarget::from_tag("textarea"));
        assert_eq!(Shortcut::from_key(&input), None);
        assert_eq!(Shortcut::from_key(&area), None);
    }

    #[test]
    fn other_keys_do_nothing() {
        assert_eq!(Shortcut::from_key(&KeyPress::plain("j")), None);
        assert_eq!(Shortcut::from_key(&KeyPress::plain("Enter")), None);
    }

    #[test]
    fn unknown_tags_are_page_targets() {
        assert_eq!(KeyTarget::from_tag("BUTTON"), KeyTarget::Page);
    }
}
