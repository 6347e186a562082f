// SPDX-License-Identifier: MPL-2.0
//! Clipboard access for kaomoji copy actions.

use crate::error::{Error, Result};

/// Destination of copy actions.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard kept in memory, with an optional simulated denial.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write, like a browser without
    /// clipboard permission.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            contents: None,
            denied: true,
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.denied {
            return Err(Error::Clipboard("write permission denied".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copies `text`, logging failures instead of reporting them.
///
/// Returns whether the copy succeeded.
pub fn copy_text(clipboard: &mut dyn Clipboard, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            tracing::debug!(text, "copied to clipboard");
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to copy text");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_replaces_contents() {
        let mut clipboard = MemoryClipboard::new();
        assert!(copy_text(&mut clipboard, "(◕‿◕)"));
        assert!(copy_text(&mut clipboard, "(＾▽＾)"));
        assert_eq!(clipboard.contents(), Some("(＾▽＾)"));
    }

    #[test]
    fn denied_clipboard_reports_failure() {
        let mut clipboard = MemoryClipboard::denied();
        assert!(!copy_text(&mut clipboard, "(◕‿◕)"));
        assert!(clipboard.contents().is_none());
        assert!(matches!(
            clipboard.write_text("x"),
            Err(Error::Clipboard(_))
        ));
    }
}
