// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, read from a
//! `settings.toml` file in the platform configuration directory.
//!
//! The file is optional and never written back: a missing file yields the
//! defaults from [`defaults`], an unreadable one is an error, and a file with
//! invalid TOML falls back to defaults.
//!
//! # Examples
//!
//! ```no_run
//! use kaomoji_page::config;
//!
//! let config = config::load().unwrap_or_default();
//! let timings = config.timings();
//! println!("toasts stay for {:?}", timings.display());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::notifications::Timings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "KaomojiPage";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub notification: NotificationConfig,
}

/// Optional overrides for toast timings, in milliseconds.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub reveal_delay_ms: Option<u64>,
    #[serde(default)]
    pub display_ms: Option<u64>,
    #[serde(default)]
    pub transition_ms: Option<u64>,
}

impl Config {
    /// Resolves the toast timings, clamping out-of-range values.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let n = &self.notification;
        Timings::from_millis(
            n.reveal_delay_ms.unwrap_or(DEFAULT_REVEAL_DELAY_MS),
            n.display_ms.unwrap_or(DEFAULT_DISPLAY_MS),
            n.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_language_and_timings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "language = \"en-US\"\n\n[notification]\ndisplay_ms = 3000\n",
        )
        .expect("failed to write settings");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.notification.display_ms, Some(3000));
        assert_eq!(loaded.timings().display(), Duration::from_millis(3000));
        assert_eq!(
            loaded.timings().transition(),
            Duration::from_millis(DEFAULT_TRANSITION_MS)
        );
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }

    #[test]
    fn default_config_uses_default_timings() {
        let timings = Config::default().timings();
        assert_eq!(timings, Timings::default());
        assert_eq!(timings.display(), Duration::from_millis(DEFAULT_DISPLAY_MS));
    }

    #[test]
    fn out_of_range_timings_are_clamped() {
        let config = Config {
            language: None,
            notification: NotificationConfig {
                reveal_delay_ms: Some(10_000),
                display_ms: Some(1),
                transition_ms: None,
            },
        };
        let timings = config.timings();
        assert_eq!(timings.reveal_delay(), Duration::from_millis(MAX_REVEAL_DELAY_MS));
        assert_eq!(timings.display(), Duration::from_millis(MIN_DISPLAY_MS));
    }
}
