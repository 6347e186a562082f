// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Clipboard Error: {0}")]
    Clipboard(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn clipboard_error_formats_properly() {
        let err = Error::Clipboard("denied".into());
        assert_eq!(err.to_string(), "Clipboard Error: denied");
    }

    #[test]
    fn every_variant_names_its_concern() {
        for err in [
            Error::Io("x".into()),
            Error::Config("x".into()),
            Error::Clipboard("x".into()),
        ] {
            let prefix = match &err {
                Error::Io(_) => "I/O Error: ",
                Error::Config(_) => "Config Error: ",
                Error::Clipboard(_) => "Clipboard Error: ",
            };
            assert_eq!(err.to_string(), format!("{prefix}x"));
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
