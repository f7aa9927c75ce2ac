//! Centralized error handling.
//!
//! Misconfiguration is reported here before the hosting application
//! finishes booting; nothing in this crate fails after load.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An override carried a value of the wrong shape or type.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// An endpoint setting did not parse as a URL.
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: String,
        #[source]
        source: url::ParseError,
    },

    /// The instance override file could not be read.
    #[error("failed to read override file {}: {source}", path.display())]
    OverrideIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The instance override file is not valid TOML.
    #[error("failed to parse override file {}: {source}", path.display())]
    OverrideParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A cross-field constraint does not hold.
    #[error("{0}")]
    Validation(String),

    /// The effective configuration could not be rendered for output.
    #[error("failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ConfigError::Validation(msg.into())
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
