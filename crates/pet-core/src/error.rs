//! Error types.
//!
//! Simulation commands are total and never fail. Errors only come from the
//! boundary: loading tuning files and parsing names supplied by a driver.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Error serializing config back to TOML
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A value parsed but is out of its allowed range
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Errors from parsing enum names (actions, personalities, moods).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
    #[error("unknown personality: {0:?}")]
    UnknownPersonality(String),
    #[error("unknown mood: {0:?}")]
    UnknownMood(String),
}
