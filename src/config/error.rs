//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::notify::ConfigurationError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid URL provided.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid `--field` format.
    #[error("Invalid field format '{value}': expected 'Name=Value' or 'Name: Value'")]
    InvalidField {
        /// The invalid field string
        value: String,
    },

    /// The notifier rejected the merged identity.
    #[error(transparent)]
    Notifier(#[from] ConfigurationError),
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The webhook URL field.
    pub const URL: &str = "url";
    /// The username field.
    pub const USERNAME: &str = "username";
    /// The application name field.
    pub const APPLICATION_NAME: &str = "application_name";
    /// The message summary.
    pub const SUMMARY: &str = "summary";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
