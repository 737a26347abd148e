//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use teams_relay::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Notification delivered (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing required fields, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Delivery failed (exit code 2) - Teams rejected the card or was unreachable.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn delivery_failed() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } => {
            if *f == field::URL || *f == field::USERNAME || *f == field::APPLICATION_NAME {
                eprintln!("\nRun 'teams-relay init' to generate a configuration template.");
            }
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'teams-relay init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
