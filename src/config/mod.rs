//! Configuration layer for the `teams-relay` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Identity values (`url`, `username`, `application_name`) are resolved with
//! the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Environment** - only the webhook URL, from `MSTEAMS_WEBHOOK_URL`
//!
//! TOML `[fields]` become global facts on the card; CLI `--field` values are
//! facts for the single message being sent. Both are kept, globals first.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
