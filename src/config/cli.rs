//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// teams-relay: post a status card to an MS Teams inbound webhook
///
/// Sends one success or failure notification and exits 0 if Teams
/// accepted it.
#[derive(Debug, Parser)]
#[command(name = "teams-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Inbound webhook URL (falls back to `MSTEAMS_WEBHOOK_URL`)
    #[arg(long)]
    pub url: Option<String>,

    /// Username shown under the application name (e.g. "production environment")
    #[arg(long)]
    pub username: Option<String>,

    /// Application name shown as the card activity title
    #[arg(long = "app")]
    pub application_name: Option<String>,

    /// Short summary line of the message
    #[arg(long, short)]
    pub summary: Option<String>,

    /// Details rendered in a fixed-width block (truncated after 7500 characters)
    #[arg(long, short)]
    pub details: Option<String>,

    /// Per-message fact in 'Name=Value' or 'Name: Value' format (can be specified multiple times)
    #[arg(long = "field", value_name = "K=V")]
    pub fields: Vec<String>,

    /// Report a failure instead of a success
    #[arg(long)]
    pub failure: bool,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (prints the card payload)
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for teams-relay
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
