//! Default values for configuration options.

/// Environment variable consulted for the webhook URL when neither the CLI
/// nor the config file provides one.
pub const WEBHOOK_URL_ENV: &str = "MSTEAMS_WEBHOOK_URL";

/// Output path for `teams-relay init`.
pub const CONFIG_FILE: &str = "teams-relay.toml";
