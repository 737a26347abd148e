//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook identity section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Facts added to every card
    #[serde(default)]
    pub fields: toml::Table,
}

/// Webhook identity section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Inbound webhook URL
    pub url: Option<String>,

    /// Username shown as the card subtitle
    pub username: Option<String>,

    /// Application name shown as the card activity title
    pub application_name: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Returns the `[fields]` table as `(name, text)` pairs.
    ///
    /// Strings are used verbatim; other values use their TOML rendering
    /// (`28390`, `true`, `2022-01-01`).
    pub fn field_pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.fields.iter().map(|(name, value)| {
            let text = match value {
                toml::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (name.as_str(), text)
        })
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# teams-relay configuration file

[webhook]
# Inbound webhook URL (required; may also come from --url or MSTEAMS_WEBHOOK_URL)
# url = "https://example.webhook.office.com/webhookb2/..."

# Displayed under the application name. Messages from the same username are
# grouped together in the channel, so name the environment or server.
# username = "production environment"

# Application name shown as the card activity title (required)
# application_name = "Time-Tracking App"

[fields]
# Facts added to every message. Non-string values are rendered as text.
# build = "2022.001"
# branch = "main"
"#
    .to_string()
}
