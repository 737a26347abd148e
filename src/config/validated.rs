//! Validated configuration after merging CLI, TOML and environment sources.
//!
//! All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::notify::{Fields, NotificationEvent, NotificationSender, Outcome, SenderOptions};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration for one notification.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Inbound webhook URL (required)
    pub webhook_url: Url,

    /// Username shown as the card subtitle (required)
    pub username: String,

    /// Application name shown as the card activity title (required)
    pub application_name: String,

    /// Facts added to every card (from the config file)
    pub global_fields: Fields,

    /// The message to send
    pub event: NotificationEvent,

    /// Request timeout; `None` leaves the client without one
    pub timeout: Option<Duration>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.event.outcome {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        };

        // The webhook URL path carries the channel secret; only show the host.
        write!(
            f,
            "Config {{ webhook_host: {}, username: {}, application: {}, outcome: {}, \
             global_fields: {}, fields: {} }}",
            self.webhook_url.host_str().unwrap_or("-"),
            self.username,
            self.application_name,
            outcome,
            self.global_fields.len(),
            self.event.fields.len(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments, optional TOML
    /// config and the webhook URL found in the environment (if any).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`url`, `username`, `application_name`, `summary`)
    /// - The URL is invalid
    /// - A `--field` value is malformed
    pub fn from_raw(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let webhook_url = Self::resolve_url(cli, toml, env_url)?;

        let username = non_empty(
            cli.username.as_deref(),
            toml.and_then(|t| t.webhook.username.as_deref()),
        )
        .ok_or_else(|| {
            ConfigError::missing(
                field::USERNAME,
                "Use --username or set webhook.username in config file",
            )
        })?;

        let application_name = non_empty(
            cli.application_name.as_deref(),
            toml.and_then(|t| t.webhook.application_name.as_deref()),
        )
        .ok_or_else(|| {
            ConfigError::missing(
                field::APPLICATION_NAME,
                "Use --app or set webhook.application_name in config file",
            )
        })?;

        let global_fields: Fields = toml
            .map(|t| t.field_pairs().collect())
            .unwrap_or_default();

        let event = Self::build_event(cli)?;
        let timeout = Self::resolve_timeout(cli)?;

        Ok(Self {
            webhook_url,
            username: username.to_string(),
            application_name: application_name.to_string(),
            global_fields,
            event,
            timeout,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI, optional config file and
    /// the `MSTEAMS_WEBHOOK_URL` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };
        let env_url = std::env::var(defaults::WEBHOOK_URL_ENV).ok();

        Self::from_raw(cli, toml.as_ref(), env_url.as_deref())
    }

    /// Builds the sender described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Notifier`] if the sender rejects the identity.
    pub fn build_sender<H>(&self, client: H) -> Result<NotificationSender<H>, ConfigError> {
        let options = SenderOptions::new().with_fields(self.global_fields.clone());
        NotificationSender::new(
            client,
            self.webhook_url.as_str(),
            self.username.clone(),
            self.application_name.clone(),
            Some(options),
        )
        .map_err(ConfigError::from)
    }

    fn resolve_url(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env_url: Option<&str>,
    ) -> Result<Url, ConfigError> {
        let url_str = non_empty(
            cli.url.as_deref(),
            toml.and_then(|t| t.webhook.url.as_deref()),
        )
        .or_else(|| env_url.filter(|s| !s.is_empty()))
        .ok_or_else(|| {
            ConfigError::missing(
                field::URL,
                "Use --url, set webhook.url in config file, or export MSTEAMS_WEBHOOK_URL",
            )
        })?;

        Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })
    }

    fn resolve_timeout(cli: &Cli) -> Result<Option<Duration>, ConfigError> {
        match cli.timeout {
            Some(0) => Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            }),
            other => Ok(other.map(Duration::from_secs)),
        }
    }

    fn build_event(cli: &Cli) -> Result<NotificationEvent, ConfigError> {
        let summary = cli
            .summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(field::SUMMARY, "Use --summary to describe the message")
            })?;

        let mut fields = Fields::new();
        for field_str in &cli.fields {
            let (name, value) = parse_field_string(field_str)?;
            fields.insert(name, value);
        }

        let mut event = NotificationEvent::new(!cli.failure, summary).with_fields(fields);
        event.details.clone_from(&cli.details);
        Ok(event)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// CLI value if non-empty, else TOML value if non-empty.
fn non_empty<'a>(cli: Option<&'a str>, toml: Option<&'a str>) -> Option<&'a str> {
    cli.filter(|s| !s.is_empty())
        .or_else(|| toml.filter(|s| !s.is_empty()))
}

fn parse_field_string(s: &str) -> Result<(String, String), ConfigError> {
    // Try "Name=Value" format first
    if let Some((name, value)) = s.split_once('=') {
        return named_pair(s, name, value);
    }

    // Try "Name: Value" format
    if let Some((name, value)) = s.split_once(':') {
        return named_pair(s, name, value);
    }

    Err(ConfigError::InvalidField {
        value: s.to_string(),
    })
}

fn named_pair(raw: &str, name: &str, value: &str) -> Result<(String, String), ConfigError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::InvalidField {
            value: raw.to_string(),
        });
    }
    Ok((name.to_string(), value.trim().to_string()))
}
