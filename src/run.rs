//! Sends the notification described by a validated configuration.

use std::process::ExitCode;

use teams_relay::config::{ConfigError, ValidatedConfig};
use teams_relay::notify::{DiagnosticSink, NotificationSender};
use teams_relay::transport::{HttpClient, HttpError, ReqwestClient};
use thiserror::Error;

use crate::app::exit_code;

/// Errors that prevent a notification from being attempted.
///
/// Delivery failures are not errors; they surface as `Ok(false)`.
#[derive(Debug, Error)]
pub enum RunError {
    /// The sender rejected the configured identity.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] HttpError),
}

impl RunError {
    /// Exit code for a run that never reached the webhook.
    ///
    /// Only configuration problems map to the configuration exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => exit_code::CONFIG_ERROR,
            Self::Client(_) => exit_code::delivery_failed(),
        }
    }
}

/// Sends one notification with the production HTTP client.
///
/// Returns whether Teams accepted the card.
///
/// # Errors
///
/// Returns an error if the client or sender cannot be built.
pub async fn execute(config: &ValidatedConfig) -> Result<bool, RunError> {
    let client = match config.timeout {
        Some(timeout) => ReqwestClient::with_timeout(timeout)?,
        None => ReqwestClient::new(),
    };
    let sender = config.build_sender(client)?;
    Ok(deliver(&sender, config).await)
}

/// Delivers the configured event through `sender`.
pub async fn deliver<H, D>(sender: &NotificationSender<H, D>, config: &ValidatedConfig) -> bool
where
    H: HttpClient,
    D: DiagnosticSink,
{
    let delivered = sender.log_event(&config.event).await;
    if delivered {
        tracing::info!("Notification delivered: {}", config.event.summary);
    }
    delivered
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
