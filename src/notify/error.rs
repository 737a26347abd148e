//! Error types for notification sender construction.

use thiserror::Error;

/// Error raised when a [`NotificationSender`](super::NotificationSender)
/// is built with an incomplete identity.
///
/// This is the only error the notification layer ever returns; delivery
/// failures are reported through the diagnostic sink instead.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A required identity value was empty.
    #[error(
        "Misconfigured Teams notifier: {field} is required \
         (webhook_url, username and application_name must all be set)"
    )]
    MissingRequired {
        /// Name of the missing value
        field: &'static str,
    },

    /// The webhook URL could not be parsed.
    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The inbound webhook URL.
    pub const WEBHOOK_URL: &str = "webhook_url";
    /// The username shown as the card subtitle.
    pub const USERNAME: &str = "username";
    /// The application name shown as the card title line.
    pub const APPLICATION_NAME: &str = "application_name";
}
