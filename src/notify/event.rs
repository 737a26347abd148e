//! The per-call status message.

use super::Fields;
use super::card::{FAILURE_COLOR, FAILURE_EMOJI, SUCCESS_COLOR, SUCCESS_EMOJI};

/// Whether the reported transaction succeeded.
///
/// There are exactly two themes; no neutral state exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Transaction succeeded (green, check mark).
    Success,
    /// Transaction failed (red, cross mark).
    Failure,
}

impl Outcome {
    /// Card theme color as a hex string without `#`.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_COLOR,
            Self::Failure => FAILURE_COLOR,
        }
    }

    /// Emoji prefixed to the card title.
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Success => SUCCESS_EMOJI,
            Self::Failure => FAILURE_EMOJI,
        }
    }
}

impl From<bool> for Outcome {
    fn from(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }
}

/// A single status message to post.
///
/// # Example
///
/// ```
/// use teams_relay::notify::NotificationEvent;
///
/// let event = NotificationEvent::failure("Invoice was not created.")
///     .with_details("The quantity is missing for product 1234879.")
///     .with_field("customer_id", 28390)
///     .with_field("product_sku", "TS4921");
/// assert_eq!(event.fields.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Success or failure theme
    pub outcome: Outcome,
    /// Short summary line (required, must be non-empty)
    pub summary: String,
    /// Longer text rendered in a fixed-width block
    pub details: Option<String>,
    /// Facts for this message only, appended after the global facts
    pub fields: Fields,
}

impl NotificationEvent {
    /// Creates an event with the given outcome and summary.
    #[must_use]
    pub fn new(outcome: impl Into<Outcome>, summary: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
            summary: summary.into(),
            details: None,
            fields: Fields::new(),
        }
    }

    /// Creates a success event.
    #[must_use]
    pub fn success(summary: impl Into<String>) -> Self {
        Self::new(Outcome::Success, summary)
    }

    /// Creates a failure event.
    #[must_use]
    pub fn failure(summary: impl Into<String>) -> Self {
        Self::new(Outcome::Failure, summary)
    }

    /// Sets the details text.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Appends one per-message fact.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.fields.insert(name, value);
        self
    }

    /// Replaces the per-message facts.
    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}
