//! The `MessageCard` payload understood by MS Teams inbound webhooks.

use serde::Serialize;

use super::{Fields, NotificationEvent, Outcome};

/// Theme color for successful transactions.
pub const SUCCESS_COLOR: &str = "00AA00";
/// Theme color for failed transactions.
pub const FAILURE_COLOR: &str = "CC0000";
/// Title emoji for successful transactions (white heavy check mark).
pub const SUCCESS_EMOJI: char = '\u{2705}';
/// Title emoji for failed transactions (cross mark).
pub const FAILURE_EMOJI: char = '\u{274C}';

/// Maximum number of characters of `details` kept before truncation.
pub const MAX_DETAILS_CHARS: usize = 7500;
/// Marker appended to truncated details.
pub const ELLIPSIS: &str = "...";
/// Fixed-width block marker prefixed to non-blank details.
pub const CODE_FENCE: &str = "```";

const CARD_TYPE: &str = "MessageCard";
const CARD_CONTEXT: &str = "https://schema.org/extensions";

/// A complete card, serialized as the webhook request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "@type")]
    card_type: &'static str,
    #[serde(rename = "@context")]
    context: &'static str,
    /// Notification preview text (same as the title)
    pub summary: String,
    /// Hex theme color without `#`
    pub theme_color: &'static str,
    /// Emoji-prefixed title
    pub title: String,
    /// Always exactly one section
    pub sections: Vec<Section>,
}

/// The single activity section of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Application name
    pub activity_title: String,
    /// Username
    pub activity_subtitle: String,
    /// Global facts followed by per-message facts
    pub facts: Vec<Fact>,
    /// Rendered details (see [`render_details`])
    pub activity_text: String,
}

/// One key/value row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    /// Fact name
    pub name: String,
    /// Stringified value
    pub value: String,
}

impl Card {
    /// Assembles a card for `event` under the given identity.
    ///
    /// `global_fields` are emitted before the event's own fields.
    #[must_use]
    pub fn build(
        application_name: &str,
        username: &str,
        global_fields: &Fields,
        event: &NotificationEvent,
    ) -> Self {
        let title = render_title(event.outcome, &event.summary);
        let facts = global_fields
            .iter()
            .chain(event.fields.iter())
            .map(|(name, value)| Fact {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();

        Self {
            card_type: CARD_TYPE,
            context: CARD_CONTEXT,
            summary: title.clone(),
            theme_color: event.outcome.color(),
            title,
            sections: vec![Section {
                activity_title: application_name.to_string(),
                activity_subtitle: username.to_string(),
                facts,
                activity_text: render_details(event.details.as_deref()),
            }],
        }
    }

    /// Returns the first (and only) section.
    #[must_use]
    pub fn section(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// Serializes the card to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; not expected for string-only payloads.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Builds the title: emoji, a space, then the summary, trimmed.
#[must_use]
pub fn render_title(outcome: Outcome, summary: &str) -> String {
    format!("{} {summary}", outcome.emoji()).trim().to_string()
}

/// Renders the details text for the card body.
///
/// Text longer than [`MAX_DETAILS_CHARS`] characters is cut and suffixed
/// with [`ELLIPSIS`]. Non-blank results get a leading [`CODE_FENCE`]; no
/// closing fence is written, matching what existing Teams channels receive.
#[must_use]
pub fn render_details(details: Option<&str>) -> String {
    let Some(details) = details.filter(|d| !d.is_empty()) else {
        return String::new();
    };

    let text = match details.char_indices().nth(MAX_DETAILS_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &details[..cut]),
        None => details.to_string(),
    };

    if text.trim().is_empty() {
        text
    } else {
        format!("{CODE_FENCE}{text}")
    }
}
