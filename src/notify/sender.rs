//! Webhook delivery of notification cards.

use crate::transport::{HttpClient, HttpRequest};

use super::error::field;
use super::{
    Card, ConfigurationError, Diagnostic, DiagnosticSink, Fields, NotificationEvent, TracingSink,
};

/// Optional sender settings.
#[derive(Debug, Clone, Default)]
pub struct SenderOptions {
    /// Facts added to every card, before the per-message facts
    pub fields: Fields,
}

impl SenderOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the global facts.
    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}

/// Posts status cards to an MS Teams inbound webhook.
///
/// Each [`log`](Self::log) call produces exactly one POST. Delivery
/// failures (non-2xx, network errors) are sent to the diagnostic sink and
/// reported as `false`; they are never returned as errors, so a broken
/// notification channel cannot take down the caller.
///
/// The identity (webhook, username, application name, global facts) is
/// fixed at construction, so one sender can be shared across tasks.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `D`: The diagnostic sink (defaults to [`TracingSink`])
///
/// # Example
///
/// ```no_run
/// use teams_relay::notify::{Fields, NotificationSender, SenderOptions};
/// use teams_relay::transport::ReqwestClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let sender = NotificationSender::new(
///     ReqwestClient::new(),
///     "https://example.webhook.office.com/webhookb2/abc",
///     "test environment",
///     "Time-Tracking App",
///     Some(SenderOptions::new().with_fields(Fields::new().with("build", "2022.001"))),
/// )?;
///
/// let delivered = sender.log(true, "Invoice Created.", None, None).await;
/// # let _ = delivered;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NotificationSender<H, D = TracingSink> {
    client: H,
    sink: D,
    webhook_url: url::Url,
    username: String,
    application_name: String,
    fields: Fields,
}

impl<H> NotificationSender<H, TracingSink> {
    /// Creates a sender that reports diagnostics through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingRequired`] if `webhook_url`,
    /// `username` or `application_name` is empty, and
    /// [`ConfigurationError::InvalidUrl`] if the webhook URL does not parse.
    pub fn new(
        client: H,
        webhook_url: &str,
        username: impl Into<String>,
        application_name: impl Into<String>,
        options: Option<SenderOptions>,
    ) -> Result<Self, ConfigurationError> {
        let username = username.into();
        let application_name = application_name.into();

        require(webhook_url, field::WEBHOOK_URL)?;
        require(&username, field::USERNAME)?;
        require(&application_name, field::APPLICATION_NAME)?;

        let webhook_url =
            url::Url::parse(webhook_url).map_err(|e| ConfigurationError::InvalidUrl {
                url: webhook_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            sink: TracingSink,
            webhook_url,
            username,
            application_name,
            fields: options.unwrap_or_default().fields,
        })
    }
}

fn require(value: &str, name: &'static str) -> Result<(), ConfigurationError> {
    if value.is_empty() {
        return Err(ConfigurationError::MissingRequired { field: name });
    }
    Ok(())
}

impl<H, D> NotificationSender<H, D> {
    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink<D2>(self, sink: D2) -> NotificationSender<H, D2> {
        NotificationSender {
            client: self.client,
            sink,
            webhook_url: self.webhook_url,
            username: self.username,
            application_name: self.application_name,
            fields: self.fields,
        }
    }

    /// Returns the configured webhook URL.
    #[must_use]
    pub const fn webhook_url(&self) -> &url::Url {
        &self.webhook_url
    }

    /// Returns the username shown as the card subtitle.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the application name shown as the card activity title.
    #[must_use]
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Returns the facts added to every card.
    #[must_use]
    pub const fn global_fields(&self) -> &Fields {
        &self.fields
    }

    /// Builds the card that [`log_event`](Self::log_event) would send.
    #[must_use]
    pub fn build_card(&self, event: &NotificationEvent) -> Card {
        Card::build(&self.application_name, &self.username, &self.fields, event)
    }
}

impl<H: HttpClient, D: DiagnosticSink> NotificationSender<H, D> {
    /// Posts one status card.
    ///
    /// `fields` are appended after the global facts for this message only.
    /// Returns `true` if the webhook answered 2xx.
    pub async fn log(
        &self,
        success: bool,
        summary: &str,
        details: Option<&str>,
        fields: Option<&Fields>,
    ) -> bool {
        let mut event = NotificationEvent::new(success, summary);
        event.details = details.map(ToString::to_string);
        if let Some(fields) = fields {
            event.fields = fields.clone();
        }
        self.log_event(&event).await
    }

    /// Posts one status card for a prepared event.
    ///
    /// Returns `false` without sending if the summary is empty.
    pub async fn log_event(&self, event: &NotificationEvent) -> bool {
        if event.summary.is_empty() {
            self.sink.report(&Diagnostic::InvalidInvocation {
                reason: "the success and summary parameters are required",
            });
            return false;
        }

        let card = self.build_card(event);
        let body = match card.to_json() {
            Ok(body) => body,
            Err(e) => {
                self.sink.report(&Diagnostic::Encode {
                    message: e.to_string(),
                });
                return false;
            }
        };

        if let Ok(payload) = std::str::from_utf8(&body) {
            tracing::debug!("Teams card: {payload}");
        }

        let request = HttpRequest::post(self.webhook_url.clone())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(body);

        match self.client.request(request).await {
            Ok(response) if response.is_success() => {
                tracing::debug!("Teams card delivered: {}", card.title);
                true
            }
            Ok(response) => {
                self.sink.report(&Diagnostic::Rejected {
                    status: response.status,
                    body: response.text(),
                });
                false
            }
            Err(e) => {
                self.sink.report(&Diagnostic::Transport {
                    message: e.to_string(),
                });
                false
            }
        }
    }
}
