//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. Neither component enforces a timeout of its
/// own; configure one on the wrapped client if needed.
///
/// # Example
///
/// ```no_run
/// use teams_relay::transport::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://example.webhook.office.com/webhookb2/abc")?;
/// let request = HttpRequest::post(url).with_body(b"{}".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a client whose requests fail with [`HttpError::Timeout`]
    /// after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(Self::from_client)
            .map_err(|e| HttpError::Connection(Box::new(e)))
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful for proxies or redirect policies.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(classify_error)?.to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

/// Maps a reqwest failure onto the transport error kinds.
fn classify_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
