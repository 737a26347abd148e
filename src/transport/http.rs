//! HTTP request/response types and client trait.

use super::HttpError;

/// An HTTP request to be sent.
///
/// This is a value type that can be constructed and passed to any
/// [`HttpClient`] implementation. It uses standard `http` crate types
/// for method and headers.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a header, replacing any previous value under the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns the body as a UTF-8 string, if present and valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|body| std::str::from_utf8(body).ok())
    }
}

/// An HTTP response received from a server.
///
/// The body is fully buffered into memory.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    ///
    /// An empty (or whitespace-only) body yields [`serde_json::Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns the parser error when the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&self.body)
    }
}

/// Trait for making HTTP requests.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock clients
/// - Swapping HTTP libraries without changing calling code
///
/// Implementations must not retry and must not treat non-2xx statuses as
/// errors; both components built on top of this trait classify statuses
/// themselves.
///
/// # Example
///
/// ```ignore
/// use teams_relay::transport::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct MockClient {
///     response: HttpResponse,
/// }
///
/// impl HttpClient for MockClient {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
