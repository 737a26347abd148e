//! The call helper and status classification.

use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::{ApiError, ApiResponse, ErrorBody, Query};

/// `User-Agent` sent with every call unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("teams-relay/", env!("CARGO_PKG_VERSION"));

/// Extra per-call settings.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Headers added to the request (e.g. `Authorization`).
    ///
    /// `Content-Type` and `User-Agent` are always set by the connector and
    /// take precedence over values given here.
    pub headers: HeaderMap,
}

impl CallOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// Reusable single-call JSON API helper.
///
/// Intended as the building block for specific API clients: it handles
/// query strings, JSON bodies and status classification, and leaves retry
/// and credential refresh to the caller (see [`ApiError::is_auth`]).
///
/// # Example
///
/// ```no_run
/// use teams_relay::connector::{ApiConnector, ApiError, Query};
/// use teams_relay::transport::ReqwestClient;
///
/// # async fn example() -> Result<(), ApiError> {
/// let api = ApiConnector::new(ReqwestClient::new());
/// let query = Query::new().with("page", 2);
/// match api.get("https://api.example.com/v1/invoices", Some(&query)).await {
///     Ok(response) => println!("{:?}", response.json()),
///     Err(e) if e.is_auth() => { /* refresh the token and call again */ }
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConnector<H> {
    client: H,
    user_agent: HeaderValue,
}

impl<H> ApiConnector<H> {
    /// Creates a connector sending [`DEFAULT_USER_AGENT`].
    #[must_use]
    pub fn new(client: H) -> Self {
        Self {
            client,
            user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
        }
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: HeaderValue) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub const fn user_agent(&self) -> &HeaderValue {
        &self.user_agent
    }
}

impl<H: HttpClient> ApiConnector<H> {
    /// Performs one request and classifies the response.
    ///
    /// A non-empty `query` is appended to `url`; a `payload` is sent as the
    /// JSON body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Auth`] for 401/403
    /// - [`ApiError::Transport`] when no response was obtained or `url` is invalid
    /// - [`ApiError::Decode`] when a 2xx body is not JSON
    /// - [`ApiError::Encode`] when `payload` cannot be serialized
    /// - [`ApiError::Unclassified`] for 1xx/3xx statuses
    ///
    /// Other 4xx and 5xx statuses are returned as [`ApiResponse::Failure`].
    pub async fn call(
        &self,
        method: Method,
        url: &str,
        query: Option<&Query>,
        payload: Option<&serde_json::Value>,
        options: Option<&CallOptions>,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(method, url, query, payload, options)?;
        let target = format!("{} {}", request.method, request.url);
        tracing::debug!("API call: {target}");

        let response = self.client.request(request).await.map_err(|e| {
            tracing::error!("API call {target} failed: {e}");
            ApiError::Transport(e)
        })?;

        if !response.is_success() {
            tracing::debug!("API call {target} returned HTTP {}", response.status);
        }
        classify(&response)
    }

    /// GET with optional query parameters.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get(&self, url: &str, query: Option<&Query>) -> Result<ApiResponse, ApiError> {
        self.call(Method::GET, url, query, None, None).await
    }

    /// POST with a serializable JSON body.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn post<P>(&self, url: &str, payload: &P) -> Result<ApiResponse, ApiError>
    where
        P: Serialize + ?Sized + Sync,
    {
        let payload = serde_json::to_value(payload).map_err(ApiError::Encode)?;
        self.call(Method::POST, url, None, Some(&payload), None).await
    }

    /// PUT with a serializable JSON body.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn put<P>(&self, url: &str, payload: &P) -> Result<ApiResponse, ApiError>
    where
        P: Serialize + ?Sized + Sync,
    {
        let payload = serde_json::to_value(payload).map_err(ApiError::Encode)?;
        self.call(Method::PUT, url, None, Some(&payload), None).await
    }

    /// DELETE with optional query parameters.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn delete(&self, url: &str, query: Option<&Query>) -> Result<ApiResponse, ApiError> {
        self.call(Method::DELETE, url, query, None, None).await
    }

    fn build_request(
        &self,
        method: Method,
        url: &str,
        query: Option<&Query>,
        payload: Option<&serde_json::Value>,
        options: Option<&CallOptions>,
    ) -> Result<HttpRequest, ApiError> {
        let mut target =
            url::Url::parse(url).map_err(|e| HttpError::InvalidUrl(format!("{url}: {e}")))?;
        if let Some(query) = query {
            query.apply_to(&mut target);
        }

        let mut request = HttpRequest::new(method, target);
        if let Some(options) = options {
            for (name, value) in &options.headers {
                request.headers.append(name, value.clone());
            }
        }

        request = request
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(USER_AGENT, self.user_agent.clone());

        if let Some(payload) = payload {
            request = request.with_body(serde_json::to_vec(payload).map_err(ApiError::Encode)?);
        }

        Ok(request)
    }
}

/// Classifies a response by status class.
///
/// Non-2xx bodies are parsed as JSON, falling back to raw text.
///
/// # Errors
///
/// See [`ApiConnector::call`].
pub fn classify(response: &HttpResponse) -> Result<ApiResponse, ApiError> {
    let status = response.status;
    if status.is_success() {
        return response
            .json()
            .map(ApiResponse::Success)
            .map_err(|source| ApiError::Decode { status, source });
    }

    let body = ErrorBody::from_response(response);
    match status.as_u16() {
        401 | 403 => Err(ApiError::Auth { status, body }),
        400..=499 | 500.. => Ok(ApiResponse::Failure { status, body }),
        _ => Err(ApiError::Unclassified { status, body }),
    }
}
