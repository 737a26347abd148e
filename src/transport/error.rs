//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for transport-level failures.
///
/// Raised when no HTTP response could be obtained at all. A response with
/// a non-2xx status is *not* an `HttpError`; callers classify those
/// themselves.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// Only produced when the underlying client was configured with a timeout.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
