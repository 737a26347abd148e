//! Error types for API calls.

use std::fmt;

use thiserror::Error;

use crate::transport::{HttpError, HttpResponse};

/// Body of a non-2xx response.
///
/// Parsed as JSON when possible; HTML error pages and plain text are kept
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Body parsed as JSON
    Json(serde_json::Value),
    /// Body that is not valid JSON (including an empty body)
    Text(String),
}

impl ErrorBody {
    /// Reads the body of `response`.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        serde_json::from_slice(&response.body)
            .map_or_else(|_| Self::Text(response.text()), Self::Json)
    }

    /// Returns the parsed JSON, if the body was JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Error type for [`ApiConnector`](super::ApiConnector) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 401 or 403.
    ///
    /// Callers that hold refreshable credentials should refresh and retry.
    #[error("Authorization failed (HTTP {status}): {body}")]
    Auth {
        /// 401 or 403
        status: http::StatusCode,
        /// Serialized error body
        body: ErrorBody,
    },

    /// No response could be obtained.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// A 2xx response carried a body that is not JSON.
    #[error("Invalid JSON in HTTP {status} response: {source}")]
    Decode {
        /// Response status
        status: http::StatusCode,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized.
    #[error("Failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// A status outside the 2xx, 4xx and 5xx classes (redirects, informational).
    #[error("Unclassified HTTP {status} response: {body}")]
    Unclassified {
        /// Response status
        status: http::StatusCode,
        /// Response body
        body: ErrorBody,
    },

    /// A soft failure folded into an error by [`ApiResponse::into_result`](super::ApiResponse::into_result).
    #[error("HTTP {status} error: {body}")]
    Status {
        /// Response status
        status: http::StatusCode,
        /// Response body
        body: ErrorBody,
    },
}

impl ApiError {
    /// Returns true for 401/403 failures.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Returns true when no usable response was obtained.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode { .. })
    }

    /// HTTP status carried by the error, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Auth { status, .. }
            | Self::Decode { status, .. }
            | Self::Unclassified { status, .. }
            | Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Encode(_) => None,
        }
    }
}
