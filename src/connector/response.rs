//! Non-raising call outcomes.

use super::{ApiError, ErrorBody};

/// Result of a call that produced a classifiable response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 2xx with parsed JSON body (`null` for an empty body).
    Success(serde_json::Value),

    /// Soft result: a 4xx other than 401/403, or a 5xx.
    ///
    /// Returned rather than raised; inspect `status` before using `body`.
    Failure {
        /// Response status
        status: http::StatusCode,
        /// Response body
        body: ErrorBody,
    },
}

impl ApiResponse {
    /// Returns true for [`ApiResponse::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the JSON body: the success payload, or a JSON error body.
    #[must_use]
    pub const fn json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { body, .. } => body.as_json(),
        }
    }

    /// Converts soft failures into [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for [`ApiResponse::Failure`].
    pub fn into_result(self) -> Result<serde_json::Value, ApiError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure { status, body } => Err(ApiError::Status { status, body }),
        }
    }
}
