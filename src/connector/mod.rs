//! Generic JSON API call helper.
//!
//! This module provides:
//! - Ordered query parameters ([`Query`])
//! - Per-call extra headers ([`CallOptions`])
//! - The call helper itself ([`ApiConnector`])
//! - Outcome and error classification ([`ApiResponse`], [`ApiError`], [`ErrorBody`])
//!
//! # Status classification
//!
//! | Status        | Result                                   |
//! |---------------|------------------------------------------|
//! | 2xx           | `Ok(ApiResponse::Success(json))`         |
//! | 401, 403      | `Err(ApiError::Auth { .. })`             |
//! | other 4xx, 5xx+ | `Ok(ApiResponse::Failure { .. })`      |
//! | 1xx, 3xx      | `Err(ApiError::Unclassified { .. })`     |
//!
//! Auth failures are raised so callers can refresh credentials and retry;
//! the remaining client and server errors are returned as data. Nothing is
//! retried here.

mod call;
mod error;
mod query;
mod response;

#[cfg(test)]
mod call_tests;

pub use call::{ApiConnector, CallOptions, DEFAULT_USER_AGENT, classify};
pub use error::{ApiError, ErrorBody};
pub use query::Query;
pub use response::ApiResponse;
