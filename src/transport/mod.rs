//! Transport layer shared by the notification sender and the API connector.
//!
//! This module provides:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling buffered HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod http;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
