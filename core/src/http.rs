//! HTTP transport types and the request capability boundary.
//!
//! # Design
//! Requests and responses are plain data. The crate never performs network
//! I/O itself: it builds `HttpRequest` values and hands them to a caller
//! supplied [`Transport`], which owns the actual round-trip. This keeps the
//! client deterministic and lets tests substitute an in-memory transport.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between the client, the transport, and test harnesses.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by [`ApiClient`](crate::ApiClient) methods and executed by a
/// [`Transport`] implementation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`. Immutable
/// once received; the status code is carried verbatim — a 4xx/5xx response
/// is a normal value here, never an error.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Parse the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// The raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }
}

/// The externally supplied ability to perform one HTTP call.
///
/// # Contract
/// Every `execute` call uses an isolated request context — opened for this
/// call, discarded afterwards. No connection pooling, no cookie or session
/// carryover between calls. Network-level failures (DNS, connection refused,
/// timeout) surface as [`ApiError::Transport`]; a response with any status
/// code, including 4xx/5xx, is returned as `Ok`. Timeout and cancellation
/// policy belong to the implementor.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}
