//! Error types for the posts API client.
//!
//! # Design
//! Only failures of the call itself are errors: the transport could not
//! complete the round-trip, or a body could not be encoded/decoded. A
//! remote-reported failure (4xx/5xx status) is NOT an error — it comes back
//! as a normal `HttpResponse` for the test layer to assert against. The
//! client never interprets status codes.

use std::fmt;

/// Errors returned by `ApiClient` and `PostsApi` calls.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP round-trip could not complete (DNS failure, connection
    /// refused, timeout). Fatal to the single call.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
