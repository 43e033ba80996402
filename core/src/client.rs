//! Generic HTTP client wrapper over an injected [`Transport`].
//!
//! # Design
//! `ApiClient` holds only the transport and carries no mutable state between
//! calls. Each operation translates a (method, URL, optional payload) tuple
//! into exactly one `HttpRequest` and hands it to the transport — no retry,
//! no backoff, no status-code interpretation. A 4xx/5xx response comes back
//! as a normal `HttpResponse`; interpretation belongs entirely to the
//! caller.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Stateless wrapper issuing single HTTP calls through a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Issue an HTTP GET to `url`. No query parameters, no headers beyond
    /// the transport's defaults.
    pub fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        self.transport.execute(&HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        })
    }

    /// Issue an HTTP POST with `payload` serialized as the JSON body.
    pub fn post(&self, url: &str, payload: &impl Serialize) -> Result<HttpResponse, ApiError> {
        self.transport.execute(&self.bodied(HttpMethod::Post, url, payload)?)
    }

    /// Issue an HTTP PUT with `payload` serialized as the JSON body.
    pub fn put(&self, url: &str, payload: &impl Serialize) -> Result<HttpResponse, ApiError> {
        self.transport.execute(&self.bodied(HttpMethod::Put, url, payload)?)
    }

    /// Issue an HTTP DELETE to `url`.
    pub fn delete(&self, url: &str) -> Result<HttpResponse, ApiError> {
        self.transport.execute(&HttpRequest {
            method: HttpMethod::Delete,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        })
    }

    fn bodied(
        &self,
        method: HttpMethod,
        url: &str,
        payload: &impl Serialize,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}
