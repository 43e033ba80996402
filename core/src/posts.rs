//! Intention-revealing API facade for the posts resource.
//!
//! # Design
//! One resource, one facade value, one client value: `PostsApi` composes an
//! [`ApiClient`] with the base URL `{service_root}/posts` and adds URL
//! construction only. Identifiers and payloads pass through unvalidated —
//! `u64::MAX` is a legal id, and the remote service decides what "not
//! found" means. All correctness checking of server behavior happens in the
//! test layer via the returned `HttpResponse`.

use serde::Serialize;

use crate::client::ApiClient;
use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpResponse, Transport};

/// Per-resource API surface for the posts collection.
#[derive(Debug, Clone)]
pub struct PostsApi<T> {
    client: ApiClient<T>,
    base_url: String,
}

impl<T: Transport> PostsApi<T> {
    pub fn new(service_root: &str, transport: T) -> Self {
        Self {
            client: ApiClient::new(transport),
            base_url: format!("{}/{}", service_root.trim_end_matches('/'), Endpoint::Posts),
        }
    }

    pub fn get_all_posts(&self) -> Result<HttpResponse, ApiError> {
        self.client.get(&self.base_url)
    }

    pub fn get_post_by_id(&self, id: u64) -> Result<HttpResponse, ApiError> {
        self.client.get(&format!("{}/{id}", self.base_url))
    }

    pub fn create_post(&self, payload: &impl Serialize) -> Result<HttpResponse, ApiError> {
        self.client.post(&self.base_url, payload)
    }

    pub fn update_post(&self, id: u64, payload: &impl Serialize) -> Result<HttpResponse, ApiError> {
        self.client.put(&format!("{}/{id}", self.base_url), payload)
    }

    pub fn delete_post(&self, id: u64) -> Result<HttpResponse, ApiError> {
        self.client.delete(&format!("{}/{id}", self.base_url))
    }
}
