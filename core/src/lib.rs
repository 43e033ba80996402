//! API client for a JSONPlaceholder-style posts service.
//!
//! # Overview
//! A thin, stateless client split into three layers:
//! - [`ApiClient`] — translates (method, URL, optional payload) into exactly
//!   one HTTP call through an injected [`Transport`].
//! - [`PostsApi`] — binds the client to one resource's base URL and exposes
//!   intention-revealing operations (`get_all_posts`, `create_post`, ...).
//! - [`Endpoint`] — the closed set of resource path segments.
//!
//! # Design
//! - No component retains state across calls; each transport call is an
//!   isolated request context.
//! - The client never interprets status codes: 4xx/5xx responses are normal
//!   [`HttpResponse`] values. Only transport, serialization, and
//!   deserialization failures are errors.
//! - Transport is a trait, so the integration suite supplies real HTTP and
//!   unit tests supply in-memory doubles.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod posts;
pub mod types;

pub use client::ApiClient;
pub use endpoints::Endpoint;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use posts::PostsApi;
pub use types::{NewPost, Post};
