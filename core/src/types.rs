//! Domain DTOs for the posts resource.
//!
//! # Design
//! These types mirror the remote service's wire schema (`userId` camelCase)
//! but are defined independently of the mock-server crate; integration tests
//! catch schema drift. The client enforces no schema of its own — callers
//! that need a deliberately incomplete payload pass a `serde_json::Value`
//! map instead, and the remote service stays the source of truth for
//! required fields.

use serde::{Deserialize, Serialize};

/// A single post record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// The complete request payload for creating or replacing a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}
