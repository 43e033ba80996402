//! The closed set of resource endpoints exposed by the placeholder service.
//!
//! A tagged enum rather than a string map, so a typo in an endpoint name
//! fails to compile instead of producing a 404 at runtime.

use std::fmt;

/// Symbolic name for a resource collection, mapped to its URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Posts,
    Users,
    Comments,
}

impl Endpoint {
    /// The path segment appended to the service root.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Posts => "posts",
            Endpoint::Users => "users",
            Endpoint::Comments => "comments",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
