//! Pagination primitives for the repository facade.

use serde::{Deserialize, Serialize};

/// Opaque pagination token returned by the repository facade.
///
/// Callers must not interpret the contents; they only hand it back to fetch
/// the next page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the facade that minted it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of results plus the cursor for the next, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in API order
    pub items: Vec<T>,
    /// Cursor for the following page; `None` when exhausted
    pub next: Option<Cursor>,
}

impl<T> Page<T> {
    /// A page with no items and no successor.
    pub const fn empty() -> Self {
        Self { items: Vec::new(), next: None }
    }
}
