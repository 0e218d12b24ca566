//! The repository facade contract.

use async_trait::async_trait;

use crate::error::NetworkError;
use crate::models::{Character, Cursor, Location, Page};

/// Source of characters and locations.
///
/// Implemented by the HTTP client against the public API and by in-memory
/// doubles in tests. All operations are black-box, possibly slow, and
/// possibly failing; implementations surface a [`NetworkError`] rather than
/// retrying internally.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Fetch the full character collection.
    async fn fetch_all(&self) -> Result<Vec<Character>, NetworkError>;

    /// Fetch one page of locations. `None` fetches the first page.
    async fn fetch_locations_page(
        &self,
        cursor: Option<Cursor>,
    ) -> Result<Page<Location>, NetworkError>;

    /// Fetch the characters with the given identifiers.
    ///
    /// Unknown identifiers are omitted from the result rather than failing
    /// the whole call; an empty input yields an empty result.
    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<Character>, NetworkError>;
}
