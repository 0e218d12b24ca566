//! Location model.

use serde::{Deserialize, Serialize};

/// A location fetched from the remote API.
///
/// Used to derive a resident filter for the character collection; the
/// `residents` list holds character identifiers already extracted from the
/// API's resident URLs by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// Unique identifier, stable across fetches
    pub id: String,
    /// Display name
    pub name: String,
    /// Identifiers of the characters residing here
    pub residents: Vec<String>,
}
