//! Character model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A character fetched from the remote API.
///
/// Immutable once fetched; the collection it belongs to is replaced
/// wholesale on refetch, never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    /// Unique identifier, stable across fetches
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub image: String,
    /// Gender as reported by the API
    pub gender: Gender,
    /// Life status ("Alive", "Dead", "unknown")
    pub status: String,
    /// Species label
    pub species: String,
    /// Name of the origin location
    pub origin: String,
    /// Name of the last known location
    pub location: String,
    /// Episode identifiers the character appears in
    pub episodes: Vec<String>,
    /// Timestamp the record was created upstream
    pub created: DateTime<Utc>,
}

/// Character gender as enumerated by the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Gender {
    #[serde(rename = "Male")]
    Male,
    #[serde(rename = "Female")]
    Female,
    #[serde(rename = "Genderless")]
    Genderless,
    #[serde(rename = "unknown")]
    #[serde(other)]
    #[default]
    Unknown,
}

/// A character paired with its current favorite flag.
///
/// Derived and ephemeral: recomputed on every projection, never persisted.
/// At the moment of publication `is_favorite` always equals
/// `favorites.contains(&character.id)` for the favorite set that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterEntry {
    /// The underlying character
    pub character: Character,
    /// Whether the character is currently favorited
    pub is_favorite: bool,
}

impl CharacterEntry {
    /// Pair a character with its favorite flag.
    pub const fn new(character: Character, is_favorite: bool) -> Self {
        Self { character, is_favorite }
    }

    /// Identifier of the wrapped character.
    pub fn id(&self) -> &str {
        &self.character.id
    }
}
