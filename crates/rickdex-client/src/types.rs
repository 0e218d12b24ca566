use chrono::{DateTime, Utc};
use rickdex_types::{Character, Gender, Location, NetworkError};
use serde::Deserialize;

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://rickandmortyapi.com/api".to_string(),
            timeout_secs: 30,
        }
    }
}

/// List envelope shared by the character and location endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Paged<T> {
    pub info: Option<PageInfoDto>,
    pub results: Option<Vec<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PageInfoDto {
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CharacterDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub species: Option<String>,
    pub gender: Option<Gender>,
    pub origin: Option<NamedRefDto>,
    pub location: Option<NamedRefDto>,
    pub image: Option<String>,
    pub episode: Option<Vec<String>>,
    pub created: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NamedRefDto {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LocationDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub residents: Option<Vec<String>>,
}

/// The by-ids endpoint returns a bare object for a single id and an array
/// for several.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Extract the trailing path segment of an API resource URL.
///
/// Resident and episode lists arrive as full URLs
/// (`https://rickandmortyapi.com/api/character/38`); the domain models keep
/// only the identifier.
pub(crate) fn trailing_id(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
        .to_string()
}

impl TryFrom<CharacterDto> for Character {
    type Error = NetworkError;

    fn try_from(dto: CharacterDto) -> Result<Self, Self::Error> {
        let id = dto
            .id
            .ok_or_else(|| NetworkError::Decode("character record missing id".to_string()))?;

        // Cosmetic fields default; a record that cannot name its timestamp
        // still renders, so a parse failure degrades to the epoch.
        let created = dto
            .created
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        Ok(Self {
            id: id.to_string(),
            name: dto.name.unwrap_or_default(),
            image: dto.image.unwrap_or_default(),
            gender: dto.gender.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            species: dto.species.unwrap_or_default(),
            origin: dto.origin.and_then(|o| o.name).unwrap_or_default(),
            location: dto.location.and_then(|l| l.name).unwrap_or_default(),
            episodes: dto
                .episode
                .unwrap_or_default()
                .iter()
                .map(|url| trailing_id(url))
                .collect(),
            created,
        })
    }
}

impl TryFrom<LocationDto> for Location {
    type Error = NetworkError;

    fn try_from(dto: LocationDto) -> Result<Self, Self::Error> {
        let id = dto
            .id
            .ok_or_else(|| NetworkError::Decode("location record missing id".to_string()))?;

        Ok(Self {
            id: id.to_string(),
            name: dto.name.unwrap_or_default(),
            residents: dto
                .residents
                .unwrap_or_default()
                .iter()
                .map(|url| trailing_id(url))
                .collect(),
        })
    }
}
