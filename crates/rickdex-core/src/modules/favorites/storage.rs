//! Favorites file storage operations.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use rickdex_types::error::StorageError;

use super::paths::default_favorites_path;

/// Durable store for the set of favorited character identifiers.
///
/// The on-disk format is a sorted JSON array of id strings; set semantics
/// live in memory. Loaded once at startup, saved after every toggle.
#[derive(Debug, Clone)]
pub struct FavoriteStore {
    path: PathBuf,
}

impl FavoriteStore {
    /// Store backed by the given file.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the platform default location.
    pub fn at_default_path() -> Result<Self, StorageError> {
        Ok(Self::open(default_favorites_path()?))
    }

    /// Load the persisted set. A missing file is an empty set.
    pub fn load(&self) -> Result<HashSet<String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| StorageError::Io(e.to_string()))?;

        let ids: Vec<String> =
            serde_json::from_str(&content).map_err(|e| StorageError::Corrupt(e.to_string()))?;

        Ok(ids.into_iter().collect())
    }

    /// Persist the set atomically (write temp file, then rename).
    pub fn save(&self, favorites: &HashSet<String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }

        // Sorted so the file is deterministic across saves of the same set.
        let mut ids: Vec<&String> = favorites.iter().collect();
        ids.sort();

        let content = serde_json::to_string_pretty(&ids)
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");

        if let Err(e) = fs::write(&temp_path, content) {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::Io(e.to_string()));
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::Io(e.to_string())
        })?;

        tracing::debug!("Saved {} favorites to {}", favorites.len(), self.path.display());
        Ok(())
    }
}
