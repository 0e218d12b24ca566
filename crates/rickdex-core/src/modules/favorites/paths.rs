//! Default location of the favorites file.

use std::path::PathBuf;

use rickdex_types::error::StorageError;

/// Platform data directory for the favorites file
/// (`<data_dir>/rickdex/favorites.json`).
pub fn default_favorites_path() -> Result<PathBuf, StorageError> {
    dirs::data_dir()
        .map(|dir| dir.join("rickdex").join("favorites.json"))
        .ok_or(StorageError::NoDataDir)
}
