//! Favorites persistence errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or saving the favorites file.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum StorageError {
    /// Filesystem read or write failed
    #[error("Storage I/O error: {0}")]
    Io(String),

    /// The favorites file exists but could not be parsed
    #[error("Corrupt favorites file: {0}")]
    Corrupt(String),

    /// No usable data directory could be resolved on this platform
    #[error("No data directory available")]
    NoDataDir,
}
