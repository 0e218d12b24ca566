//! Typed error definitions for Rickdex.
//!
//! This module provides a structured error hierarchy with specific error types
//! for different domains. All errors are designed to be:
//!
//! - **Serializable** for persistence and IPC via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod network;
mod storage;

pub use network::NetworkError;
pub use storage::StorageError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
///
/// Use this when you need a single error type that can represent
/// any Rickdex error.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a network or decoding error from the repository facade
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Wraps a favorites persistence error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;
