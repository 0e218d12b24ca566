//! # Rickdex Types
//!
//! Core types, models, and error definitions for Rickdex.
//!
//! This crate provides the foundational type system for the Rickdex ecosystem:
//!
//! - **`error`** - Typed error hierarchy for network and storage failures
//! - **`models`** - Domain models (Character, Location, CharacterEntry, Page)
//! - **`repository`** - The `CharacterRepository` contract implemented by the
//!   HTTP client and by test doubles
//!
//! ## Architecture Role
//!
//! `rickdex-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          rickdex-types (this crate)
//!                  │
//!         ┌────────┴────────┐
//!         ▼                 ▼
//!   rickdex-client     rickdex-core
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for persistence and IPC
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;
pub mod repository;

// Re-export error types for convenience
pub use error::{NetworkError, Result, StorageError, TypedError};

// Re-export core model types
pub use models::{Character, CharacterEntry, Cursor, Gender, Location, Page};

pub use repository::CharacterRepository;
