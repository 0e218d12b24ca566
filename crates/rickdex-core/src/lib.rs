//! # Rickdex Core
//!
//! Core logic for the Rickdex character browser.
//!
//! ```text
//! rickdex-core/src/modules/
//! ├── search.rs        # Pure case-insensitive name filter
//! ├── favorites/       # Overlay engine (project/toggle) + JSON persistence
//! ├── locations.rs     # Cursor-driven location pager
//! └── session.rs       # View session: combines the above into DisplayState
//! ```
//!
//! The filter and overlay functions are pure: they take the character
//! collection and the favorite set explicitly, never block, and never touch
//! shared state, so they are safe to call from any thread or task. I/O lives
//! only at the edges — the repository facade (`rickdex-client` or a test
//! double) and the favorites file.

// Test-only lints: allow panic!, unwrap, etc. in test code
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub mod modules;

// Re-export commonly used types
pub use modules::favorites::{is_favorite, project, toggle, FavoriteStore};
pub use modules::locations::LocationPager;
pub use modules::search::filter;
pub use modules::session::{DisplayState, HomeSession};
