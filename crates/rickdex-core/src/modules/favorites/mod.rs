//! Favorites: the pure overlay engine and the persisted identifier set.

mod overlay;
mod paths;
mod storage;

pub use overlay::{is_favorite, project, toggle};
pub use paths::default_favorites_path;
pub use storage::FavoriteStore;
