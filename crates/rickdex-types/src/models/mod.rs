//! Domain models for Rickdex.

mod character;
mod location;
mod page;

pub use character::{Character, CharacterEntry, Gender};
pub use location::Location;
pub use page::{Cursor, Page};
