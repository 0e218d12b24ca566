//! The favorites overlay engine.
//!
//! Stateless by construction: every function takes the character collection
//! and the favorite set explicitly and returns a new value. Favorites live
//! only in the caller's set, character identity only in the caller's
//! collection, so the output can never drift from its inputs — re-invoke
//! after either input changes and the published flags are exact.

use std::collections::HashSet;

use rickdex_types::{Character, CharacterEntry};

/// Annotate each character with its favorite flag, in input order.
///
/// No deduplication happens here (that is the repository's concern); the
/// result always has exactly one entry per input character.
pub fn project(characters: &[Character], favorites: &HashSet<String>) -> Vec<CharacterEntry> {
    characters
        .iter()
        .map(|c| CharacterEntry::new(c.clone(), favorites.contains(&c.id)))
        .collect()
}

/// Return a new set with `id` added if absent, removed if present.
///
/// Toggling an identifier that is not in the currently loaded collection is
/// legal: the favorite simply stays dormant until that character reappears
/// in a projection input.
pub fn toggle(favorites: &HashSet<String>, id: &str) -> HashSet<String> {
    let mut next = favorites.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// Pure membership query.
pub fn is_favorite(favorites: &HashSet<String>, id: &str) -> bool {
    favorites.contains(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rickdex_types::Gender;

    fn character(id: &str, name: &str) -> Character {
        Character {
            id: id.to_string(),
            name: name.to_string(),
            image: String::new(),
            gender: Gender::Unknown,
            status: String::new(),
            species: String::new(),
            origin: String::new(),
            location: String::new(),
            episodes: Vec::new(),
            created: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn favorites(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn projection_preserves_length_and_order() {
        let characters = vec![
            character("1", "Rick Sanchez"),
            character("2", "Morty Smith"),
            character("2", "Morty Smith"),
        ];
        let favs = favorites(&["2"]);

        let entries = project(&characters, &favs);

        assert_eq!(entries.len(), characters.len());
        for (entry, original) in entries.iter().zip(&characters) {
            assert_eq!(entry.character, *original);
            assert_eq!(entry.is_favorite, favs.contains(&original.id));
        }
        // Duplicates are kept as-is.
        assert_eq!(entries[1], entries[2]);
    }

    #[test]
    fn projection_flags_follow_the_set() {
        let characters = vec![character("1", "Rick Sanchez"), character("2", "Morty Smith")];

        let entries = project(&characters, &HashSet::new());
        assert!(entries.iter().all(|e| !e.is_favorite));

        let favs = toggle(&HashSet::new(), "2");
        let entries = project(&characters, &favs);
        assert!(!entries[0].is_favorite);
        assert!(entries[1].is_favorite);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let empty = HashSet::new();

        let once = toggle(&empty, "42");
        assert!(is_favorite(&once, "42"));

        let twice = toggle(&once, "42");
        assert!(!is_favorite(&twice, "42"));
        assert_eq!(twice, empty);
    }

    #[test]
    fn toggle_is_an_involution() {
        let favs = favorites(&["1", "7", "99"]);

        for id in ["1", "7", "99", "absent"] {
            assert_eq!(toggle(&toggle(&favs, id), id), favs);
        }
    }

    #[test]
    fn toggle_does_not_mutate_its_input() {
        let favs = favorites(&["1"]);
        let _ = toggle(&favs, "1");
        let _ = toggle(&favs, "2");
        assert_eq!(favs, favorites(&["1"]));
    }

    #[test]
    fn toggling_an_unloaded_id_is_legal_and_invisible() {
        let characters = vec![character("1", "Rick Sanchez")];

        let favs = toggle(&HashSet::new(), "99");
        assert!(is_favorite(&favs, "99"));

        // Projection is unaffected until character 99 shows up in the input.
        let entries = project(&characters, &favs);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_favorite);

        let characters = vec![character("1", "Rick Sanchez"), character("99", "Mr. Poopybutthole")];
        let entries = project(&characters, &favs);
        assert!(entries[1].is_favorite);
    }
}
