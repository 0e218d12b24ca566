//! Client-side character search.

use rickdex_types::Character;

/// Return the characters whose name contains `query` as a case-insensitive
/// substring, preserving input order.
///
/// A blank query (empty or all-whitespace) is the identity: every character
/// comes back in its original position. The input is never mutated.
pub fn filter(characters: &[Character], query: &str) -> Vec<Character> {
    if query.trim().is_empty() {
        return characters.to_vec();
    }

    let needle = query.to_lowercase();
    characters
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
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

    fn roster() -> Vec<Character> {
        vec![
            character("1", "Rick Sanchez"),
            character("2", "Morty Smith"),
            character("3", "Summer Smith"),
            character("4", "Birdperson"),
        ]
    }

    #[test]
    fn blank_query_is_identity() {
        let characters = roster();
        assert_eq!(filter(&characters, ""), characters);
        assert_eq!(filter(&characters, "   "), characters);
        assert_eq!(filter(&characters, "\t\n"), characters);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let characters = roster();

        let hits = filter(&characters, "rick");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let hits = filter(&characters, "SMITH");
        let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn result_is_an_ordered_subsequence() {
        let characters = roster();
        let hits = filter(&characters, "s");

        let mut last_index = 0;
        for hit in &hits {
            let index = characters.iter().position(|c| c.id == hit.id).unwrap();
            assert!(index >= last_index, "order not preserved");
            last_index = index;
        }

        // Everything excluded really does not match.
        for c in &characters {
            let matched = hits.iter().any(|h| h.id == c.id);
            assert_eq!(matched, c.name.to_lowercase().contains('s'));
        }
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter(&roster(), "ZZZ").is_empty());
    }

    #[test]
    fn empty_input_yields_empty() {
        assert!(filter(&[], "rick").is_empty());
        assert!(filter(&[], "").is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let characters = roster();
        let before = characters.clone();
        let _ = filter(&characters, "morty");
        assert_eq!(characters, before);
    }
}
