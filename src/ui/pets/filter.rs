//! Pure list derivation.
//!
//! The displayed rows are a function of (store snapshot, search text) and
//! nothing else; the screen never holds records the snapshot doesn't.

use crate::store::Pet;

/// Terms applied when the search box is empty.
pub const DEFAULT_SEARCH_TERMS: &[&str] = &["dog", "cat"];

/// The query actually matched: the raw search text, or the default terms
/// joined into one phrase when the box is empty. The joined phrase is one
/// literal substring, not an OR over the terms.
pub fn effective_query(search: &str) -> String {
    if search.is_empty() {
        DEFAULT_SEARCH_TERMS.join(" ")
    } else {
        search.to_string()
    }
}

/// Case-insensitive substring filter over pet names, snapshot order kept.
pub fn filter_pets<'a>(pets: &'a [Pet], search: &str) -> Vec<&'a Pet> {
    let needle = effective_query(search).to_lowercase();
    pets.iter()
        .filter(|pet| pet.name.to_lowercase().contains(&needle))
        .collect()
}
