use pawbook::store::{MemoryStore, NewPet, Pet, PetStore};
use pawbook::ui::pets::{effective_query, filter_pets, DEFAULT_SEARCH_TERMS};

fn draft(name: &str) -> NewPet {
    NewPet {
        name: name.to_string(),
        kind: "Dog".to_string(),
        age: 1,
    }
}

fn snapshot_of(names: &[&str]) -> Vec<Pet> {
    MemoryStore::with_pets(names.iter().map(|name| draft(name))).snapshot()
}

// -- effective query ----------------------------------------------------------

#[test]
fn empty_search_falls_back_to_default_terms() {
    assert_eq!(effective_query(""), "dog cat");
    assert_eq!(DEFAULT_SEARCH_TERMS.join(" "), "dog cat");
}

#[test]
fn non_empty_search_is_used_verbatim() {
    assert_eq!(effective_query("fi"), "fi");
    assert_eq!(effective_query("  "), "  ");
}

// -- filtering ----------------------------------------------------------------

#[test]
fn displayed_is_subset_in_snapshot_order() {
    let pets = snapshot_of(&["Fido", "Figaro", "Whiskers", "Fifi"]);
    let displayed = filter_pets(&pets, "fi");
    let names: Vec<&str> = displayed.iter().map(|pet| pet.name.as_str()).collect();
    assert_eq!(names, vec!["Fido", "Figaro", "Fifi"]);
    for pet in displayed {
        assert!(pets.contains(pet));
    }
}

#[test]
fn match_is_case_insensitive() {
    let pets = snapshot_of(&["FIDO", "whiskers"]);
    assert_eq!(filter_pets(&pets, "fido").len(), 1);
    assert_eq!(filter_pets(&pets, "WHISK").len(), 1);
}

// The default query is the two terms joined into one literal substring, so
// typical names match neither term set.
#[test]
fn empty_search_displays_nothing_for_ordinary_names() {
    let pets = snapshot_of(&["Fido", "Whiskers"]);
    assert!(filter_pets(&pets, "").is_empty());
}

#[test]
fn empty_search_matches_the_joined_phrase_only() {
    let pets = snapshot_of(&["my dog cathy", "dog", "cat"]);
    let displayed = filter_pets(&pets, "");
    let names: Vec<&str> = displayed.iter().map(|pet| pet.name.as_str()).collect();
    assert_eq!(names, vec!["my dog cathy"]);
}

#[test]
fn fido_whiskers_scenario() {
    let pets = snapshot_of(&["Fido", "Whiskers"]);
    assert!(filter_pets(&pets, "").is_empty());

    let displayed = filter_pets(&pets, "fi");
    assert_eq!(displayed.len(), 1);
    assert_eq!(displayed[0].name, "Fido");
}

#[test]
fn no_match_yields_empty_displayed_set() {
    let pets = snapshot_of(&["Fido"]);
    assert!(filter_pets(&pets, "zzz").is_empty());
}

#[test]
fn filter_over_empty_snapshot_is_empty() {
    assert!(filter_pets(&[], "fi").is_empty());
}
