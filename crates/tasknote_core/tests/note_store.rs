use tasknote_core::NoteListStore;
use uuid::Uuid;

#[test]
fn add_update_remove_lifecycle() {
    let mut store = NoteListStore::new();
    assert!(store.is_empty());

    let key = store.add("Groceries: eggs").unwrap();
    assert_eq!(store.len(), 1);

    assert!(store.update(key, "Groceries: eggs, flour"));
    assert_eq!(store.get(key).unwrap().value, "Groceries: eggs, flour");

    assert!(store.remove(key));
    assert!(store.is_empty());
}

#[test]
fn blank_notes_are_rejected() {
    let mut store = NoteListStore::new();
    assert_eq!(store.add("   "), None);
    assert!(store.is_empty());
}

#[test]
fn update_and_remove_ignore_unknown_keys() {
    let mut store = NoteListStore::new();
    let key = store.add("keep me").unwrap();
    let stranger = Uuid::new_v4();

    assert!(!store.update(stranger, "nope"));
    assert!(!store.remove(stranger));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(key).unwrap().value, "keep me");
}

#[test]
fn update_may_blank_a_note() {
    let mut store = NoteListStore::new();
    let key = store.add("draft").unwrap();

    assert!(store.update(key, ""));
    assert_eq!(store.get(key).unwrap().value, "");
}

#[test]
fn search_returns_matching_notes_in_order() {
    let mut store = NoteListStore::new();
    store.add("Meeting notes").unwrap();
    store.add("Recipe").unwrap();
    store.add("NOTES for trip").unwrap();

    let all: Vec<&str> = store.search("").map(|note| note.value.as_str()).collect();
    assert_eq!(all, vec!["Meeting notes", "Recipe", "NOTES for trip"]);

    let hits: Vec<&str> = store.search("Notes").map(|note| note.value.as_str()).collect();
    assert_eq!(hits, vec!["Meeting notes", "NOTES for trip"]);
}
