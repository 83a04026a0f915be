use tasknote_core::{TaskItem, TaskListStore};
use uuid::Uuid;

fn values(store: &TaskListStore, query: &str) -> Vec<String> {
    store.search(query).map(|task| task.value.clone()).collect()
}

#[test]
fn add_appends_open_task_with_fresh_key() {
    let mut store = TaskListStore::new();
    let first = store.add("Buy milk").unwrap();
    let second = store.add("Walk dog").unwrap();

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
    assert_eq!(store.items()[0].value, "Buy milk");
    assert_eq!(store.items()[1].value, "Walk dog");
    assert!(store.items().iter().all(|task| !task.completed));
}

#[test]
fn add_ignores_blank_text() {
    let mut store = TaskListStore::new();
    store.add("Buy milk").unwrap();

    assert_eq!(store.add(""), None);
    assert_eq!(store.add(" \t\n "), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn update_changes_only_value_of_matching_task() {
    let mut store = TaskListStore::new();
    let milk = store.add("Buy milk").unwrap();
    let dog = store.add("Walk dog").unwrap();
    store.toggle_complete(dog).unwrap();
    let milk_before = store.get(milk).unwrap().clone();

    assert!(store.update(dog, "Walk the dog"));

    let updated = store.get(dog).unwrap();
    assert_eq!(updated.key, dog);
    assert_eq!(updated.value, "Walk the dog");
    assert!(updated.completed);
    assert_eq!(store.get(milk).unwrap(), &milk_before);
}

#[test]
fn update_unknown_key_is_noop() {
    let mut store = TaskListStore::new();
    store.add("Buy milk").unwrap();
    let before = store.clone();

    assert!(!store.update(Uuid::new_v4(), "ghost"));
    assert_eq!(store, before);
}

#[test]
fn remove_drops_exactly_one_and_ignores_unknown_keys() {
    let mut store = TaskListStore::new();
    let milk = store.add("Buy milk").unwrap();
    store.add("Walk dog").unwrap();

    assert!(!store.remove(Uuid::new_v4()));
    assert_eq!(store.len(), 2);

    assert!(store.remove(milk));
    assert_eq!(store.len(), 1);
    assert!(store.get(milk).is_none());
    assert!(!store.remove(milk));
}

#[test]
fn toggle_complete_is_its_own_inverse() {
    let mut store = TaskListStore::new();
    let key = store.add("Buy milk").unwrap();

    assert_eq!(store.toggle_complete(key), Some(true));
    assert_eq!(store.toggle_complete(key), Some(false));
    assert!(!store.get(key).unwrap().completed);
    assert_eq!(store.toggle_complete(Uuid::new_v4()), None);
}

#[test]
fn search_matches_case_insensitively_in_store_order() {
    let mut store = TaskListStore::new();
    store.add("Walk dog").unwrap();
    store.add("Buy milk").unwrap();
    store.add("walk to the PARK").unwrap();

    assert_eq!(values(&store, ""), vec!["Walk dog", "Buy milk", "walk to the PARK"]);
    assert_eq!(values(&store, "WALK"), vec!["Walk dog", "walk to the PARK"]);
    assert_eq!(values(&store, "park"), vec!["walk to the PARK"]);
    assert!(values(&store, "cat").is_empty());
}

#[test]
fn walkthrough_add_toggle_search() {
    let mut store = TaskListStore::new();
    let milk = store.add("Buy milk").unwrap();

    let dog = store.add("Walk dog").unwrap();
    assert_eq!(store.len(), 2);

    assert_eq!(store.toggle_complete(dog), Some(true));
    assert!(!store.get(milk).unwrap().completed);

    let hits: Vec<&TaskItem> = store.search("walk").collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, dog);
    assert!(hits[0].completed);
}
