//! Store Behavior Tests
//!
//! Exercises GroceryStore against an in-memory slot: mutation ordering,
//! persistence round trips, and recovery from malformed records.

use std::cell::Cell;
use std::rc::Rc;

use crate::{
    GroceryStore, ListStorage, MemoryStorage, NewItem, DEFAULT_TITLE, STORAGE_KEY,
};

fn draft(name: &str, quantity: f64, unit: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
    }
}

fn store_with_slot() -> (MemoryStorage, GroceryStore) {
    let storage = MemoryStorage::new();
    let store = GroceryStore::new(Box::new(storage.clone()));
    (storage, store)
}

/// Slot wrapper counting writes, for asserting when persistence happens.
#[derive(Clone)]
struct CountingStorage {
    inner: MemoryStorage,
    writes: Rc<Cell<usize>>,
}

impl CountingStorage {
    fn new() -> Self {
        Self {
            inner: MemoryStorage::new(),
            writes: Rc::new(Cell::new(0)),
        }
    }
}

impl ListStorage for CountingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.inner.set(key, value);
    }
}

#[test]
fn test_defaults_on_empty_slot() {
    let (_, store) = store_with_slot();
    assert_eq!(store.title(), DEFAULT_TITLE);
    assert!(store.items().is_empty());
}

#[test]
fn test_add_preserves_call_order_and_id_uniqueness() {
    let (_, mut store) = store_with_slot();
    for name in ["A", "B", "C", "D"] {
        store.add_item(draft(name, 1.0, "pcs"));
    }

    let items = store.items();
    assert_eq!(items.len(), 4);
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn test_remove_absent_id_is_a_noop() {
    let (_, mut store) = store_with_slot();
    store.add_item(draft("A", 1.0, "kg"));
    store.add_item(draft("B", 2.0, "kg"));
    let before = store.items().to_vec();

    store.remove_item(uuid::Uuid::new_v4());

    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn test_remove_present_id_keeps_relative_order() {
    let (_, mut store) = store_with_slot();
    for name in ["A", "B", "C"] {
        store.add_item(draft(name, 1.0, "kg"));
    }
    let middle = store.items()[1].id;

    store.remove_item(middle);

    let names: Vec<&str> = store.items().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
}

#[test]
fn test_clear_empties_any_size() {
    let (_, mut store) = store_with_slot();
    for n in 0..7 {
        store.add_item(draft(&format!("Item {n}"), 1.0, "pcs"));
    }
    store.clear_items();
    assert!(store.items().is_empty());

    // Clearing again stays empty.
    store.clear_items();
    assert!(store.items().is_empty());
}

#[test]
fn test_round_trip_through_the_slot() {
    let (storage, mut store) = store_with_slot();
    store.add_item(draft("Apples", 3.0, "kg"));
    store.add_item(draft("Milk", 1.5, "l"));
    store.update_title("Weekly Run");
    let items = store.items().to_vec();
    drop(store);

    let restored = GroceryStore::new(Box::new(storage));
    assert_eq!(restored.title(), "Weekly Run");
    assert_eq!(restored.items(), items.as_slice());
}

#[test]
fn test_malformed_records_restore_to_defaults() {
    for raw in ["{not json", r#"{"items": "not-an-array"}"#, r#"{"title": 42}"#, "[]"] {
        let storage = MemoryStorage::new();
        storage.set(STORAGE_KEY, raw);

        let store = GroceryStore::new(Box::new(storage));
        assert_eq!(store.title(), DEFAULT_TITLE, "record: {raw}");
        assert!(store.items().is_empty(), "record: {raw}");
    }
}

#[test]
fn test_partial_record_applies_present_fields() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, r#"{"title": "Saved"}"#);

    let store = GroceryStore::new(Box::new(storage.clone()));
    assert_eq!(store.title(), "Saved");
    assert!(store.items().is_empty());
}

#[test]
fn test_construction_writes_a_complete_record() {
    let storage = MemoryStorage::new();
    let _store = GroceryStore::new(Box::new(storage.clone()));

    let raw = storage.get(STORAGE_KEY).expect("slot written on init");
    let record: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(record["title"], DEFAULT_TITLE);
    assert!(record["items"].as_array().unwrap().is_empty());
}

#[test]
fn test_missed_remove_does_not_write() {
    let storage = CountingStorage::new();
    let writes = storage.writes.clone();
    let mut store = GroceryStore::new(Box::new(storage));
    store.add_item(draft("A", 1.0, "kg"));
    let after_add = writes.get();

    store.remove_item(uuid::Uuid::new_v4());

    assert_eq!(writes.get(), after_add);
}

#[test]
fn test_update_title_accepts_empty_string() {
    let (_, mut store) = store_with_slot();
    store.update_title("");
    assert_eq!(store.title(), "");
}

#[test]
fn test_listeners_fire_in_registration_order() {
    let (_, mut store) = store_with_slot();
    let calls = Rc::new(std::cell::RefCell::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let calls = calls.clone();
        store.subscribe(Box::new(move || calls.borrow_mut().push(tag)));
    }
    store.add_item(draft("A", 1.0, "kg"));

    assert_eq!(*calls.borrow(), ["first", "second", "third"]);
}

#[test]
fn test_scenario_add_retitle_remove() {
    let (_, mut store) = store_with_slot();

    store.add_item(draft("Apples", 3.0, "kg"));
    assert_eq!(store.items().len(), 1);
    let apples = store.items()[0].clone();
    assert_eq!(apples.name, "Apples");
    assert_eq!(apples.quantity, 3.0);
    assert_eq!(apples.unit, "kg");

    store.update_title("Weekly Run");
    assert_eq!(store.title(), "Weekly Run");

    store.remove_item(apples.id);
    assert!(store.items().is_empty());
}

#[test]
fn test_scenario_remove_first_of_two() {
    let (_, mut store) = store_with_slot();
    store.add_item(draft("A", 1.0, "kg"));
    store.add_item(draft("B", 1.0, "kg"));

    let first = store.items()[0].id;
    store.remove_item(first);

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].name, "B");
}
