//! Persistence Slot
//!
//! Key/value string storage consumed by the store. The slot interface
//! stores raw strings; serialization stays the store's responsibility,
//! keeping the slot contract free of any encoding dependency.
//!
//! Implementations: browser sessionStorage (UI crate), in-memory map (below).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Session-scoped key/value slot.
pub trait ListStorage {
    /// Read the raw string stored under `key`. Returns None if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory slot with shared-handle semantics: clones see the same data,
/// so a second store can restore what the first one wrote.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_map() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set("k", "v");
        assert_eq!(handle.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "first");
        storage.set("k", "second");
        assert_eq!(storage.get("k").as_deref(), Some("second"));
    }

    #[test]
    fn test_missing_key_is_none() {
        assert!(MemoryStorage::new().get("absent").is_none());
    }
}
