//! Grocery List Store
//!
//! Single source of truth for the list title and item collection, with
//! bidirectional sync against a session-scoped persistence slot.

use serde::{Deserialize, Serialize};

use crate::item::{GroceryItem, ItemId, NewItem};
use crate::storage::ListStorage;

/// Fixed key of the persisted record inside the slot.
pub const STORAGE_KEY: &str = "groceryData";

/// Title used until the user sets one.
pub const DEFAULT_TITLE: &str = "मेरी ग्रोसरी लिस्ट";

/// Subscriber callback, invoked after every state change.
pub type Listener = Box<dyn Fn()>;

/// The full `{title, items}` record as stored in the slot.
///
/// Fields are independent on the way in: a record missing one of them keeps
/// that field's default. A record that fails to parse as a whole is ignored.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedList {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    items: Option<Vec<GroceryItem>>,
}

/// Canonical list state: title plus ordered item collection.
///
/// All operations are synchronous and apply in invocation order; the store
/// is single-threaded and never reorders or batches mutations. Subscribers
/// run in registration order after each change. Mutating the store from
/// within a subscriber callback is unsupported.
pub struct GroceryStore {
    title: String,
    items: Vec<GroceryItem>,
    storage: Box<dyn ListStorage>,
    listeners: Vec<Listener>,
}

impl GroceryStore {
    /// Construct the store over a persistence slot.
    ///
    /// Restores any well-formed record found under [`STORAGE_KEY`]; a
    /// missing or malformed record leaves the defaults in place. Never
    /// fails. Once initialized, the current state is written back so the
    /// slot always holds a complete record.
    pub fn new(storage: Box<dyn ListStorage>) -> Self {
        let mut store = Self {
            title: DEFAULT_TITLE.to_string(),
            items: Vec::new(),
            storage,
            listeners: Vec::new(),
        };
        store.restore();
        store.persist();
        store
    }

    /// Current list title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current items, in insertion order.
    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    /// Register a subscriber. Callbacks run in registration order.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Append a new item to the end of the collection.
    ///
    /// The payload is taken as-is; validating name and quantity is the
    /// presentation boundary's job.
    pub fn add_item(&mut self, draft: NewItem) {
        self.items.push(GroceryItem::new(draft));
        self.persist();
        self.notify();
    }

    /// Remove the item with the given id. No-op if absent.
    pub fn remove_item(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            self.persist();
            self.notify();
        }
    }

    /// Remove all items. Idempotent in effect; always writes the slot.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.persist();
        self.notify();
    }

    /// Replace the title unconditionally. Empty string is allowed.
    pub fn update_title(&mut self, new_title: impl Into<String>) {
        self.title = new_title.into();
        self.persist();
        self.notify();
    }

    fn restore(&mut self) {
        let Some(raw) = self.storage.get(STORAGE_KEY) else {
            return;
        };
        match serde_json::from_str::<PersistedList>(&raw) {
            Ok(record) => {
                if let Some(title) = record.title {
                    self.title = title;
                }
                if let Some(items) = record.items {
                    self.items = items;
                }
            }
            Err(err) => log::warn!("ignoring malformed list record: {err}"),
        }
    }

    fn persist(&self) {
        let record = PersistedList {
            title: Some(self.title.clone()),
            items: Some(self.items.clone()),
        };
        match serde_json::to_string(&record) {
            Ok(raw) => self.storage.set(STORAGE_KEY, &raw),
            Err(err) => log::warn!("failed to serialize list record: {err}"),
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}
