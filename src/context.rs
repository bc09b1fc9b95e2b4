//! Application Context
//!
//! The store handle plus app-wide signals, provided via the Leptos Context API.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use grocery_core::{GroceryItem, GroceryStore, ItemId, NewItem};

const NOTICE_TTL_MS: u32 = 2_500;

/// Severity of a transient notice.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-visible notification (toast).
#[derive(Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// App-wide handle to the grocery store and the notice channel.
///
/// Reads go through the version signal so every store mutation re-renders
/// dependents; writes borrow the store, which persists and publishes before
/// the borrow is released.
#[derive(Clone, Copy)]
pub struct GroceryContext {
    store: StoredValue<Rc<RefCell<GroceryStore>>, LocalStorage>,
    version: ReadSignal<u32>,
    notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
}

impl GroceryContext {
    pub fn new(
        store: Rc<RefCell<GroceryStore>>,
        version: ReadSignal<u32>,
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            store: StoredValue::new_local(store),
            version,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Current list title, reactive through the store version signal.
    pub fn title(&self) -> String {
        self.version.get();
        self.store.with_value(|store| store.borrow().title().to_string())
    }

    /// Snapshot of the current items, reactive through the store version signal.
    pub fn items(&self) -> Vec<GroceryItem> {
        self.version.get();
        self.store.with_value(|store| store.borrow().items().to_vec())
    }

    pub fn add_item(&self, draft: NewItem) {
        self.store.with_value(|store| store.borrow_mut().add_item(draft));
    }

    pub fn remove_item(&self, id: ItemId) {
        self.store.with_value(|store| store.borrow_mut().remove_item(id));
    }

    pub fn clear_items(&self) {
        self.store.with_value(|store| store.borrow_mut().clear_items());
    }

    pub fn update_title(&self, new_title: String) {
        self.store
            .with_value(|store| store.borrow_mut().update_title(new_title));
    }

    /// Currently displayed notice, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.notice.get()
    }

    /// Show a transient notice; it dismisses itself unless replaced first.
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let note = Notice {
            kind,
            text: text.into(),
        };
        self.set_notice.set(Some(note.clone()));

        let set_notice = self.set_notice;
        Timeout::new(NOTICE_TTL_MS, move || {
            set_notice.update(|current| {
                if current.as_ref() == Some(&note) {
                    *current = None;
                }
            });
        })
        .forget();
    }
}

/// Get the grocery context from Leptos context.
pub fn use_grocery() -> GroceryContext {
    expect_context::<GroceryContext>()
}
