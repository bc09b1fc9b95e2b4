//! Browser Session Slot
//!
//! `sessionStorage` behind the core's storage trait: state survives page
//! reloads within one tab's session, not a full browser restart.

use grocery_core::ListStorage;

/// Session-scoped persistence slot backed by `window.sessionStorage`.
#[derive(Clone, Copy, Default)]
pub struct SessionSlot;

impl SessionSlot {
    pub fn new() -> Self {
        Self
    }
}

fn backing() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.session_storage().ok().flatten())
}

impl ListStorage for SessionSlot {
    fn get(&self, key: &str) -> Option<String> {
        backing()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = backing() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("[Storage] write failed for key {key}").into());
        }
    }
}
