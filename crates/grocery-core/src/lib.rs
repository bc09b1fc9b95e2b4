//! Session-scoped grocery list state container.
//!
//! [`GroceryStore`] owns the canonical list title and item collection,
//! restores itself from a key/value persistence slot on construction,
//! writes the full record back after every mutation, and notifies
//! registered subscribers so a presentation layer can re-render.
//!
//! The crate has no browser dependency: the slot is the [`ListStorage`]
//! trait, implemented by the host (session storage in the UI crate,
//! [`MemoryStorage`] in tests).

mod error;
mod item;
mod pdf;
mod storage;
mod store;

pub use error::{GroceryError, GroceryResult};
pub use item::{GroceryItem, ItemId, NewItem};
pub use pdf::{pdf_file_name, render_list_pdf};
pub use storage::{ListStorage, MemoryStorage};
pub use store::{GroceryStore, Listener, DEFAULT_TITLE, STORAGE_KEY};

#[cfg(test)]
mod tests;
