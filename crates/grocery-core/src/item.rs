//! Grocery Item Entity
//!
//! A single list entry: display name, amount, and measurement unit.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a list entry, generated at creation and never reused.
pub type ItemId = Uuid;

/// A grocery list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Unique identifier, stable for the item's lifetime
    pub id: ItemId,
    /// Display name (trimmed by the caller before submission)
    pub name: String,
    /// Amount, >= 1 per the entry contract
    pub quantity: f64,
    /// Measurement unit, one of the set offered by the presentation layer
    pub unit: String,
}

/// Payload for adding an entry: an item without its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl GroceryItem {
    /// Create a new item from a draft payload with a fresh id
    pub fn new(draft: NewItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            quantity: draft.quantity,
            unit: draft.unit,
        }
    }

    /// Quantity for display, without a trailing ".0" on whole amounts
    pub fn quantity_label(&self) -> String {
        if self.quantity.fract() == 0.0 {
            format!("{}", self.quantity as i64)
        } else {
            format!("{}", self.quantity)
        }
    }
}
