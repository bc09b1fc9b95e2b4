//! Grocery Form Component
//!
//! Entry form for new items. Validation lives here, at the presentation
//! boundary: the store accepts whatever this form submits.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use grocery_core::NewItem;

use crate::context::{use_grocery, NoticeKind};

/// Measurement units offered by the unit selector.
const UNITS: &[&str] = &["kg", "g", "l", "ml", "pcs", "dozen", "packet"];

const DEFAULT_UNIT: &str = "kg";

#[component]
pub fn GroceryForm() -> impl IntoView {
    let ctx = use_grocery();

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal(DEFAULT_UNIT.to_string());
    let (name_error, set_name_error) = signal(Option::<String>::None);
    let (quantity_error, set_quantity_error) = signal(Option::<String>::None);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_name_error.set(None);
        set_quantity_error.set(None);

        let name_value = name.get().trim().to_string();
        if name_value.is_empty() {
            set_name_error.set(Some("Please enter an item name".to_string()));
            return;
        }

        let quantity_value = match quantity.get().trim().parse::<f64>() {
            Ok(value) if value >= 1.0 => value,
            Ok(_) => {
                set_quantity_error.set(Some("Must be at least 1".to_string()));
                return;
            }
            Err(_) => {
                set_quantity_error.set(Some("Quantity is required".to_string()));
                return;
            }
        };

        ctx.add_item(NewItem {
            name: name_value,
            quantity: quantity_value,
            unit: unit.get(),
        });
        ctx.notify(NoticeKind::Success, "Item added!");

        set_name.set(String::new());
        set_quantity.set(String::new());
        set_unit.set(DEFAULT_UNIT.to_string());
    };

    view! {
        <form class="grocery-form" on:submit=add_item>
            <div class="field name-field">
                <label>"Item Name"</label>
                <input
                    type="text"
                    placeholder="e.g., Apples"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                {move || name_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>

            <div class="field quantity-field">
                <label>"Qty"</label>
                <input
                    type="number"
                    min="1"
                    placeholder="Enter quantity"
                    prop:value=move || quantity.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_quantity.set(input.value());
                    }
                />
                {move || quantity_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
            </div>

            <div class="field unit-field">
                <label>"Unit"</label>
                <select
                    prop:value=move || unit.get()
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_unit.set(select.value());
                    }
                >
                    {UNITS.iter().map(|u| view! { <option value=*u>{*u}</option> }).collect_view()}
                </select>
            </div>

            <button type="submit" class="add-btn">"+ Add"</button>
        </form>
    }
}
