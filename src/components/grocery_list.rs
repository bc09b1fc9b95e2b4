//! Grocery List Component
//!
//! Renders the ordered item collection with per-item removal and a
//! guarded clear-all action.

use leptos::prelude::*;

use crate::components::ClearConfirmButton;
use crate::context::use_grocery;

#[component]
pub fn GroceryList() -> impl IntoView {
    let ctx = use_grocery();

    view! {
        <Show when=move || ctx.items().is_empty()>
            <div class="empty-state">
                <p>"No items yet. Add your first grocery item!"</p>
            </div>
        </Show>

        <Show when=move || !ctx.items().is_empty()>
            <div class="list-card">
                <div class="list-card-header">
                    <h2>{move || format!("Your Grocery List ({} items)", ctx.items().len())}</h2>
                    <ClearConfirmButton on_confirm=Callback::new(move |_| ctx.clear_items()) />
                </div>
                <ul class="item-rows">
                    <For
                        each=move || ctx.items()
                        key=|item| item.id
                        children=move |item| {
                            let id = item.id;
                            let amount = format!("{} {}", item.quantity_label(), item.unit);
                            view! {
                                <li class="item-row">
                                    <div class="item-main">
                                        <span class="item-name">{item.name.clone()}</span>
                                        <span class="item-amount">{amount}</span>
                                    </div>
                                    <button
                                        class="remove-btn"
                                        title="Remove item"
                                        on:click=move |_| ctx.remove_item(id)
                                    >
                                        "🗑"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}
