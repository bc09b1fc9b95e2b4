//! Header Component
//!
//! App heading plus the list title input, bound both ways to the store so
//! a restored session title shows up and edits persist immediately.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_grocery;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_grocery();

    let edit_title = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        ctx.update_title(input.value());
    };

    view! {
        <header class="header">
            <h1>"🛒 Grocery List"</h1>
            <p class="tagline">"Plan your shopping with ease"</p>
            <input
                class="title-input"
                type="text"
                placeholder="Enter your grocery list title..."
                prop:value=move || ctx.title()
                on:input=edit_title
            />
        </header>
    }
}
