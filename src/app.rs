//! Grocery List App
//!
//! Root component: owns the store instance for the session and provides
//! the app context to all children.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use grocery_core::GroceryStore;

use crate::components::{GeneratePdfButton, GroceryForm, GroceryList, Header, NoticeToast};
use crate::context::{GroceryContext, Notice};
use crate::storage::SessionSlot;

#[component]
pub fn App() -> impl IntoView {
    // The session's single store, restored from sessionStorage if present.
    let store = Rc::new(RefCell::new(GroceryStore::new(Box::new(SessionSlot::new()))));

    // Bridge the store's subscriber mechanism into a version signal so
    // dependents re-render on every mutation.
    let (version, set_version) = signal(0u32);
    store
        .borrow_mut()
        .subscribe(Box::new(move || set_version.update(|v| *v += 1)));

    let (notice, set_notice) = signal(Option::<Notice>::None);

    provide_context(GroceryContext::new(store, version, (notice, set_notice)));

    view! {
        <div class="app-shell">
            <Header />

            <main class="list-panel">
                <GroceryForm />
                <GroceryList />
            </main>

            <GeneratePdfButton />
            <NoticeToast />
        </div>
    }
}
