//! Generate PDF Button Component
//!
//! Renders the current list into a PDF and offers it as a download named
//! after the list title.

use leptos::prelude::*;

use grocery_core::{pdf_file_name, render_list_pdf, GroceryItem};

use crate::context::{use_grocery, NoticeKind};
use crate::download;

#[component]
pub fn GeneratePdfButton() -> impl IntoView {
    let ctx = use_grocery();

    let generate = move |_| {
        // The store is permissive, so re-check entries before rendering.
        let valid: Vec<GroceryItem> = ctx
            .items()
            .into_iter()
            .filter(|item| !item.name.trim().is_empty() && item.quantity > 0.0)
            .collect();
        if valid.is_empty() {
            ctx.notify(
                NoticeKind::Error,
                "Please add at least one valid item to generate a PDF.",
            );
            return;
        }

        let title = ctx.title();
        let result = render_list_pdf(&title, &valid)
            .map_err(|err| err.to_string())
            .and_then(|bytes| download::save_pdf(&bytes, &pdf_file_name(&title)));
        match result {
            Ok(()) => ctx.notify(NoticeKind::Success, "PDF generated successfully! 📄"),
            Err(err) => {
                web_sys::console::error_1(&format!("[Pdf] generation failed: {err}").into());
                ctx.notify(NoticeKind::Error, "Could not generate the PDF.");
            }
        }
    };

    view! {
        <div class="pdf-button-wrap">
            <button
                class="pdf-btn"
                prop:disabled=move || ctx.items().is_empty()
                on:click=generate
            >
                "⬇ Generate PDF"
            </button>
        </div>
    }
}
