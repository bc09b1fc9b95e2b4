//! Notice Toast Component
//!
//! Shows the current transient notice; the context auto-dismisses it.

use leptos::prelude::*;

use crate::context::{use_grocery, NoticeKind};

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_grocery();

    view! {
        {move || ctx.notice().map(|note| {
            let class = match note.kind {
                NoticeKind::Success => "toast success",
                NoticeKind::Error => "toast error",
            };
            view! { <div class=class>{note.text}</div> }
        })}
    }
}
