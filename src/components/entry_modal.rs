//! Entry Modal Component
//!
//! Detail overlay for a single entry. Closes on the × button, a click on
//! the backdrop itself, or Escape (bound in `App`).

use leptos::prelude::*;

use crate::context::AppContext;
use crate::listing::EntryDetail;

#[component]
pub fn EntryModal() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let detail = move || {
        ctx.overlay()
            .entry()
            .map(|entry| EntryDetail::new(entry, ctx.config.locale))
    };

    view! {
        <div
            id="diaryModal"
            class=move || if ctx.overlay().is_visible() { "modal active" } else { "modal" }
            on:click=move |ev: web_sys::MouseEvent| {
                let on_backdrop = ev.target().is_some() && ev.target() == ev.current_target();
                ctx.handle_overlay_click(on_backdrop);
            }
        >
            <div class="modal-content">
                <button id="closeModal" class="close-btn" title="닫기" on:click=move |_| ctx.close_overlay()>
                    "×"
                </button>
                <h2 id="modalTitle">{move || detail().map(|d| d.title).unwrap_or_default()}</h2>
                <p id="modalDate" class="modal-date">{move || detail().map(|d| d.date_label).unwrap_or_default()}</p>
                <div id="modalContent" class="modal-body">{move || detail().map(|d| d.content).unwrap_or_default()}</div>
            </div>
        </div>
    }
}
