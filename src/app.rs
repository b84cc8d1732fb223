//! Diary Frontend App
//!
//! Builds the application context, applies saved preferences and lays out
//! the page: header, form, list and the detail overlay.

use kv_storage::BrowserStorage;
use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use rolling_logger::RollingBuffer;

use crate::components::{DiaryForm, DiaryList, EntryModal, Header};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::dom;
use crate::state::UiState;

#[component]
pub fn App(config: AppConfig, logs: RollingBuffer) -> impl IntoView {
    let ctx = AppContext::new(config, BrowserStorage, Store::new(UiState::default()));

    // Provide context to all children
    provide_context(ctx);
    provide_context(logs);

    // Initial load
    ctx.load_preferences();
    ctx.reload();

    // Mirror preferences onto <body> whenever they change
    Effect::new(move |_| {
        let prefs = ctx.preferences();
        if let Some(classes) = dom::body_class_list() {
            prefs.apply(&classes);
        }
    });

    // Escape closes the overlay
    let _ = window_event_listener(ev::keydown, move |ev| ctx.handle_key(&ev.key()));

    view! {
        <Header />
        <main class="container">
            <DiaryForm />
            <DiaryList />
        </main>
        <EntryModal />
    }
}
