//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::DiaryEntry;
use crate::overlay::Overlay;
use crate::preferences::Preferences;

/// Everything the views react to
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Entries as last loaded, newest first
    pub entries: Vec<DiaryEntry>,
    /// Set when the last load failed
    pub load_error: Option<String>,
    /// Detail overlay
    pub overlay: Overlay,
    /// Dark mode and font size
    pub preferences: Preferences,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

// ========================
// Store Helper Functions
// ========================

pub fn entries(store: &UiStore) -> Vec<DiaryEntry> {
    store.entries().get()
}

pub fn load_error(store: &UiStore) -> Option<String> {
    store.load_error().get()
}

/// Replace the entry list after a successful load
pub fn store_set_entries(store: &UiStore, loaded: Vec<DiaryEntry>) {
    *store.entries().write() = loaded;
    *store.load_error().write() = None;
}

/// Record a failed load and clear the list
pub fn store_set_load_error(store: &UiStore, message: String) {
    store.entries().write().clear();
    *store.load_error().write() = Some(message);
}

pub fn overlay(store: &UiStore) -> Overlay {
    store.overlay().get()
}

/// Run `f` against the overlay, notifying subscribers only if it changed
pub fn store_update_overlay<R>(store: &UiStore, f: impl FnOnce(&mut Overlay) -> R) -> R {
    let before = store.overlay().get_untracked();
    let mut next = before.clone();
    let result = f(&mut next);
    if next != before {
        *store.overlay().write() = next;
    }
    result
}

pub fn preferences(store: &UiStore) -> Preferences {
    store.preferences().get()
}

pub fn preferences_untracked(store: &UiStore) -> Preferences {
    store.preferences().get_untracked()
}

pub fn store_set_preferences(store: &UiStore, prefs: Preferences) {
    *store.preferences().write() = prefs;
}
