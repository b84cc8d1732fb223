//! Application Context
//!
//! Constructed once in `App` and provided via the Leptos Context API.
//! Every component reaches storage and UI state through it.

use kv_storage::{BrowserStorage, KeyValueStore};

use crate::config::AppConfig;
use crate::diary_store::DiaryStore;
use crate::listing::{self, Listing};
use crate::models::{DiaryEntry, NewEntry};
use crate::overlay::Overlay;
use crate::preferences::{FontDirection, Preferences};
use crate::state::{self, UiStore};
use crate::submission::{self, Notice};

/// Storage-backed operations over the reactive UI state
///
/// Components use the `BrowserStorage` default, which is `Copy` so the
/// context moves freely into closures.
#[derive(Clone, Copy)]
pub struct AppContext<S = BrowserStorage> {
    pub config: AppConfig,
    storage: S,
    diary: DiaryStore<S>,
    /// Reactive UI state
    pub ui: UiStore,
}

impl<S: KeyValueStore + Clone> AppContext<S> {
    pub fn new(config: AppConfig, storage: S, ui: UiStore) -> Self {
        Self {
            config,
            diary: DiaryStore::new(storage.clone(), config.keys.entries),
            storage,
            ui,
        }
    }

    /// Re-read all entries into UI state
    pub fn reload(&self) {
        match self.diary.list() {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "loaded diary entries");
                state::store_set_entries(&self.ui, entries);
            }
            Err(err) => {
                tracing::error!(error = %err, "loading diary entries failed");
                state::store_set_load_error(&self.ui, err.to_string());
            }
        }
    }

    /// Current list projection (tracked)
    pub fn listing(&self) -> Listing {
        listing::project(&state::entries(&self.ui), self.config.locale, self.config.preview_chars)
    }

    pub fn load_error(&self) -> Option<String> {
        state::load_error(&self.ui)
    }

    // ========================
    // Preferences
    // ========================

    pub fn load_preferences(&self) {
        let prefs = Preferences::load(&self.storage, &self.config.keys).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "reading preferences failed, using defaults");
            Preferences::default()
        });
        state::store_set_preferences(&self.ui, prefs);
    }

    pub fn preferences(&self) -> Preferences {
        state::preferences(&self.ui)
    }

    pub fn toggle_dark_mode(&self) {
        let mut prefs = state::preferences_untracked(&self.ui);
        match prefs.toggle_dark_mode(&self.storage, &self.config.keys) {
            Ok(dark) => {
                tracing::debug!(dark, "dark mode toggled");
                state::store_set_preferences(&self.ui, prefs);
            }
            Err(err) => tracing::error!(error = %err, "saving dark mode failed"),
        }
    }

    pub fn adjust_font_size(&self, direction: FontDirection) {
        let mut prefs = state::preferences_untracked(&self.ui);
        match prefs.adjust_font_size(direction, &self.storage, &self.config.keys) {
            Ok(size) => {
                tracing::debug!(size = size.class_name(), "font size changed");
                state::store_set_preferences(&self.ui, prefs);
            }
            Err(err) => tracing::error!(error = %err, "saving font size failed"),
        }
    }

    // ========================
    // Overlay
    // ========================

    /// Current overlay state (tracked)
    pub fn overlay(&self) -> Overlay {
        state::overlay(&self.ui)
    }

    pub fn open_entry(&self, entry: DiaryEntry) {
        state::store_update_overlay(&self.ui, |overlay| overlay.open(entry));
    }

    pub fn close_overlay(&self) {
        state::store_update_overlay(&self.ui, |overlay| overlay.close());
    }

    pub fn handle_key(&self, key: &str) {
        state::store_update_overlay(&self.ui, |overlay| overlay.handle_key(key));
    }

    pub fn handle_overlay_click(&self, on_backdrop: bool) {
        state::store_update_overlay(&self.ui, |overlay| overlay.handle_click(on_backdrop));
    }

    // ========================
    // Submission
    // ========================

    /// Save the form as a new entry and refresh the list
    pub fn submit(&self, form: &mut NewEntry) -> Notice {
        match submission::submit(&self.diary, form) {
            Ok(entry) => {
                tracing::info!(id = %entry.id, "diary entry saved");
                self.reload();
                Notice::Saved
            }
            Err(notice) => notice,
        }
    }
}
