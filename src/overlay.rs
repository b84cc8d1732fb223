//! Detail Overlay State
//!
//! Hidden or showing exactly one entry.

use crate::models::DiaryEntry;

/// Key that closes the overlay
pub const CLOSE_KEY: &str = "Escape";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    Hidden,
    Visible(DiaryEntry),
}

impl Overlay {
    /// Show `entry`, replacing whatever was shown
    pub fn open(&mut self, entry: DiaryEntry) {
        *self = Overlay::Visible(entry);
    }

    pub fn close(&mut self) {
        *self = Overlay::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Overlay::Visible(_))
    }

    pub fn entry(&self) -> Option<&DiaryEntry> {
        match self {
            Overlay::Visible(entry) => Some(entry),
            Overlay::Hidden => None,
        }
    }

    /// Keyboard handler; returns true if the state changed
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == CLOSE_KEY && self.is_visible() {
            self.close();
            true
        } else {
            false
        }
    }

    /// Click handler; only a click on the backdrop itself closes
    pub fn handle_click(&mut self, on_backdrop: bool) -> bool {
        if on_backdrop && self.is_visible() {
            self.close();
            true
        } else {
            false
        }
    }
}
