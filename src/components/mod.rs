//! UI Components
//!
//! Leptos components for the diary page.

mod header;
mod diary_form;
mod diary_list;
mod entry_modal;

pub use header::Header;
pub use diary_form::DiaryForm;
pub use diary_list::DiaryList;
pub use entry_modal::EntryModal;
