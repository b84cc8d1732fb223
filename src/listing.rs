//! List Projection
//!
//! Turns stored entries into what the list and the detail overlay display.

use crate::dates::DateLocale;
use crate::models::DiaryEntry;

/// Shown in place of the list when there are no entries
pub const EMPTY_MESSAGE: &str = "저장된 일기가 없습니다. 첫 번째 일기를 작성해보세요!";

/// Appended to a truncated preview
pub const ELLIPSIS: &str = "...";

/// One list row
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    pub entry: DiaryEntry,
    pub date_label: String,
    pub preview: String,
}

/// What the list area renders
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Empty,
    Rows(Vec<EntryRow>),
}

/// Detail overlay contents
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDetail {
    pub title: String,
    pub date_label: String,
    pub content: String,
}

/// First `max_chars` characters, plus an ellipsis only if something was cut
pub fn preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

/// Rows in store order
pub fn project(entries: &[DiaryEntry], locale: DateLocale, preview_chars: usize) -> Listing {
    if entries.is_empty() {
        return Listing::Empty;
    }
    Listing::Rows(
        entries
            .iter()
            .map(|entry| EntryRow {
                entry: entry.clone(),
                date_label: locale.long_date(entry.date),
                preview: preview(&entry.content, preview_chars),
            })
            .collect(),
    )
}

impl EntryDetail {
    pub fn new(entry: &DiaryEntry, locale: DateLocale) -> Self {
        Self {
            title: entry.title.clone(),
            date_label: locale.long_date_with_weekday(entry.date),
            content: entry.content.clone(),
        }
    }
}
