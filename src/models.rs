//! Diary Models
//!
//! The persisted entry record and the raw form input it is built from.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calendar date format used by the date input and the stored `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One diary record, immutable once created
///
/// Serialized with camelCase keys: `{ id, title, date, content, createdAt }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    /// Creation timestamp in epoch milliseconds, as a decimal string
    pub id: String,
    pub title: String,
    /// User-chosen calendar date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Unvalidated form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub date: String,
    pub content: String,
}

/// Required form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Date,
    Content,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Date => "date",
            Field::Content => "content",
        }
    }
}

/// Why a `NewEntry` was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {}", .0.as_str())]
    MissingField(Field),
    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Trimmed, checked fields ready to become a `DiaryEntry`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
}

impl NewEntry {
    pub fn new(title: impl Into<String>, date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            content: content.into(),
        }
    }

    /// Trim all three fields and check none is empty and the date parses
    pub fn validate(&self) -> Result<ValidEntry, ValidationError> {
        let title = required(&self.title, Field::Title)?;
        let date = required(&self.date, Field::Date)?;
        let content = required(&self.content, Field::Content)?;

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;

        Ok(ValidEntry {
            title: title.to_string(),
            date,
            content: content.to_string(),
        })
    }
}

fn required(value: &str, field: Field) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}
