//! Form Submission
//!
//! Entry form handling, independent of the DOM so it can be tested.

use kv_storage::KeyValueStore;

use crate::diary_store::{DiaryError, DiaryStore};
use crate::models::{DiaryEntry, NewEntry, ValidationError};

/// Message shown to the user after a submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Saved,
    MissingFields,
    InvalidDate(String),
    StorageFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Saved => "일기가 저장되었습니다!".to_string(),
            Notice::MissingFields => "모든 필드를 입력해주세요.".to_string(),
            Notice::InvalidDate(date) => format!("날짜 형식이 올바르지 않습니다: {}", date),
            Notice::StorageFailed(reason) => format!("일기를 저장하지 못했습니다: {}", reason),
        }
    }
}

/// Create an entry from `form`; on success the form is cleared
///
/// On failure the form is left as typed so the user can fix it.
pub fn submit<S: KeyValueStore>(
    store: &DiaryStore<S>,
    form: &mut NewEntry,
) -> Result<DiaryEntry, Notice> {
    match store.create(form) {
        Ok(entry) => {
            *form = NewEntry::default();
            Ok(entry)
        }
        Err(DiaryError::Validation(ValidationError::InvalidDate(date))) => {
            tracing::info!(date = %date, "entry rejected: malformed date");
            Err(Notice::InvalidDate(date))
        }
        Err(DiaryError::Validation(err)) => {
            tracing::info!(error = %err, "entry rejected");
            Err(Notice::MissingFields)
        }
        Err(err) => {
            tracing::error!(error = %err, "saving entry failed");
            Err(Notice::StorageFailed(err.to_string()))
        }
    }
}
