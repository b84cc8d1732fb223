//! Diary Store
//!
//! Whole-collection persistence of diary entries in a key-value store.
//! Every read loads the full JSON array; every write replaces it.
//! Order is newest creation first.

use chrono::{DateTime, Utc};
use kv_storage::{JsonStoreExt, KeyValueStore, StorageError, StorageResult};
use thiserror::Error;

use crate::models::{DiaryEntry, NewEntry, ValidationError};

/// Errors from `DiaryStore::create`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiaryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// A stored numeric id is already `i64::MAX`
    #[error("No id left after `{0}`")]
    IdsExhausted(String),
}

pub type DiaryResult<T> = Result<T, DiaryError>;

/// Entry collection stored under a single key
#[derive(Debug, Clone, Copy)]
pub struct DiaryStore<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStore> DiaryStore<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    /// All entries, newest first (absent key = empty)
    pub fn list(&self) -> StorageResult<Vec<DiaryEntry>> {
        Ok(self.storage.get_json(self.key)?.unwrap_or_default())
    }

    /// Validate, stamp and prepend a new entry
    pub fn create(&self, input: &NewEntry) -> DiaryResult<DiaryEntry> {
        self.create_at(input, Utc::now())
    }

    /// `create` with an explicit clock reading
    ///
    /// Nothing is written unless validation and the read both succeed, and
    /// the collection is replaced in a single `set`.
    pub fn create_at(&self, input: &NewEntry, now: DateTime<Utc>) -> DiaryResult<DiaryEntry> {
        let valid = input.validate()?;
        let mut entries = self.list()?;

        let entry = DiaryEntry {
            id: next_id(&entries, now)?,
            title: valid.title,
            date: valid.date,
            content: valid.content,
            created_at: now,
        };
        entries.insert(0, entry.clone());
        self.storage.set_json(self.key, &entries)?;

        tracing::debug!(id = %entry.id, total = entries.len(), "diary entry created");
        Ok(entry)
    }
}

/// Epoch-millisecond id, bumped past any existing numeric id so ids stay unique
fn next_id(entries: &[DiaryEntry], now: DateTime<Utc>) -> DiaryResult<String> {
    let stamp = now.timestamp_millis();
    let newest = entries.iter().filter_map(|e| e.id.parse::<i64>().ok()).max();
    match newest {
        Some(latest) if latest >= stamp => latest
            .checked_add(1)
            .map(|id| id.to_string())
            .ok_or_else(|| DiaryError::IdsExhausted(latest.to_string())),
        _ => Ok(stamp.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;
    use chrono::{NaiveDate, TimeZone};
    use kv_storage::MemoryStorage;

    const KEY: &str = "diaryEntries";

    fn setup() -> (MemoryStorage, DiaryStore<MemoryStorage>) {
        let storage = MemoryStorage::new();
        let store = DiaryStore::new(storage.clone(), KEY);
        (storage, store)
    }

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_list_empty_when_absent() {
        let (_, store) = setup();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_then_list() {
        let (_, store) = setup();

        let created = store.create(&NewEntry::new("Day 1", "2024-01-01", "short")).unwrap();
        let entries = store.list().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], created);
        assert_eq!(entries[0].title, "Day 1");
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(entries[0].content, "short");
        assert!(!entries[0].id.is_empty());
    }

    #[test]
    fn test_newest_first() {
        let (_, store) = setup();
        for title in ["A", "B", "C"] {
            store.create(&NewEntry::new(title, "2024-01-01", "body")).unwrap();
        }

        let titles: Vec<String> = store.list().unwrap().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_order_ignores_entry_date() {
        let (_, store) = setup();
        store.create(&NewEntry::new("late", "2030-05-05", "x")).unwrap();
        store.create(&NewEntry::new("early", "1999-01-01", "x")).unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries[0].title, "early");
        assert_eq!(entries[1].title, "late");
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let (_, store) = setup();
        let now = at(1_704_067_200_000);

        let a = store.create_at(&NewEntry::new("a", "2024-01-01", "x"), now).unwrap();
        let b = store.create_at(&NewEntry::new("b", "2024-01-01", "x"), now).unwrap();
        let c = store.create_at(&NewEntry::new("c", "2024-01-01", "x"), at(1_704_067_199_000)).unwrap();

        assert_eq!(a.id, "1704067200000");
        assert_eq!(b.id, "1704067200001");
        assert_eq!(c.id, "1704067200002");
    }

    #[test]
    fn test_created_at_recorded() {
        let (_, store) = setup();
        let now = at(1_704_067_200_123);
        let entry = store.create_at(&NewEntry::new("a", "2024-01-01", "x"), now).unwrap();
        assert_eq!(entry.created_at, now);
        assert_eq!(store.list().unwrap()[0].created_at, now);
    }

    #[test]
    fn test_validation_failure_leaves_collection() {
        let (_, store) = setup();
        store.create(&NewEntry::new("kept", "2024-01-01", "x")).unwrap();
        let before = store.list().unwrap().len();

        for input in [
            NewEntry::new("", "2024-01-01", "x"),
            NewEntry::new("t", "", "x"),
            NewEntry::new("t", "2024-01-01", "   "),
        ] {
            let err = store.create(&input).unwrap_err();
            assert!(matches!(err, DiaryError::Validation(_)));
        }

        assert_eq!(store.list().unwrap().len(), before);
    }

    #[test]
    fn test_missing_title_reported() {
        let (_, store) = setup();
        let err = store.create(&NewEntry::new(" ", "2024-01-01", "x")).unwrap_err();
        assert_eq!(err, DiaryError::Validation(ValidationError::MissingField(Field::Title)));
    }

    #[test]
    fn test_write_failure_keeps_previous_collection() {
        let (storage, store) = setup();
        store.create(&NewEntry::new("first", "2024-01-01", "x")).unwrap();
        let before = storage.get(KEY).unwrap();

        storage.set_quota(Some(10));
        let err = store.create(&NewEntry::new("second", "2024-01-02", "y")).unwrap_err();

        assert!(matches!(err, DiaryError::Storage(StorageError::WriteRejected { .. })));
        assert_eq!(storage.get(KEY).unwrap(), before);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_collection_is_an_error() {
        let (storage, store) = setup();
        storage.set(KEY, "[{\"title\": 3}]").unwrap();

        assert!(matches!(store.list(), Err(StorageError::Corrupt { .. })));
        let err = store.create(&NewEntry::new("t", "2024-01-01", "x")).unwrap_err();
        assert!(matches!(err, DiaryError::Storage(StorageError::Corrupt { .. })));
        assert_eq!(storage.get(KEY).unwrap().as_deref(), Some("[{\"title\": 3}]"));
    }

    #[test]
    fn test_next_id_ignores_non_numeric_ids() {
        let entry = DiaryEntry {
            id: "imported-7".to_string(),
            title: "t".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            content: "c".to_string(),
            created_at: at(0),
        };
        assert_eq!(next_id(&[entry], at(42)).unwrap(), "42");
    }

    #[test]
    fn test_max_id_reports_exhaustion_without_writing() {
        let (storage, store) = setup();
        let seeded = r#"[{"id":"9223372036854775807","title":"t","date":"2024-01-01","content":"c","createdAt":"2024-01-01T00:00:00Z"}]"#;
        storage.set(KEY, seeded).unwrap();

        let err = store.create(&NewEntry::new("a", "2024-01-02", "b")).unwrap_err();

        assert_eq!(err, DiaryError::IdsExhausted(i64::MAX.to_string()));
        assert_eq!(storage.get(KEY).unwrap().as_deref(), Some(seeded));
    }
}
