//! In-memory store

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::{KeyValueStore, StorageError, StorageResult};

/// Map-backed store
///
/// Clones share the same map, so dropping every component built on one
/// clone and rebuilding from another behaves like a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
    /// Largest accepted value in bytes (None = unlimited)
    quota: Rc<Cell<Option<usize>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value exceeds `bytes`, like a full localStorage
    pub fn set_quota(&self, bytes: Option<usize>) {
        self.quota.set(bytes);
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(limit) = self.quota.get() {
            if value.len() > limit {
                return Err(StorageError::WriteRejected {
                    key: key.to_string(),
                    reason: format!("value of {} bytes exceeds quota of {}", value.len(), limit),
                });
            }
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_values() {
        let storage = MemoryStorage::new();
        let reloaded = storage.clone();

        storage.set("darkMode", "true").unwrap();

        assert_eq!(reloaded.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_quota_rejects_and_keeps_previous_value() {
        let storage = MemoryStorage::new();
        storage.set("k", "old").unwrap();
        storage.set_quota(Some(4));

        let err = storage.set("k", "too long").unwrap_err();

        assert!(matches!(err, StorageError::WriteRejected { .. }));
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("old"));
    }

    #[test]
    fn test_len_counts_keys() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set("k", "v").unwrap();
        storage.set("k", "w").unwrap();
        storage.set("other", "v").unwrap();

        assert_eq!(storage.len(), 2);
    }
}
