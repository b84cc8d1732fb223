//! Key-Value Storage
//!
//! String-keyed, string-valued persistence for the diary UI.
//! `BrowserStorage` goes through `window.localStorage`;
//! `MemoryStorage` backs tests and headless use.

mod browser;
mod error;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use browser::BrowserStorage;
pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;

/// Core trait for a string key-value store
///
/// Every call is synchronous; a failed `set` leaves the previous value in place.
pub trait KeyValueStore {
    /// Read the raw value under `key` (None = absent)
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// JSON helpers available on every store
pub trait JsonStoreExt: KeyValueStore {
    /// Read and deserialize the value under `key`
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Corrupt {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Serialize `value` and write it under `key`
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> JsonStoreExt for S {}
