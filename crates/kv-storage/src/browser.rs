//! `window.localStorage` backend

use wasm_bindgen::{JsCast, JsValue};

use crate::{KeyValueStore, StorageError, StorageResult};

/// Handle to the page's localStorage
///
/// Zero-sized: the `Storage` object is looked up on every call, so the
/// handle is `Copy` and can live inside Leptos context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected {
                key: key.to_string(),
                reason: describe(&e),
            })
    }
}

/// Best-effort text for a thrown JS value (DOMException name, string, or debug form)
fn describe(err: &JsValue) -> String {
    if let Some(dom) = err.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", dom.name(), dom.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
