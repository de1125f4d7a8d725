//! `localStorage` as a [`KeyValueStore`].

use quiver_core::{CoreError, KeyValueStore, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Browser `localStorage`.
///
/// Reads return `None` and writes fail when storage is unavailable, e.g. in
/// private browsing modes that block it.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is unavailable; search history will not persist");
        }
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| CoreError::storage("localStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| CoreError::storage(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use quiver_core::RecentSearchLog;

    use super::*;

    #[test]
    fn test_unavailable_store_reads_nothing() {
        let store = LocalStorageStore::default();
        assert!(!store.is_available());
        assert!(store.get_item("recentSearches").is_none());
    }

    #[test]
    fn test_unavailable_store_rejects_writes() {
        let store = LocalStorageStore::default();
        let err = store.set_item("theme", "light").unwrap_err();
        assert!(err.to_string().contains("localStorage is unavailable"));
    }

    #[test]
    fn test_history_without_storage_starts_empty() {
        let store = LocalStorageStore::default();
        let log = RecentSearchLog::load(&store, "recentSearches", 10);
        assert!(log.is_empty());
    }
}
