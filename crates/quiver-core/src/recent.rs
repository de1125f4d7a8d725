//! Recent search history persisted in a key-value store.
//!
//! In the browser the store is `localStorage`; on the host (CLI, tests) it is
//! [`MemoryStore`]. The history is a JSON array of strings, most recent first.

use std::{cell::RefCell, collections::HashMap};

use crate::error::Result;

/// String key-value storage, shaped after the Web Storage API.
pub trait KeyValueStore {
    /// Read a value, `None` when the key is absent or storage is unavailable.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// In-memory store used outside the browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Ordered, deduplicated, capped list of past queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearchLog {
    entries: Vec<String>,
    limit: usize,
}

impl RecentSearchLog {
    /// Create an empty log holding at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Load the log stored under `key`.
    ///
    /// Missing or unparsable content yields an empty log.
    pub fn load(store: &dyn KeyValueStore, key: &str, limit: usize) -> Self {
        let mut log = Self::new(limit);
        let Some(raw) = store.get_item(key) else {
            return log;
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(stored) => {
                for entry in stored {
                    if !log.entries.contains(&entry) && log.entries.len() < limit {
                        log.entries.push(entry);
                    }
                }
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed recent searches");
            }
        }
        log
    }

    /// Move `query` to the front, dropping older duplicates and overflow.
    pub fn record(&mut self, query: &str) {
        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.limit);
    }

    /// Persist the log under `key`.
    pub fn save(&self, store: &dyn KeyValueStore, key: &str) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        store.set_item(key, &json)
    }

    /// Up to `limit` entries containing `needle`, case-insensitively.
    pub fn matching(&self, needle: &str, limit: usize) -> Vec<&str> {
        let needle = needle.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
