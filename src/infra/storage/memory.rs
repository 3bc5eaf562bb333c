//! In-memory backend: a mutex-guarded map.
//!
//! Used as a test double and for ephemeral, throwaway stores. Nothing
//! survives the process.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::application::storage::{KeyValueStorage, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-populated with a single document, for tests that
    /// need existing state.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .entries
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .insert(key.into(), value.into());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_read_as_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing").expect("get"), None);
    }

    #[test]
    fn set_replaces_the_whole_document() {
        let storage = MemoryStorage::new();
        storage.set("doc", "first").expect("set");
        storage.set("doc", "second").expect("set");
        assert_eq!(storage.get("doc").expect("get").as_deref(), Some("second"));
    }

    #[test]
    fn with_entry_seeds_existing_state() {
        let storage = MemoryStorage::with_entry("doc", "[]");
        assert_eq!(storage.get("doc").expect("get").as_deref(), Some("[]"));
    }
}
