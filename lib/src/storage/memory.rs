//! In-memory key-value storage

use std::{cell::RefCell, collections::HashMap};

use crate::{error::Result, storage::KeyValueStore};

/// Keeps values in memory for the lifetime of the instance. Useful for tests
/// and for sessions where durable storage is unavailable
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Returns a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new store pre-populated with a single value
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
