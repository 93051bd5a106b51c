//! Provides the persistence port for saved shopping lists
//!
//! Saved lists are kept as a single serialized mapping of list name to line
//! items inside one key-value slot, identified by [`STORAGE_KEY`]. The whole
//! mapping is read once and rewritten in full on every change.
//!
//! This includes:
//! - [`ListStorage`] the load / save port consumed by the store
//! - [`KeyValueStore`] a minimal string key-value medium
//! - [`file::FileKeyValueStore`] a directory backed key-value medium
//! - [`memory::MemoryKeyValueStore`] an in-memory key-value medium

#[cfg(test)]
use mockall::automock;

use std::{collections::BTreeMap, rc::Rc};

use crate::{
    error::{RCartLibError, Result},
    item::LineItem,
};

pub mod file;
pub mod memory;

/// The fixed key under which saved lists are persisted
pub const STORAGE_KEY: &str = "savedShoppingLists";

/// Mapping of user chosen list names to list snapshots
pub type SavedLists = BTreeMap<String, Vec<LineItem>>;

/// Trait describing a string based key-value storage medium
#[cfg_attr(test, automock)]
pub trait KeyValueStore {
    /// Returns the value stored under key or None if the slot is empty
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Replaces the value stored under key
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Rc<K> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Port used by the store to read and write saved lists
#[cfg_attr(test, automock)]
pub trait ListStorage {
    /// Reads the full saved list mapping
    fn load(&self) -> Result<SavedLists>;
    /// Replaces the full saved list mapping
    fn save(&self, lists: &SavedLists) -> Result<()>;
}

/// [`ListStorage`] implementation serializing saved lists as JSON into a
/// single [`KeyValueStore`] slot
pub struct KeyValueListStorage<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> KeyValueListStorage<K> {
    /// Returns a new instance persisting into the provided key-value store
    pub fn new(store: K) -> Self {
        Self { store }
    }
}

impl<K: KeyValueStore> ListStorage for KeyValueListStorage<K> {
    fn load(&self) -> Result<SavedLists> {
        match self.store.get(STORAGE_KEY)? {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
                .map_err(|e| RCartLibError::from_storage_err(STORAGE_KEY, e)),
            _ => Ok(SavedLists::new()),
        }
    }

    fn save(&self, lists: &SavedLists) -> Result<()> {
        let serialized = serde_json::to_string(lists)?;
        self.store.set(STORAGE_KEY, &serialized)
    }
}

#[cfg(test)]
#[path = "./storage_tests.rs"]
mod tests;
