//! In-memory SessionStore implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::store::{SessionStore, StoreError};

/// In-memory store for tests and ephemeral sessions. Nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a key, bypassing the trait. Handy for building fixtures.
    pub fn seed(self, key: &str, value: Value) -> Self {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value);
        }
        self
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
