//! Key-value backend trait and in-memory implementation.

use std::{collections::HashMap, sync::RwLock};

use crate::{StorageError, StorageResult};

/// Trait for the key-value store account data is persisted to.
///
/// Values are whole documents: `set` overwrites, there are no partial
/// updates.
pub trait KeyValueStore: Send + Sync {
    /// Gets the value stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Checks if a value exists.
    fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory key-value store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-populated values.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryKeyValueStore::new();

        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").unwrap(), Some("[]".to_string()));
        assert!(store.contains("users").unwrap());
        assert!(!store.contains("currentUser").unwrap());

        store.set("users", "[1]").unwrap();
        assert_eq!(store.get("users").unwrap(), Some("[1]".to_string()));

        store.remove("users").unwrap();
        store.remove("users").unwrap();
        assert!(!store.contains("users").unwrap());
    }

    #[test]
    fn test_store_as_trait_object() {
        let mut initial = HashMap::new();
        initial.insert("users".to_string(), "[]".to_string());

        let store: Box<dyn KeyValueStore> = Box::new(MemoryKeyValueStore::with_values(initial));
        assert_eq!(store.get("users").unwrap(), Some("[]".to_string()));
    }
}
