//! In-memory registry for testing and ephemeral use.
//!
//! [`MemoryRegistry`] holds all entries in a `HashMap` behind a `RwLock`. It
//! implements the full [`Registry`] trait and is suitable for unit tests and
//! short-lived processes. Data is lost when the registry is dropped.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{RegistryError, RegistryResult};
use crate::traits::Registry;

/// An in-memory implementation of [`Registry`].
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Registry for MemoryRegistry {
    fn get(&self, key: &str) -> RegistryResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| RegistryError::Unavailable(format!("lock poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, path: &str) -> RegistryResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| RegistryError::Unavailable(format!("lock poisoned: {e}")))?;
        entries.insert(key.to_string(), path.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> RegistryResult<bool> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| RegistryError::Unavailable(format!("lock poisoned: {e}")))?;
        Ok(entries.remove(key).is_some())
    }

    fn scan(&self) -> RegistryResult<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| RegistryError::Unavailable(format!("lock poisoned: {e}")))?;
        Ok(entries.keys().cloned().collect())
    }

    fn count(&self) -> RegistryResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| RegistryError::Unavailable(format!("lock poisoned: {e}")))?;
        Ok(entries.len())
    }
}
