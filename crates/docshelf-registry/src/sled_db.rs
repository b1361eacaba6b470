//! Persistent registry on an embedded sled database.
//!
//! [`SledRegistry`] stores each document key as a sled key with the servable
//! path as its value. sled gives single-key atomicity, which is all the
//! registry contract requires. The database survives restarts, but the
//! registry is still rebuilt from the archive backend at startup -- the
//! persistent copy just lets reads work before (or without) a bootstrap.

use std::path::Path;

use crate::error::{RegistryError, RegistryResult};
use crate::traits::Registry;

/// A [`Registry`] backed by an embedded sled database.
pub struct SledRegistry {
    db: sled::Db,
}

impl SledRegistry {
    /// Open (or create) the registry database at the given path.
    ///
    /// Open failure is fatal: the caller gets the error and should not
    /// continue without a registry.
    pub fn open(path: &Path) -> RegistryResult<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl Registry for SledRegistry {
    fn get(&self, key: &str) -> RegistryResult<Option<String>> {
        match self.db.get(key)? {
            Some(value) => {
                let path = String::from_utf8(value.to_vec()).map_err(|_| {
                    RegistryError::CorruptEntry {
                        key: key.to_string(),
                    }
                })?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, path: &str) -> RegistryResult<()> {
        self.db.insert(key, path.as_bytes())?;
        Ok(())
    }

    fn delete(&self, key: &str) -> RegistryResult<bool> {
        Ok(self.db.remove(key)?.is_some())
    }

    fn scan(&self) -> RegistryResult<Vec<String>> {
        let mut keys = Vec::new();
        for entry in self.db.iter() {
            let (key, _) = entry?;
            match String::from_utf8(key.to_vec()) {
                Ok(key) => keys.push(key),
                Err(_) => {
                    tracing::warn!("skipping non-UTF-8 registry key");
                }
            }
        }
        Ok(keys)
    }

    fn count(&self) -> RegistryResult<usize> {
        Ok(self.db.len())
    }
}

impl std::fmt::Debug for SledRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledRegistry")
            .field("entries", &self.db.len())
            .finish()
    }
}
