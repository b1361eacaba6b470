//! The [`Registry`] trait defining the key-to-path index interface.
//!
//! Any backend (in-memory, embedded database, shared key-value service)
//! implements this trait to track which servable path each document key maps
//! to.

use crate::error::RegistryResult;

/// Persistent mapping from document key to servable path.
///
/// Implementations must be thread-safe (`Send + Sync`) and atomic at
/// single-key granularity. `set` is a pure overwrite -- no merging of
/// previous values.
pub trait Registry: Send + Sync {
    /// Look up the servable path for a key.
    ///
    /// Returns `Ok(None)` if the key is not registered.
    fn get(&self, key: &str) -> RegistryResult<Option<String>>;

    /// Register (create or overwrite) the servable path for a key.
    fn set(&self, key: &str, path: &str) -> RegistryResult<()>;

    /// Remove a key from the registry.
    ///
    /// Returns `Ok(true)` if the key existed and was removed, `Ok(false)` if
    /// it did not exist.
    fn delete(&self, key: &str) -> RegistryResult<bool>;

    /// All registered keys, in no particular order.
    fn scan(&self) -> RegistryResult<Vec<String>>;

    /// Number of registered keys.
    ///
    /// Default implementation scans all keys. Backends may override with a
    /// cheaper count.
    fn count(&self) -> RegistryResult<usize> {
        Ok(self.scan()?.len())
    }
}
