//! Error types for registry operations.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The backing key-value store cannot be reached or is poisoned.
    #[error("registry unavailable: {0}")]
    Unavailable(String),

    /// A stored entry is not valid UTF-8.
    #[error("corrupt registry entry for key {key:?}")]
    CorruptEntry { key: String },

    /// Error from the embedded database.
    #[error("registry store error: {0}")]
    Store(#[from] sled::Error),

    /// I/O error from the underlying storage.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
