//! Error types for storage operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The document key lacks the `category_docname` shape. Surfaced before
    /// any storage mutation.
    #[error(transparent)]
    InvalidKey(#[from] docshelf_types::KeyError),

    /// No registry entry exists for the key.
    #[error("document not found: {key}")]
    NotFound { key: String },

    /// The archive cannot be opened or parsed. The store step may already
    /// have committed; the registry is left unchanged.
    #[error("cannot read archive {path}: {reason}")]
    ArchiveUnreadable { path: PathBuf, reason: String },

    /// The extracted bundle has no `index.html` at its root.
    #[error("archive for {category}/{doc_name} has no index.html at its root")]
    MissingEntrypoint { category: String, doc_name: String },

    /// Error from the registry.
    #[error("registry error: {0}")]
    Registry(#[from] docshelf_registry::RegistryError),

    /// Error from the archive backend.
    #[error("archive backend error: {0}")]
    Backend(#[from] docshelf_backend::BackendError),

    /// I/O error while manipulating the static tree.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
