//! Error types for archive backend operations.

use thiserror::Error;

/// Errors that can occur during archive backend operations.
///
/// Connection failures surface through these variants and are propagated, not
/// retried: fatal at initialization, per-operation failures thereafter.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from the remote object store.
    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    /// I/O error from the local filesystem.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;
