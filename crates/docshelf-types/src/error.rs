//! Error types for document key parsing.

use thiserror::Error;

/// Errors that can occur when parsing a document key.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The key does not have the `category_docname` shape.
    #[error("invalid document key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },
}

/// Convenience type alias for key operations.
pub type Result<T> = std::result::Result<T, KeyError>;
