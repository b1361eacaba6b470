//! Core types for docshelf.
//!
//! docshelf hosts versioned documentation bundles. Every bundle is identified
//! by a [`DocumentKey`] -- a composite `category_docname` identifier derived
//! from the uploaded archive filename. This crate holds the key type, the
//! derived listing view served to clients, and the naming conventions shared
//! by the storage crates:
//!
//! - Archives are gzipped tarballs named `{doc_name}.tar.gz`
//! - Extracted bundles are expected to carry an `index.html` at their root
//!
//! # Modules
//!
//! - [`error`] — Error types for key parsing
//! - [`key`] — The [`DocumentKey`] composite identifier
//! - [`listing`] — Grouped, sorted listing view of registered documents

pub mod error;
pub mod key;
pub mod listing;

pub use error::{KeyError, Result};
pub use key::{DocumentKey, ARCHIVE_SUFFIX};
pub use listing::{group_by_category, CategoryGroup, DocumentMeta, INDEX_FILE};
