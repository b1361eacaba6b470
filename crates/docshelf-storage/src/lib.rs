//! Storage facade for docshelf.
//!
//! This crate ties the three storage concerns together behind one
//! mapping-like interface over document keys:
//!
//! - the **archive backend** durably stores compressed bundles (source of
//!   truth),
//! - the **extractor** unpacks a bundle into its deterministic servable
//!   directory,
//! - the **registry** tracks which servable path each key maps to.
//!
//! [`DocStorage`] owns the orchestration: `put` stores, extracts, then
//! registers; `remove` tears down in the reverse direction; `initialize`
//! rebuilds the whole registry from the backend's durable archives at
//! startup. Same-key operations are serialized through a per-key lock;
//! distinct keys proceed concurrently.
//!
//! # Modules
//!
//! - [`error`] — Error types for storage operations
//! - [`extract`] — The [`Extractor`] unpacking archives into the static tree
//! - [`lock`] — Per-key serialization for mutating operations
//! - [`store`] — The [`DocStorage`] facade

pub mod error;
pub mod extract;
pub mod lock;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use extract::Extractor;
pub use lock::KeyLocks;
pub use store::{DocStorage, ResolvedDoc};
