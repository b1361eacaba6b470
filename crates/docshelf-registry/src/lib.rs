//! Document registry for docshelf.
//!
//! The registry is a persistent mapping from document key
//! (`category_docname`) to the servable path of its extracted bundle. It is a
//! *derived* index: the archive backend's durable archives are the source of
//! truth, and the whole registry can be rebuilt from them at startup. All
//! operations are atomic at single-key granularity; there are no cross-key
//! transactions.
//!
//! # Modules
//!
//! - [`error`] — Error types for registry operations
//! - [`traits`] — The [`Registry`] trait defining the storage interface
//! - [`memory`] — In-memory [`MemoryRegistry`] for tests and embedding
//! - [`sled_db`] — Persistent [`SledRegistry`] on an embedded sled database

pub mod error;
pub mod memory;
pub mod sled_db;
pub mod traits;

pub use error::{RegistryError, RegistryResult};
pub use memory::MemoryRegistry;
pub use sled_db::SledRegistry;
pub use traits::Registry;
