//! HTTP server for docshelf.
//!
//! A thin I/O wrapper over the storage facade: multipart uploads in, JSON
//! listings out, extracted bundles served as static files. All storage
//! semantics live in `docshelf-storage`; this crate only translates between
//! HTTP and the facade's operations and maps errors onto response codes.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{ServerConfig, StorageConfig};
pub use error::{ServerError, ServerResult};
pub use server::{AppState, DocServer};
