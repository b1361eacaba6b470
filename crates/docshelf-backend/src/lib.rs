//! Durable archive storage for docshelf.
//!
//! The backend holds the compressed source archives -- the *source of truth*
//! for the whole system. The registry and the extracted static tree are
//! derived state that can be rebuilt from the backend at any time via
//! [`ArchiveBackend::initialize_existing`].
//!
//! # Backends
//!
//! All backends implement the [`ArchiveBackend`] trait:
//!
//! - [`LocalBackend`] -- archives on local disk, one subdirectory per category
//! - [`RemoteBackend`] -- archives in an S3-compatible object store behind a
//!   configured key prefix
//!
//! # Design Rules
//!
//! 1. Storing an archive for a key overwrites any prior archive at that key.
//! 2. Deleting an absent archive is not an error.
//! 3. Enumeration stages every archive to a locally readable path; staged
//!    temp files are cleaned up when the [`StagedArchive`] drops, on every
//!    exit path.

pub mod error;
pub mod local;
pub mod remote;
pub mod traits;

pub use error::{BackendError, BackendResult};
pub use local::LocalBackend;
pub use remote::RemoteBackend;
pub use traits::{ArchiveBackend, StagedArchive};
