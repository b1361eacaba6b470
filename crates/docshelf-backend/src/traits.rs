//! The [`ArchiveBackend`] trait defining the durable archive interface.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempDir;

use crate::error::BackendResult;

/// An archive staged at a locally readable path.
///
/// For local backends the path points straight at the stored file. For remote
/// backends it points into a temporary directory owned by this value; the
/// download is deleted when the `StagedArchive` drops, so callers must finish
/// reading (extracting) before letting it go out of scope.
#[derive(Debug)]
pub struct StagedArchive {
    category: String,
    doc_name: String,
    path: PathBuf,
    _staging: Option<TempDir>,
}

impl StagedArchive {
    /// Stage an archive that already lives at a stable local path.
    pub fn local(category: impl Into<String>, doc_name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            category: category.into(),
            doc_name: doc_name.into(),
            path,
            _staging: None,
        }
    }

    /// Stage an archive downloaded into a temporary directory.
    ///
    /// The directory lives exactly as long as the returned value.
    pub fn downloaded(
        category: impl Into<String>,
        doc_name: impl Into<String>,
        path: PathBuf,
        staging: TempDir,
    ) -> Self {
        Self {
            category: category.into(),
            doc_name: doc_name.into(),
            path,
            _staging: Some(staging),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn doc_name(&self) -> &str {
        &self.doc_name
    }

    /// Locally readable path to the archive file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Durable storage for documentation archives.
///
/// Implementations must be thread-safe (`Send + Sync`). Archives are keyed by
/// `(category, doc_name)`; storing at an occupied key overwrites the prior
/// archive. The backend's contents are the system's source of truth -- the
/// registry is rebuilt from [`ArchiveBackend::initialize_existing`] at
/// startup.
#[async_trait]
pub trait ArchiveBackend: Send + Sync {
    /// Persist the archive at `source` under `(category, doc_name)`,
    /// overwriting any prior archive at that key. Creates the category
    /// namespace if absent.
    async fn store(&self, category: &str, doc_name: &str, source: &Path) -> BackendResult<()>;

    /// Remove the archive stored under `(category, doc_name)`.
    ///
    /// Absence is not an error.
    async fn delete(&self, category: &str, doc_name: &str) -> BackendResult<()>;

    /// Enumerate all archives currently durable in the backend, staging each
    /// to a locally readable path.
    ///
    /// Used once at startup to rebuild the registry from durable state.
    async fn initialize_existing(&self) -> BackendResult<Vec<StagedArchive>>;
}
