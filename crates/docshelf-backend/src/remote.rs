//! Remote object-store archive backend.
//!
//! Archives live in an S3-compatible object store under a configured prefix,
//! with object key `{prefix}/{category}/{doc_name}.tar.gz`. The backend holds
//! a connection handle, not the store itself: any [`object_store::ObjectStore`]
//! implementation works, including the in-memory store for tests.
//!
//! Enumeration downloads each archive into a temporary directory scoped to
//! the returned [`StagedArchive`], so bootstrap never leaks disk space even
//! when extraction fails midway.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use docshelf_types::ARCHIVE_SUFFIX;
use futures::TryStreamExt;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutPayload};
use tracing::{debug, warn};

use crate::error::BackendResult;
use crate::traits::{ArchiveBackend, StagedArchive};

/// An [`ArchiveBackend`] storing archives in a remote object store.
pub struct RemoteBackend {
    store: Arc<dyn ObjectStore>,
    prefix: String,
}

impl RemoteBackend {
    /// Create a backend over an object-store handle, keyed under `prefix`.
    ///
    /// An empty prefix places archives at the bucket root.
    pub fn new(store: Arc<dyn ObjectStore>, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into().trim_matches('/').to_string();
        Self { store, prefix }
    }

    fn object_path(&self, category: &str, doc_name: &str) -> ObjectPath {
        let key = if self.prefix.is_empty() {
            format!("{category}/{doc_name}{ARCHIVE_SUFFIX}")
        } else {
            format!("{}/{category}/{doc_name}{ARCHIVE_SUFFIX}", self.prefix)
        };
        ObjectPath::from(key)
    }

    fn list_prefix(&self) -> Option<ObjectPath> {
        if self.prefix.is_empty() {
            None
        } else {
            Some(ObjectPath::from(self.prefix.as_str()))
        }
    }

    /// Split an object key into `(category, doc_name)`.
    ///
    /// Takes the last two path segments; prefix-only (directory-marker)
    /// entries and keys without the archive suffix are rejected.
    fn parse_key(location: &ObjectPath) -> Option<(String, String)> {
        let raw = location.as_ref();
        let mut segments = raw.rsplit('/');
        let file_name = segments.next()?;
        let category = segments.next()?;
        if category.is_empty() {
            return None;
        }
        let doc_name = file_name.strip_suffix(ARCHIVE_SUFFIX)?;
        if doc_name.is_empty() {
            return None;
        }
        Some((category.to_string(), doc_name.to_string()))
    }
}

#[async_trait]
impl ArchiveBackend for RemoteBackend {
    async fn store(
        &self,
        category: &str,
        doc_name: &str,
        source: &std::path::Path,
    ) -> BackendResult<()> {
        let location = self.object_path(category, doc_name);
        let data = tokio::fs::read(source).await?;
        self.store.put(&location, PutPayload::from(data)).await?;
        debug!(category, doc_name, %location, "stored archive in object store");
        Ok(())
    }

    async fn delete(&self, category: &str, doc_name: &str) -> BackendResult<()> {
        let location = self.object_path(category, doc_name);
        match self.store.delete(&location).await {
            Ok(()) => Ok(()),
            Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn initialize_existing(&self) -> BackendResult<Vec<StagedArchive>> {
        let prefix = self.list_prefix();
        let mut objects = self.store.list(prefix.as_ref());
        let mut archives = Vec::new();

        while let Some(meta) = objects.try_next().await? {
            let Some((category, doc_name)) = Self::parse_key(&meta.location) else {
                debug!(location = %meta.location, "skipping non-archive object");
                continue;
            };

            let staging = tempfile::tempdir()?;
            let staged_path: PathBuf = staging
                .path()
                .join(format!("{doc_name}{ARCHIVE_SUFFIX}"));

            match self.store.get(&meta.location).await {
                Ok(result) => {
                    let data = result.bytes().await?;
                    tokio::fs::write(&staged_path, &data).await?;
                    debug!(category, doc_name, "downloaded archive for bootstrap");
                    archives.push(StagedArchive::downloaded(
                        category, doc_name, staged_path, staging,
                    ));
                }
                Err(e) => {
                    // Listed a moment ago but gone now: someone else deleted
                    // it. Skip rather than abort the whole bootstrap.
                    warn!(location = %meta.location, error = %e, "skipping unreadable archive");
                }
            }
        }

        Ok(archives)
    }
}
