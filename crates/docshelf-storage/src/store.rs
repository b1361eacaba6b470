//! The [`DocStorage`] facade.
//!
//! A mapping-like interface over document keys, composing the registry, the
//! archive backend, and the extractor as constructor-injected dependencies.
//! `put` runs store → extract → register in that order; the sequence is not
//! transactional, and a failure after the store step leaves the durable
//! archive newer than the registry until the next successful put or the next
//! bootstrap re-index.

use std::path::Path;
use std::sync::Arc;

use docshelf_backend::ArchiveBackend;
use docshelf_registry::Registry;
use docshelf_types::{group_by_category, CategoryGroup, DocumentKey, DocumentMeta, INDEX_FILE};
use tracing::{error, info, warn};

use crate::error::{StorageError, StorageResult};
use crate::extract::Extractor;
use crate::lock::KeyLocks;

/// A resolved registry entry for one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDoc {
    pub doc_name: String,
    pub category: String,
    /// Relative servable path to the document entry point.
    pub index_path: String,
}

/// Key-based storage facade over registry, backend, and extractor.
pub struct DocStorage {
    registry: Arc<dyn Registry>,
    backend: Arc<dyn ArchiveBackend>,
    extractor: Extractor,
    locks: KeyLocks,
}

impl DocStorage {
    /// Compose a facade from its three storage dependencies.
    pub fn new(
        registry: Arc<dyn Registry>,
        backend: Arc<dyn ArchiveBackend>,
        extractor: Extractor,
    ) -> Self {
        Self {
            registry,
            backend,
            extractor,
            locks: KeyLocks::new(),
        }
    }

    /// Rebuild the registry from the backend's durable archives.
    ///
    /// Called once at startup. Every archive the backend enumerates is
    /// re-extracted and re-registered; failures on individual archives are
    /// logged and skipped so one bad bundle cannot block the rest. Returns
    /// the number of documents indexed.
    pub async fn initialize(&self) -> StorageResult<usize> {
        info!("initializing document storage from durable archives");
        let staged = self.backend.initialize_existing().await?;

        let total = staged.len();
        let mut indexed = 0;
        for archive in &staged {
            let key = format!("{}_{}", archive.category(), archive.doc_name());
            let extracted =
                self.extractor
                    .extract(archive.category(), archive.doc_name(), archive.path());
            match extracted.and_then(|servable| {
                self.registry.set(&key, &servable)?;
                Ok(())
            }) {
                Ok(()) => indexed += 1,
                Err(e) => warn!(key, error = %e, "skipping archive during bootstrap"),
            }
        }

        info!(indexed, total, "document storage initialized");
        Ok(indexed)
    }

    /// Look up the servable entry point for a key.
    pub fn resolve(&self, key: &str) -> StorageResult<ResolvedDoc> {
        let parsed = DocumentKey::parse(key)?;
        let Some(path) = self.registry.get(key)? else {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            });
        };
        Ok(ResolvedDoc {
            doc_name: parsed.doc_name().to_string(),
            category: parsed.category().to_string(),
            index_path: format!("{path}/{INDEX_FILE}"),
        })
    }

    /// Store, extract, and register the archive at `source` under `key`.
    ///
    /// Returns the relative servable path written into the registry.
    pub async fn put(&self, key: &str, source: &Path) -> StorageResult<String> {
        let parsed = DocumentKey::parse(key)?;
        let _guard = self.locks.acquire(key).await;

        info!(key, "storing document archive");
        self.backend
            .store(parsed.category(), parsed.doc_name(), source)
            .await
            .map_err(|e| {
                error!(key, step = "store", error = %e, "put failed");
                StorageError::from(e)
            })?;

        let servable = self
            .extractor
            .extract(parsed.category(), parsed.doc_name(), source)
            .map_err(|e| {
                error!(key, step = "extract", error = %e, "put failed");
                e
            })?;

        self.registry.set(key, &servable).map_err(|e| {
            error!(key, step = "register", error = %e, "put failed");
            StorageError::from(e)
        })?;

        info!(key, servable, "document stored, extracted, and registered");
        Ok(servable)
    }

    /// Remove the extracted directory, the registry entry, and the archived
    /// source for `key`.
    pub async fn remove(&self, key: &str) -> StorageResult<()> {
        let parsed = DocumentKey::parse(key)?;
        let _guard = self.locks.acquire(key).await;

        if self.registry.get(key)?.is_none() {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            });
        }

        let target = self
            .extractor
            .target_dir(parsed.category(), parsed.doc_name());
        match tokio::fs::remove_dir_all(&target).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        self.registry.delete(key)?;
        self.backend
            .delete(parsed.category(), parsed.doc_name())
            .await?;

        info!(key, "document removed");
        Ok(())
    }

    /// Build the grouped, sorted listing of all registered documents.
    ///
    /// Recomputed from registry contents on each call; O(number of
    /// documents).
    pub fn listing(&self) -> StorageResult<Vec<CategoryGroup>> {
        let mut entries = Vec::new();
        for key in self.registry.scan()? {
            // A concurrent remove may race the scan; missing entries are
            // simply absent from this listing.
            let Some(path) = self.registry.get(&key)? else {
                continue;
            };
            let parsed = match DocumentKey::parse(&key) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!(key, error = %e, "skipping malformed registry key");
                    continue;
                }
            };
            entries.push((
                parsed.category().to_string(),
                DocumentMeta {
                    doc_name: parsed.doc_name().to_string(),
                    doc_path: format!("{path}/{INDEX_FILE}"),
                },
            ));
        }
        Ok(group_by_category(entries))
    }

    /// Number of registered documents.
    pub fn count(&self) -> StorageResult<usize> {
        Ok(self.registry.count()?)
    }
}
