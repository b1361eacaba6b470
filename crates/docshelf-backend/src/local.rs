//! Local-disk archive backend.
//!
//! Archives live under a root directory, one subdirectory per category, each
//! file named `{doc_name}.tar.gz`:
//!
//! ```text
//! {root}/
//!   guide/
//!     intro.tar.gz
//!   api/
//!     v2_client.tar.gz
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use docshelf_types::ARCHIVE_SUFFIX;
use tracing::{debug, warn};

use crate::error::BackendResult;
use crate::traits::{ArchiveBackend, StagedArchive};

/// An [`ArchiveBackend`] storing archives on the local filesystem.
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a backend rooted at `root`, creating the directory if absent.
    pub fn new(root: impl Into<PathBuf>) -> BackendResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory holding the per-category archive tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn archive_path(&self, category: &str, doc_name: &str) -> PathBuf {
        self.root
            .join(category)
            .join(format!("{doc_name}{ARCHIVE_SUFFIX}"))
    }
}

#[async_trait]
impl ArchiveBackend for LocalBackend {
    async fn store(&self, category: &str, doc_name: &str, source: &Path) -> BackendResult<()> {
        let dest = self.archive_path(category, doc_name);
        tokio::fs::create_dir_all(self.root.join(category)).await?;
        // fs::copy truncates an existing destination: overwrite-on-store.
        tokio::fs::copy(source, &dest).await?;
        debug!(category, doc_name, dest = %dest.display(), "stored archive locally");
        Ok(())
    }

    async fn delete(&self, category: &str, doc_name: &str) -> BackendResult<()> {
        let path = self.archive_path(category, doc_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn initialize_existing(&self) -> BackendResult<Vec<StagedArchive>> {
        let mut archives = Vec::new();

        let mut categories = tokio::fs::read_dir(&self.root).await?;
        while let Some(category_entry) = categories.next_entry().await? {
            if !category_entry.file_type().await?.is_dir() {
                continue;
            }
            let Some(category) = category_entry.file_name().to_str().map(String::from) else {
                warn!(path = %category_entry.path().display(), "skipping non-UTF-8 category directory");
                continue;
            };

            let mut files = tokio::fs::read_dir(category_entry.path()).await?;
            while let Some(file_entry) = files.next_entry().await? {
                let file_name = file_entry.file_name();
                let Some(file_name) = file_name.to_str() else {
                    warn!(path = %file_entry.path().display(), "skipping non-UTF-8 archive name");
                    continue;
                };
                let Some(doc_name) = file_name.strip_suffix(ARCHIVE_SUFFIX) else {
                    debug!(category, file_name, "skipping non-archive file");
                    continue;
                };

                archives.push(StagedArchive::local(
                    category.clone(),
                    doc_name,
                    file_entry.path(),
                ));
            }
        }

        Ok(archives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_in_temp() -> (tempfile::TempDir, LocalBackend) {
        let dir = tempfile::tempdir().unwrap();
        let backend = LocalBackend::new(dir.path().join("archives")).unwrap();
        (dir, backend)
    }

    fn write_source(dir: &Path, contents: &[u8]) -> PathBuf {
        let path = dir.join("upload.tar.gz");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn store_places_archive_under_category() {
        let (dir, backend) = backend_in_temp();
        let source = write_source(dir.path(), b"tarball-bytes");

        backend.store("guide", "intro", &source).await.unwrap();

        let stored = backend.root().join("guide").join("intro.tar.gz");
        assert_eq!(std::fs::read(stored).unwrap(), b"tarball-bytes");
    }

    #[tokio::test]
    async fn store_overwrites_prior_archive() {
        let (dir, backend) = backend_in_temp();
        let old = write_source(dir.path(), b"old");
        backend.store("guide", "intro", &old).await.unwrap();

        let new = dir.path().join("upload2.tar.gz");
        std::fs::write(&new, b"new").unwrap();
        backend.store("guide", "intro", &new).await.unwrap();

        let stored = backend.root().join("guide").join("intro.tar.gz");
        assert_eq!(std::fs::read(stored).unwrap(), b"new");
    }

    #[tokio::test]
    async fn delete_removes_archive() {
        let (dir, backend) = backend_in_temp();
        let source = write_source(dir.path(), b"bytes");
        backend.store("guide", "intro", &source).await.unwrap();

        backend.delete("guide", "intro").await.unwrap();
        assert!(!backend.root().join("guide").join("intro.tar.gz").exists());
    }

    #[tokio::test]
    async fn delete_absent_archive_is_not_an_error() {
        let (_dir, backend) = backend_in_temp();
        backend.delete("guide", "never-stored").await.unwrap();
    }

    #[tokio::test]
    async fn initialize_existing_enumerates_all_categories() {
        let (dir, backend) = backend_in_temp();
        let source = write_source(dir.path(), b"bytes");
        backend.store("guide", "intro", &source).await.unwrap();
        backend.store("api", "v2_client", &source).await.unwrap();

        let mut found: Vec<(String, String)> = backend
            .initialize_existing()
            .await
            .unwrap()
            .iter()
            .map(|a| (a.category().to_string(), a.doc_name().to_string()))
            .collect();
        found.sort();
        assert_eq!(
            found,
            vec![
                ("api".to_string(), "v2_client".to_string()),
                ("guide".to_string(), "intro".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn initialize_existing_stages_readable_paths() {
        let (dir, backend) = backend_in_temp();
        let source = write_source(dir.path(), b"tarball-bytes");
        backend.store("guide", "intro", &source).await.unwrap();

        let archives = backend.initialize_existing().await.unwrap();
        assert_eq!(archives.len(), 1);
        assert_eq!(std::fs::read(archives[0].path()).unwrap(), b"tarball-bytes");
    }

    #[tokio::test]
    async fn initialize_existing_skips_stray_files() {
        let (dir, backend) = backend_in_temp();
        let source = write_source(dir.path(), b"bytes");
        backend.store("guide", "intro", &source).await.unwrap();

        // Stray non-archive entries must not surface as documents.
        std::fs::write(backend.root().join("README"), b"not a category").unwrap();
        std::fs::write(backend.root().join("guide").join("notes.txt"), b"x").unwrap();

        let archives = backend.initialize_existing().await.unwrap();
        assert_eq!(archives.len(), 1);
        assert_eq!(archives[0].doc_name(), "intro");
    }

    #[tokio::test]
    async fn initialize_existing_on_empty_root() {
        let (_dir, backend) = backend_in_temp();
        assert!(backend.initialize_existing().await.unwrap().is_empty());
    }
}
