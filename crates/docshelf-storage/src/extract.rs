//! Archive extraction into the servable static tree.
//!
//! Every bundle extracts to a deterministic target:
//! `{static_root}/{category}/{doc_name}`. Extraction is an idempotent
//! overwrite -- the fresh archive always wins, contents are never merged
//! with a prior extraction.
//!
//! The archive is unpacked into a scratch directory first and only swapped
//! into place after the entry-point check passes, so a corrupt or
//! entrypoint-less upload never takes down a previously served version.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use docshelf_types::INDEX_FILE;
use flate2::read::GzDecoder;
use tracing::info;

use crate::error::{StorageError, StorageResult};

/// Unpacks documentation archives into the static tree.
pub struct Extractor {
    static_root: PathBuf,
}

impl Extractor {
    /// Create an extractor rooted at `static_root`, creating it if absent.
    pub fn new(static_root: impl Into<PathBuf>) -> StorageResult<Self> {
        let static_root = static_root.into();
        std::fs::create_dir_all(&static_root)?;
        Ok(Self { static_root })
    }

    /// Root directory of the servable static tree.
    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    /// The extraction target for a key: `{static_root}/{category}/{doc_name}`.
    pub fn target_dir(&self, category: &str, doc_name: &str) -> PathBuf {
        self.static_root.join(category).join(doc_name)
    }

    /// Unpack `archive_path` into the target for `(category, doc_name)`,
    /// replacing any prior extraction, and return the relative servable path
    /// (`static/{category}/{doc_name}`).
    ///
    /// Fails with [`StorageError::ArchiveUnreadable`] if the archive cannot
    /// be parsed and [`StorageError::MissingEntrypoint`] if the unpacked root
    /// lacks `index.html`; in both cases the prior extraction is untouched.
    pub fn extract(
        &self,
        category: &str,
        doc_name: &str,
        archive_path: &Path,
    ) -> StorageResult<String> {
        info!(category, doc_name, "extracting document archive");

        let category_dir = self.static_root.join(category);
        std::fs::create_dir_all(&category_dir)?;

        // Unpack into a scratch dir on the same filesystem so the final swap
        // is a rename. The scratch dir cleans itself up on every early exit.
        let scratch = tempfile::tempdir_in(&self.static_root)?;
        let file = File::open(archive_path).map_err(|e| StorageError::ArchiveUnreadable {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut archive = tar::Archive::new(GzDecoder::new(BufReader::new(file)));
        archive
            .unpack(scratch.path())
            .map_err(|e| StorageError::ArchiveUnreadable {
                path: archive_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if !scratch.path().join(INDEX_FILE).is_file() {
            return Err(StorageError::MissingEntrypoint {
                category: category.to_string(),
                doc_name: doc_name.to_string(),
            });
        }

        let target_dir = category_dir.join(doc_name);
        if target_dir.exists() {
            std::fs::remove_dir_all(&target_dir)?;
        }
        let scratch_path = scratch.keep();
        if let Err(e) = std::fs::rename(&scratch_path, &target_dir) {
            let _ = std::fs::remove_dir_all(&scratch_path);
            return Err(e.into());
        }

        Ok(format!("static/{category}/{doc_name}"))
    }
}
