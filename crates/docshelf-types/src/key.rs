//! The composite document key.
//!
//! A document key has the form `category_docname` and is split on the *first*
//! underscore only: the category is the segment before it, the docname is
//! everything after. `api_v2_client` therefore names the document `v2_client`
//! in category `api`. Keys arrive from upload filenames with the `.tar.gz`
//! suffix stripped.

use std::fmt;
use std::str::FromStr;

use crate::error::{KeyError, Result};

/// Filename suffix for stored documentation archives.
pub const ARCHIVE_SUFFIX: &str = ".tar.gz";

/// Composite identifier for a documentation bundle.
///
/// A key uniquely identifies at most one live registry entry at any time.
///
/// # Examples
///
/// ```
/// use docshelf_types::DocumentKey;
///
/// let key: DocumentKey = "api_v2_client".parse().unwrap();
/// assert_eq!(key.category(), "api");
/// assert_eq!(key.doc_name(), "v2_client");
/// assert_eq!(key.to_string(), "api_v2_client");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    category: String,
    doc_name: String,
}

impl DocumentKey {
    /// Parse a `category_docname` key, splitting on the first underscore.
    pub fn parse(key: &str) -> Result<Self> {
        let Some((category, doc_name)) = key.split_once('_') else {
            return Err(KeyError::InvalidKey {
                key: key.to_string(),
                reason: "missing '_' separator".into(),
            });
        };
        if category.is_empty() {
            return Err(KeyError::InvalidKey {
                key: key.to_string(),
                reason: "category must not be empty".into(),
            });
        }
        if doc_name.is_empty() {
            return Err(KeyError::InvalidKey {
                key: key.to_string(),
                reason: "document name must not be empty".into(),
            });
        }
        Ok(Self {
            category: category.to_string(),
            doc_name: doc_name.to_string(),
        })
    }

    /// Derive a key from an uploaded archive filename.
    ///
    /// Strips a trailing [`ARCHIVE_SUFFIX`] if present, then parses the
    /// remainder as a key.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let stem = filename.strip_suffix(ARCHIVE_SUFFIX).unwrap_or(filename);
        Self::parse(stem)
    }

    /// The path segment before the first underscore.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Everything after the first underscore.
    pub fn doc_name(&self) -> &str {
        &self.doc_name
    }

    /// The archive filename this key is stored under: `{doc_name}.tar.gz`.
    pub fn archive_filename(&self) -> String {
        format!("{}{}", self.doc_name, ARCHIVE_SUFFIX)
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.category, self.doc_name)
    }
}

impl FromStr for DocumentKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
