//! Grouped, sorted listing view of registered documents.
//!
//! The listing is a derived, read-only view rebuilt from registry contents on
//! each request: documents grouped by category in ascending lexical order,
//! each group's documents sorted ascending by name. Serialized as
//! `[{category, documents: [{doc_name, doc_path}, ...]}, ...]` for the
//! front end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Entry point file expected at the root of every extracted bundle.
pub const INDEX_FILE: &str = "index.html";

/// A single registered document within a category group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Document name (the part of the key after the first underscore).
    pub doc_name: String,
    /// Servable path to the document entry point, e.g.
    /// `static/guide/intro/index.html`.
    pub doc_path: String,
}

/// All documents registered under one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub documents: Vec<DocumentMeta>,
}

/// Group `(category, document)` pairs into the sorted listing view.
///
/// Categories ascend lexically; documents within a category ascend by
/// `doc_name`. Input order is irrelevant.
pub fn group_by_category(
    entries: impl IntoIterator<Item = (String, DocumentMeta)>,
) -> Vec<CategoryGroup> {
    let mut grouped: BTreeMap<String, Vec<DocumentMeta>> = BTreeMap::new();
    for (category, meta) in entries {
        grouped.entry(category).or_default().push(meta);
    }

    grouped
        .into_iter()
        .map(|(category, mut documents)| {
            documents.sort_by(|a, b| a.doc_name.cmp(&b.doc_name));
            CategoryGroup {
                category,
                documents,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(doc_name: &str, category: &str) -> (String, DocumentMeta) {
        (
            category.to_string(),
            DocumentMeta {
                doc_name: doc_name.to_string(),
                doc_path: format!("static/{category}/{doc_name}/{INDEX_FILE}"),
            },
        )
    }

    #[test]
    fn categories_ascend() {
        let listing = group_by_category(vec![
            meta("one", "zeta"),
            meta("two", "alpha"),
            meta("three", "mid"),
        ]);
        let categories: Vec<&str> = listing.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn documents_ascend_within_category() {
        let listing = group_by_category(vec![
            meta("zz", "guide"),
            meta("aa", "guide"),
            meta("mm", "guide"),
        ]);
        assert_eq!(listing.len(), 1);
        let names: Vec<&str> = listing[0]
            .documents
            .iter()
            .map(|d| d.doc_name.as_str())
            .collect();
        assert_eq!(names, vec!["aa", "mm", "zz"]);
    }

    #[test]
    fn overlapping_name_prefixes_sort_lexically() {
        let listing = group_by_category(vec![
            meta("client_v2", "api"),
            meta("client", "api"),
            meta("client_v10", "api"),
        ]);
        let names: Vec<&str> = listing[0]
            .documents
            .iter()
            .map(|d| d.doc_name.as_str())
            .collect();
        // Plain lexical order: "client" < "client_v10" < "client_v2".
        assert_eq!(names, vec!["client", "client_v10", "client_v2"]);
    }

    #[test]
    fn empty_input_yields_empty_listing() {
        let listing = group_by_category(Vec::new());
        assert!(listing.is_empty());
    }

    #[test]
    fn serializes_to_expected_shape() {
        let listing = group_by_category(vec![meta("intro", "guide")]);
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "category": "guide",
                "documents": [{
                    "doc_name": "intro",
                    "doc_path": "static/guide/intro/index.html"
                }]
            }])
        );
    }
}
