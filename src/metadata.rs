//! Page-level title metadata.
//!
//! The title resolver needs two host scalars besides the tree: the document
//! title and a structured `og:title`-equivalent. A host may pass either in
//! [`PageContext`]; otherwise they are read from `<title>` and the meta tags.

use dom_query::{Document, Selection};

use crate::options::PageContext;

/// Title metadata for one extraction. Empty strings mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Host-reported document title, untrimmed of any site suffix.
    pub document_title: String,

    /// Structured page-title metadata.
    pub og_title: String,
}

impl PageMetadata {
    /// Resolves both titles, preferring values supplied by the host.
    #[must_use]
    pub fn resolve(doc: &Document, ctx: &PageContext) -> Self {
        let document_title = ctx
            .document_title
            .as_ref()
            .map_or_else(|| title_element(doc), |t| t.trim().to_string());
        let og_title = ctx
            .og_title
            .as_ref()
            .map_or_else(|| meta_og_title(doc), |t| t.trim().to_string());

        Self {
            document_title,
            og_title,
        }
    }
}

/// Trimmed text of the first `<title>` element.
#[must_use]
pub fn title_element(doc: &Document) -> String {
    doc.select("title")
        .nodes()
        .first()
        .map(|node| node.text().trim().to_string())
        .unwrap_or_default()
}

/// Content of the first non-empty `og:title` meta tag.
///
/// Accepts both `property="og:title"` and the `name="og:title"` variant.
#[must_use]
pub fn meta_og_title(doc: &Document) -> String {
    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);
        let key = meta
            .attr("property")
            .or_else(|| meta.attr("name"))
            .unwrap_or_default();
        if !key.trim().eq_ignore_ascii_case("og:title") {
            continue;
        }
        let content = meta.attr("content").unwrap_or_default();
        let content = content.trim();
        if !content.is_empty() {
            return content.to_string();
        }
    }
    String::new()
}
