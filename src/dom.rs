//! DOM access helpers over `dom_query`.
//!
//! `dom_query` stores the document as an arena: every node is a `NodeId`
//! into one node table and parent links are indices, so upward walks from any
//! node are safe and the tree is acyclic by construction. The helpers here
//! give the extractor the handful of read operations it needs and stop every
//! upward walk at the `<body>` sentinel.

pub use dom_query::{Document, NodeRef, Selection};
pub use tendril::StrTendril;

use crate::patterns::HIDDEN_STYLE;

// === Attributes ===

/// Class attribute, or empty string when absent.
#[inline]
#[must_use]
pub fn class(node: &NodeRef) -> StrTendril {
    node.attr("class").unwrap_or_default()
}

/// Lowercase tag name, or `None` for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// True for `h1` through `h6`.
#[must_use]
pub fn is_heading(node: &NodeRef) -> bool {
    matches!(
        tag_name(node).as_deref(),
        Some("h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    )
}

// === Text ===

/// Text content of the node and all descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Trimmed text content as an owned string.
#[must_use]
pub fn trimmed_text(node: &NodeRef) -> String {
    text_content(node).trim().to_string()
}

/// Character count (not bytes) of a string.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Keeps at most `max` characters of `s`.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}

// === Tree Navigation ===

/// True when the node is the `<body>` sentinel or not an element at all.
#[must_use]
pub fn is_sentinel(node: &NodeRef) -> bool {
    match tag_name(node) {
        Some(tag) => tag == "body" || tag == "html",
        None => true,
    }
}

/// Strict ancestors of `node`, nearest first, stopping before `<body>`.
#[must_use]
pub fn ancestors<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut current = node.parent();
    while let Some(parent) = current {
        if is_sentinel(&parent) {
            break;
        }
        current = parent.parent();
        out.push(parent);
    }
    out
}

/// Element children in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// The main-content landmark: `<main>`, then `[role=main]`, then `<body>`.
#[must_use]
pub fn main_content<'a>(doc: &'a Document) -> Option<NodeRef<'a>> {
    ["main", "[role='main']", "body"].iter().find_map(|selector| {
        doc.select(selector).nodes().first().copied()
    })
}

/// True unless the node or an ancestor is hidden via `hidden`,
/// `aria-hidden="true"` or an inline `display:none` style.
///
/// Approximates "has an offset parent" for a document that is not rendered.
#[must_use]
pub fn is_rendered(node: &NodeRef) -> bool {
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.is_element() {
            if n.has_attr("hidden") {
                return false;
            }
            if n
                .attr("aria-hidden")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
            {
                return false;
            }
            if n.attr("style").is_some_and(|s| HIDDEN_STYLE.is_match(&s)) {
                return false;
            }
        }
        current = n.parent();
    }
    true
}

// === Parsing ===

/// Parse HTML string into document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
