//! Tree Query Utilities
//!
//! Class-word matching and text collection over a scope. A scope is any
//! `Selection`; lookups cover its descendants (never the scope node itself)
//! in document order. Nothing here returns an error: an unsupported selector
//! or an empty scope is simply "no match".

use dom_query::{Document, NodeRef, Selection};

use crate::dom;
use crate::patterns::ClassMatcher;

/// Scope covering the whole document.
#[must_use]
pub fn document_scope(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

/// True if the node's class attribute matches any word in `words`.
#[inline]
#[must_use]
pub fn matches_any_class_word(node: &NodeRef, words: &ClassMatcher) -> bool {
    words.is_match(&dom::class(node))
}

/// All descendants of `scope` for which `rule` holds, in document order.
///
/// # Example
///
/// ```rust
/// use jobpost_extract::{dom, selector};
///
/// let doc = dom::parse(r#"<div><p class="item">1</p><p>2</p><p class="item">3</p></div>"#);
/// let root = doc.select("div");
///
/// let items = selector::query_all(&root, |n| dom::class(n).contains("item"));
/// assert_eq!(items.len(), 2);
/// ```
#[must_use]
pub fn query_all<'a, F>(scope: &Selection<'a>, rule: F) -> Vec<NodeRef<'a>>
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    scope
        .select("*")
        .nodes()
        .iter()
        .filter(|node| rule(node))
        .copied()
        .collect()
}

/// Descendants of `scope` whose class matches `words`, in document order.
#[must_use]
pub fn collect_by_class<'a>(scope: &Selection<'a>, words: &ClassMatcher) -> Vec<NodeRef<'a>> {
    scope
        .select("[class]")
        .nodes()
        .iter()
        .filter(|node| matches_any_class_word(node, words))
        .copied()
        .collect()
}

/// First class-matched text within `max_len`, else the first non-empty one.
///
/// Short specific labels (a location chip) beat long containers that carry
/// the same class words. Returns an empty string when nothing has text.
#[must_use]
pub fn first_non_empty_text(scope: &Selection, words: &ClassMatcher, max_len: usize) -> String {
    let texts: Vec<String> = collect_by_class(scope, words)
        .iter()
        .map(dom::trimmed_text)
        .filter(|t| !t.is_empty())
        .collect();

    texts
        .iter()
        .find(|t| dom::char_len(t) <= max_len)
        .or_else(|| texts.first())
        .cloned()
        .unwrap_or_default()
}

/// Joins the distinct texts of every match of every selector group.
///
/// Texts are deduplicated by exact equality and joined with one space.
/// Selector groups that fail to parse contribute nothing.
#[must_use]
pub fn collect_multiple_text<S: AsRef<str>>(scope: &Selection, selectors: &[S]) -> String {
    let mut texts: Vec<String> = Vec::new();

    for selector in selectors {
        let Some(matches) = scope.try_select(selector.as_ref()) else {
            tracing::trace!(selector = selector.as_ref(), "selector rejected");
            continue;
        };
        for node in matches.nodes() {
            let text = dom::trimmed_text(node);
            if !text.is_empty() && !texts.contains(&text) {
                texts.push(text);
            }
        }
    }

    texts.join(" ").trim().to_string()
}
