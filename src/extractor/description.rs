//! Description resolution.
//!
//! Ordered cascade, first success wins. Every tier must reach
//! `min_description_len` characters of trimmed text:
//!
//! 1. The anchor's section: the anchor itself, or its parent when the anchor
//!    is a heading (even when that parent is `<body>`).
//! 2. The section's ancestors, nearest first, up to `<body>`.
//! 3. The longest element anywhere whose class matches the description
//!    vocabulary.
//! 4. The text of `<body>` with page chrome skipped.
//!
//! Length checks read the [`TreeIndex`]; text is materialized only for the
//! node that passes.
//!
//! The accepted text is whitespace-normalized, then truncated to
//! `max_description_len` characters.

use dom_query::{Document, NodeRef};

use super::index::TreeIndex;
use super::{first_success, Strategy};
use crate::dom;
use crate::options::Options;
use crate::patterns::{BLANK_LINES, WHITESPACE_NORMALIZE};
use crate::selector;

/// Tags whose subtrees are left out of the last-resort body text.
pub const CHROME_TAGS: &[&str] = &[
    "nav", "header", "footer", "aside", "button", "script", "style", "noscript", "template",
];

/// `role` values treated like chrome tags.
pub const CHROME_ROLES: &[&str] = &["banner", "navigation", "complementary"];

/// Which cascade tier produced the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionSource {
    /// The anchor or its heading's parent.
    Section,
    /// An ancestor of the section.
    Ancestor,
    /// The longest description-class element.
    ClassMatch,
    /// The body text with chrome skipped.
    Body,
}

impl DescriptionSource {
    /// Stable lowercase label for diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Ancestor => "ancestor",
            Self::ClassMatch => "class_match",
            Self::Body => "body",
        }
    }
}

/// A resolved description and the tier that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    /// Normalized, truncated text. Empty when every tier failed.
    pub text: String,
    /// Producing tier, `None` when every tier failed.
    pub source: Option<DescriptionSource>,
}

/// Collapses whitespace runs to single spaces, collapses blank lines, trims.
///
/// # Example
///
/// ```rust
/// use jobpost_extract::extractor::description::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Build\n\n   things \t fast "), "Build things fast");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = WHITESPACE_NORMALIZE.replace_all(text, " ");
    let collapsed = BLANK_LINES.replace_all(&collapsed, "\n");
    collapsed.trim().to_string()
}

/// Trimmed text of `node` if it reaches the length floor.
fn meets_floor(node: &NodeRef, index: &TreeIndex, options: &Options) -> Option<String> {
    (index.trimmed_len(node) >= options.min_description_len).then(|| dom::trimmed_text(node))
}

/// The anchor, or its parent element when the anchor is a heading.
///
/// A heading directly under `<body>` yields `<body>` itself.
#[must_use]
pub fn section_of<'a>(anchor: &NodeRef<'a>) -> NodeRef<'a> {
    if dom::is_heading(anchor) {
        if let Some(parent) = anchor.parent().filter(NodeRef::is_element) {
            return parent;
        }
    }
    *anchor
}

/// Longest description-class element meeting the floor.
///
/// Ties keep the first element in document order.
#[must_use]
pub fn longest_class_match(doc: &Document, index: &TreeIndex, options: &Options) -> Option<String> {
    let scope = selector::document_scope(doc);
    selector::collect_by_class(&scope, &options.vocabulary.description_words)
        .into_iter()
        .map(|node| (index.trimmed_len(&node), node))
        .filter(|(len, _)| *len >= options.min_description_len)
        .fold(None, |best: Option<(usize, NodeRef)>, (len, node)| match best {
            Some((best_len, _)) if best_len >= len => best,
            _ => Some((len, node)),
        })
        .map(|(_, node)| dom::trimmed_text(&node))
}

/// True for elements whose subtree is page chrome.
#[must_use]
pub fn is_chrome(node: &NodeRef) -> bool {
    dom::tag_name(node).is_some_and(|tag| CHROME_TAGS.contains(&tag.as_str()))
        || node.attr("role").is_some_and(|role| CHROME_ROLES.contains(&role.trim()))
}

/// Trimmed `<body>` text, skipping chrome subtrees.
///
/// Reads the document in place; nothing is removed from it.
#[must_use]
pub fn stripped_body_text(doc: &Document) -> String {
    let Some(body) = doc.select("body").nodes().first().copied() else {
        return String::new();
    };

    let mut text = String::new();
    let mut stack = vec![body];
    while let Some(node) = stack.pop() {
        if node.is_text() {
            text.push_str(&node.text());
        } else if !(node.is_element() && is_chrome(&node)) {
            stack.extend(node.children().into_iter().rev());
        }
    }
    text.trim().to_string()
}

/// Runs the cascade for an optional selected anchor.
///
/// Any expand controls must already have been triggered.
#[must_use]
pub fn resolve_description(
    doc: &Document,
    anchor: Option<NodeRef>,
    index: &TreeIndex,
    options: &Options,
) -> Description {
    let section = anchor.as_ref().map(section_of);

    let tiers: [Strategy<'_, (DescriptionSource, String)>; 4] = [
        Box::new(|| {
            let section = section?;
            meets_floor(&section, index, options).map(|t| (DescriptionSource::Section, t))
        }),
        Box::new(|| {
            let section = section?;
            dom::ancestors(&section)
                .iter()
                .find_map(|ancestor| meets_floor(ancestor, index, options))
                .map(|t| (DescriptionSource::Ancestor, t))
        }),
        Box::new(|| longest_class_match(doc, index, options).map(|t| (DescriptionSource::ClassMatch, t))),
        Box::new(|| {
            let text = stripped_body_text(doc);
            (dom::char_len(&text) >= options.min_description_len)
                .then_some((DescriptionSource::Body, text))
        }),
    ];

    match first_success(&tiers) {
        Some((source, raw)) => {
            let text = dom::truncate_chars(&normalize_whitespace(&raw), options.max_description_len);
            tracing::debug!(tier = source.as_str(), len = dom::char_len(&text), "description resolved");
            Description {
                text,
                source: Some(source),
            }
        }
        None => {
            tracing::debug!("no description tier reached the floor");
            Description::default()
        }
    }
}
