//! Marker anchor location.
//!
//! An anchor is any element whose own text (all descendant text, trimmed)
//! is non-empty, shorter than `anchor_max_len` and contains a marker phrase
//! such as "About the job". A heading and the short block wrapping it can
//! both qualify; both are kept.

use dom_query::NodeRef;

use super::index::TreeIndex;
use crate::dom;
use crate::options::Options;

/// Collects every anchor under `scope` (scope included), in pre-order.
///
/// The walk uses an explicit stack so arbitrarily deep trees are safe.
#[must_use]
pub fn locate_anchors<'a>(scope: &NodeRef<'a>, index: &TreeIndex<'a>, options: &Options) -> Vec<NodeRef<'a>> {
    let mut anchors = Vec::new();
    let mut stack = vec![*scope];

    while let Some(node) = stack.pop() {
        if is_anchor(&node, index, options) {
            anchors.push(node);
        }
        // Reverse so the first child is visited next.
        stack.extend(dom::element_children(&node).into_iter().rev());
    }

    tracing::trace!(anchors = anchors.len(), "marker anchors located");
    anchors
}

/// True if the node's trimmed text is a marker-bearing short block.
#[must_use]
pub fn is_anchor(node: &NodeRef, index: &TreeIndex, options: &Options) -> bool {
    // Only texts shorter than `anchor_max_len` are kept by the index.
    index
        .short_text(node)
        .is_some_and(|text| !text.is_empty() && options.vocabulary.markers.is_match(text))
}
