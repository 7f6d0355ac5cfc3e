//! "Show more" expansion.
//!
//! Before the description is read, every rendered expand control is clicked
//! through the host's [`Expander`]. Clicks are fire-and-forget: nothing waits
//! for the host to re-render, so late content can be missed.

use dom_query::{Document, NodeRef, Selection};

use crate::dom;
use crate::error::Result;
use crate::options::Options;
use crate::selector;

/// Host click primitive.
///
/// Implementations must tolerate controls that cannot be clicked and report
/// them as errors; the extractor logs and skips them.
pub trait Expander {
    /// Simulates a click on `control`.
    fn click(&self, control: &Selection) -> Result<()>;
}

/// Expander for static snapshots: clicking does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExpander;

impl Expander for NoopExpander {
    fn click(&self, _control: &Selection) -> Result<()> {
        Ok(())
    }
}

/// True if the element is an expand control by markup alone.
///
/// Matches buttons whose `aria-label` mentions the expand label, elements
/// carrying an expand-control class, and `data-test-id="show-more-button"`.
#[must_use]
pub fn is_expand_control(node: &NodeRef, options: &Options) -> bool {
    let vocabulary = &options.vocabulary;

    if dom::tag_name(node).as_deref() == Some("button")
        && node
            .attr("aria-label")
            .is_some_and(|label| vocabulary.expand_label.is_match(&label))
    {
        return true;
    }
    if vocabulary.expand_controls.is_match(&dom::class(node)) {
        return true;
    }
    node.attr("data-test-id")
        .is_some_and(|v| &*v == "show-more-button")
}

/// Clicks every rendered expand control whose text carries the expand label.
///
/// Returns the number of successful clicks.
pub fn expand_show_more(doc: &Document, options: &Options, expander: &dyn Expander) -> usize {
    let scope = selector::document_scope(doc);
    let controls = selector::query_all(&scope, |n| is_expand_control(n, options));

    let mut clicked = 0;
    for control in controls {
        if !dom::is_rendered(&control) {
            continue;
        }
        let text = dom::text_content(&control);
        if !options.vocabulary.expand_label.is_match(&text) {
            continue;
        }
        match expander.click(&Selection::from(control)) {
            Ok(()) => clicked += 1,
            Err(err) => tracing::debug!(error = %err, "expand click ignored"),
        }
    }

    tracing::debug!(clicked, "expand controls triggered");
    clicked
}
