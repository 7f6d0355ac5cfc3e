//! Extraction pipeline.
//!
//! Orchestrates one pass over a document snapshot:
//!
//! 0. index the document once (text lengths, title-like subtrees, scores)
//! 1. locate marker anchors under the main-content landmark
//! 2. resolve wrappers, score, and select the best anchor
//! 3. resolve title, company and location
//! 4. trigger expand controls, then resolve the description
//! 5. classify the page and canonicalize the source URL
//!
//! Nothing here fails: every missing piece degrades to an empty field.

use dom_query::Document;

use super::anchor::locate_anchors;
use super::classify::{is_job_page, Signals};
use super::description::resolve_description;
use super::expand::{expand_show_more, Expander};
use super::fields::{resolve_company, resolve_location, resolve_title};
use super::index::TreeIndex;
use super::scoring::{score_candidates, select_best};
use crate::dom;
use crate::metadata::PageMetadata;
use crate::options::{Options, PageContext};
use crate::result::{Diagnostics, ExtractionResult};
use crate::url_utils::canonicalize_url;

/// Extracts a job posting from a parsed document.
///
/// `expander` is asked to click every rendered "show more" control before
/// the description is read; pass [`NoopExpander`](super::NoopExpander) for
/// static snapshots.
#[must_use]
pub fn extract_document(
    doc: &Document,
    ctx: &PageContext,
    options: &Options,
    expander: &dyn Expander,
) -> ExtractionResult {
    let page = PageMetadata::resolve(doc, ctx);

    let index = TreeIndex::build(doc, options);

    let anchors = dom::main_content(doc)
        .map(|scope| locate_anchors(&scope, &index, options))
        .unwrap_or_default();
    let candidates = score_candidates(&anchors, &index);
    let best = select_best(&candidates);

    let anchor = best.map(|c| c.anchor);
    let wrapper = best.and_then(|c| c.wrapper);
    tracing::debug!(
        anchors = anchors.len(),
        score = best.map(|c| c.score),
        wrapper = wrapper.is_some(),
        "anchor selected"
    );

    let title = resolve_title(doc, wrapper, &page, options);
    let company = resolve_company(doc, wrapper, options);
    let location = resolve_location(doc, wrapper, options);

    let expanded = expand_show_more(doc, options, expander);
    // Clicks may have changed the document under the index.
    let index = if expanded > 0 { TreeIndex::build(doc, options) } else { index };
    let description = resolve_description(doc, anchor, &index, options);

    let job_page = is_job_page(
        &Signals {
            title: &title,
            company: &company,
            location: &location,
            description: &description.text,
            url: &ctx.url,
        },
        options,
    );

    let mut result = ExtractionResult {
        title,
        company,
        location,
        description: description.text,
        url: canonicalize_url(&ctx.url, options),
        is_job_page: job_page,
        diagnostics: Diagnostics {
            anchors: anchors.len(),
            anchor_score: best.map(|c| c.score),
            wrapper_found: wrapper.is_some(),
            description_source: description.source.map(|s| s.as_str().to_string()),
            expanded,
            ..Diagnostics::default()
        },
    };
    result.diagnostics.selectors_used = result.selectors_used();
    result.diagnostics.lengths = [
        ("title", &result.title),
        ("company", &result.company),
        ("location", &result.location),
        ("description", &result.description),
    ]
    .into_iter()
    .map(|(field, value)| (field.to_string(), dom::char_len(value)))
    .collect();

    tracing::debug!(
        is_job_page = result.is_job_page,
        url = %result.url,
        "extraction finished"
    );
    result
}
