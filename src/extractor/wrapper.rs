//! Wrapper resolution.
//!
//! The wrapper of an anchor is its nearest strict ancestor whose subtree
//! holds a title-like element, i.e. the detail panel that the anchor's
//! section belongs to (as opposed to a search-results list).

use dom_query::NodeRef;

use super::index::TreeIndex;
use crate::options::Options;

/// True if an element with this class and trimmed text length looks like
/// the posting title rather than a heading that merely mentions the word.
///
/// A title-specific class always qualifies; the loose "title" class only
/// qualifies for text shorter than `generic_title_max_len` (rejects
/// "Job Title Requirements"-style section headings).
#[must_use]
pub fn title_like_class(class: &str, len: usize, options: &Options) -> bool {
    if len == 0 || len > options.title_like_max_len {
        return false;
    }
    let vocabulary = &options.vocabulary;
    if vocabulary.job_title.is_match(class) {
        return true;
    }
    vocabulary.generic_title.is_match(class) && len < options.generic_title_max_len
}

/// Nearest strict ancestor of `anchor` containing a title-like element.
///
/// Returns `None` when no ancestor below `<body>` qualifies.
#[must_use]
pub fn resolve_wrapper<'a>(anchor: &NodeRef<'a>, index: &TreeIndex<'a>) -> Option<NodeRef<'a>> {
    index.wrapper(anchor)
}
