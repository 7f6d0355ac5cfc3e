//! Anchor scoring and selection.
//!
//! Each anchor is scored by walking its ancestors up to `<body>`:
//! +2 for every ancestor whose class matches the detail-container
//! vocabulary, +1 for every ancestor holding more than
//! `large_container_len` characters of text. The score is not normalized by
//! depth, so a deep unrelated container can outscore a shallow correct one.

use dom_query::NodeRef;

use super::index::TreeIndex;
use super::wrapper::resolve_wrapper;
use crate::options::Options;

/// An anchor paired with its (possibly unresolved) wrapper and score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    /// The marker anchor.
    pub anchor: NodeRef<'a>,
    /// Nearest ancestor holding a title-like element, if any.
    pub wrapper: Option<NodeRef<'a>>,
    /// Contextual score; higher is better.
    pub score: u32,
}

/// Points one ancestor contributes, from its class and trimmed text length.
#[must_use]
pub fn ancestor_points(class: &str, trimmed_len: usize, options: &Options) -> u32 {
    let mut points = 0;
    if options.vocabulary.detail_container.is_match(class) {
        points += 2;
    }
    if trimmed_len > options.large_container_len {
        points += 1;
    }
    points
}

/// Ancestor score of a single anchor.
#[inline]
#[must_use]
pub fn score_anchor(anchor: &NodeRef, index: &TreeIndex) -> u32 {
    index.ancestor_score(anchor)
}

/// Resolves wrapper and score for every anchor, keeping encounter order.
#[must_use]
pub fn score_candidates<'a>(anchors: &[NodeRef<'a>], index: &TreeIndex<'a>) -> Vec<ScoredCandidate<'a>> {
    anchors
        .iter()
        .map(|anchor| ScoredCandidate {
            anchor: *anchor,
            wrapper: resolve_wrapper(anchor, index),
            score: score_anchor(anchor, index),
        })
        .collect()
}

/// Picks the best candidate.
///
/// Wrapper-bearing candidates win over wrapper-less ones regardless of score.
/// Within a group the highest score wins and ties go to the first encountered.
#[must_use]
pub fn select_best<'a>(candidates: &[ScoredCandidate<'a>]) -> Option<ScoredCandidate<'a>> {
    let with_wrapper = candidates.iter().filter(|c| c.wrapper.is_some());
    first_max(with_wrapper).or_else(|| first_max(candidates.iter()))
}

fn first_max<'c, 'a: 'c>(
    candidates: impl Iterator<Item = &'c ScoredCandidate<'a>>,
) -> Option<ScoredCandidate<'a>> {
    candidates.fold(None, |best: Option<ScoredCandidate<'a>>, candidate| match best {
        Some(b) if b.score >= candidate.score => Some(b),
        _ => Some(*candidate),
    })
}
