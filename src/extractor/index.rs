//! Per-document node table.
//!
//! Anchor location, wrapper resolution and scoring all ask the same
//! questions of every ancestor of every candidate: how long is its trimmed
//! text, does its subtree hold a title-like element, what do its ancestors
//! score. Answering them by re-walking subtrees is quadratic on deep chains
//! and cubic once every level is a candidate, so the answers are computed
//! once per document here, keyed by `NodeId`:
//!
//! - a post-order pass folds text spans, short texts and title-like flags
//!   from children into parents
//! - a pre-order pass pushes ancestor scores and nearest wrappers down
//!
//! Both passes are iterative; depth only costs heap.

use std::collections::HashMap;

use dom_query::{Document, NodeId, NodeRef};

use super::scoring::ancestor_points;
use super::wrapper::title_like_class;
use crate::dom;
use crate::options::Options;

/// Whitespace shape of a text run, enough to derive its trimmed length
/// without materializing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    total: usize,
    leading: usize,
    trailing: usize,
    blank: bool,
}

impl Span {
    const EMPTY: Span = Span {
        total: 0,
        leading: 0,
        trailing: 0,
        blank: true,
    };

    fn of(text: &str) -> Self {
        let total = dom::char_len(text);
        let leading = text.chars().take_while(|c| c.is_whitespace()).count();
        if leading == total {
            return Span {
                total,
                leading: total,
                trailing: total,
                blank: true,
            };
        }
        let trailing = text.chars().rev().take_while(|c| c.is_whitespace()).count();
        Span {
            total,
            leading,
            trailing,
            blank: false,
        }
    }

    /// Span of `self` followed by `next`.
    fn then(self, next: Span) -> Self {
        Span {
            total: self.total + next.total,
            leading: if self.blank { self.total + next.leading } else { self.leading },
            trailing: if next.blank { self.trailing + next.total } else { next.trailing },
            blank: self.blank && next.blank,
        }
    }

    fn trimmed_len(self) -> usize {
        if self.blank {
            0
        } else {
            self.total - self.leading - self.trailing
        }
    }
}

struct Entry<'a> {
    span: Span,
    /// Full text, kept only while the trimmed text is shorter than the
    /// anchor limit.
    short_text: Option<String>,
    title_like: bool,
    /// Some strict descendant is title-like.
    holds_title_like: bool,
    /// Sum of ancestor points over strict ancestors below `<body>`.
    score: u32,
    /// Nearest strict ancestor below `<body>` that holds a title-like element.
    wrapper: Option<NodeRef<'a>>,
}

/// Precomputed per-node facts for one document snapshot.
///
/// Built once per extraction; rebuild after the document is mutated.
pub struct TreeIndex<'a> {
    entries: HashMap<NodeId, Entry<'a>>,
}

impl<'a> TreeIndex<'a> {
    /// Indexes every node of `doc`.
    #[must_use]
    pub fn build(doc: &'a Document, options: &Options) -> Self {
        let order = pre_order(doc.root());
        let mut entries: HashMap<NodeId, Entry<'a>> = HashMap::with_capacity(order.len());

        // Children precede parents in reverse pre-order.
        for node in order.iter().rev() {
            let entry = if node.is_text() {
                let text = node.text();
                let span = Span::of(&text);
                Entry {
                    span,
                    short_text: (span.trimmed_len() < options.anchor_max_len).then(|| text.to_string()),
                    ..Entry::leaf()
                }
            } else {
                // Comments and doctypes have no children and fold to empty.
                fold_children(node, &entries, options)
            };
            entries.insert(node.id, entry);
        }

        for node in &order {
            let Some(entry) = entries.get(&node.id) else {
                continue;
            };
            // What `node` hands down to its children as their ancestor chain.
            let (score, wrapper) = if dom::is_sentinel(node) {
                (0, None)
            } else {
                let class = dom::class(node);
                let points = ancestor_points(&class, entry.span.trimmed_len(), options);
                let wrapper = if entry.holds_title_like { Some(*node) } else { entry.wrapper };
                (entry.score + points, wrapper)
            };
            for child in node.children() {
                if let Some(entry) = entries.get_mut(&child.id) {
                    entry.score = score;
                    entry.wrapper = wrapper;
                }
            }
        }

        tracing::trace!(nodes = entries.len(), "tree index built");
        TreeIndex { entries }
    }

    /// Character count of the node's trimmed text.
    #[must_use]
    pub fn trimmed_len(&self, node: &NodeRef) -> usize {
        self.entries.get(&node.id).map_or(0, |e| e.span.trimmed_len())
    }

    /// Trimmed text, available only while it is shorter than `anchor_max_len`.
    #[must_use]
    pub fn short_text(&self, node: &NodeRef) -> Option<&str> {
        self.entries
            .get(&node.id)
            .and_then(|e| e.short_text.as_deref())
            .map(str::trim)
    }

    /// Sum of ancestor points over the node's strict ancestors below `<body>`.
    #[must_use]
    pub fn ancestor_score(&self, node: &NodeRef) -> u32 {
        self.entries.get(&node.id).map_or(0, |e| e.score)
    }

    /// Nearest strict ancestor below `<body>` holding a title-like element.
    #[must_use]
    pub fn wrapper(&self, node: &NodeRef) -> Option<NodeRef<'a>> {
        self.entries.get(&node.id).and_then(|e| e.wrapper)
    }
}

impl Entry<'_> {
    fn leaf() -> Self {
        Entry {
            span: Span::EMPTY,
            short_text: None,
            title_like: false,
            holds_title_like: false,
            score: 0,
            wrapper: None,
        }
    }
}

fn fold_children<'a>(node: &NodeRef<'a>, entries: &HashMap<NodeId, Entry<'a>>, options: &Options) -> Entry<'a> {
    let children: Vec<&Entry<'a>> = node
        .children()
        .iter()
        .filter_map(|child| entries.get(&child.id))
        .collect();

    let span = children.iter().fold(Span::EMPTY, |acc, child| acc.then(child.span));
    let len = span.trimmed_len();

    // A child's trimmed text never outgrows its parent's, so every child has
    // its text whenever the parent is short enough to need it.
    let short_text = if len < options.anchor_max_len {
        children.iter().map(|child| child.short_text.as_deref()).collect::<Option<String>>()
    } else {
        None
    };

    let title_like = node.is_element() && {
        let class = dom::class(node);
        !class.is_empty() && title_like_class(&class, len, options)
    };

    Entry {
        span,
        short_text,
        title_like,
        holds_title_like: children.iter().any(|c| c.title_like || c.holds_title_like),
        ..Entry::leaf()
    }
}

/// Every node under `root` (root included), parents before children.
fn pre_order(root: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend(node.children().into_iter().rev());
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        *doc.select(selector).nodes().first().unwrap()
    }

    #[test]
    fn trimmed_len_matches_text() {
        let doc = dom::parse("<body><div id='d'>  <p> héllo </p>\n <span>wörld</span>\t</div></body>");
        let index = TreeIndex::build(&doc, &Options::default());
        let d = node(&doc, "#d");

        assert_eq!(index.trimmed_len(&d), dom::char_len(&dom::trimmed_text(&d)));
        assert_eq!(index.short_text(&d), Some(dom::trimmed_text(&d).as_str()));
    }

    #[test]
    fn blank_subtree_has_zero_length() {
        let doc = dom::parse("<body><div id='d'> <p>\n</p> <!-- note --> </div></body>");
        let index = TreeIndex::build(&doc, &Options::default());
        assert_eq!(index.trimmed_len(&node(&doc, "#d")), 0);
        assert_eq!(index.short_text(&node(&doc, "#d")), Some(""));
    }

    #[test]
    fn long_text_is_not_kept() {
        let html = format!("<body><div id='d'><p>{}</p></div></body>", "word ".repeat(200));
        let doc = dom::parse(&html);
        let index = TreeIndex::build(&doc, &Options::default());

        assert_eq!(index.trimmed_len(&node(&doc, "#d")), 999);
        assert!(index.short_text(&node(&doc, "#d")).is_none());
    }

    #[test]
    fn title_like_flags_propagate_up() {
        let doc = dom::parse(
            r#"<body><div id="outer"><div id="inner"><h1 id="t" class="job-title">Engineer</h1></div></div></body>"#,
        );
        let index = TreeIndex::build(&doc, &Options::default());
        let entry = |selector: &str| &index.entries[&node(&doc, selector).id];

        assert!(entry("#t").title_like);
        assert!(!entry("#t").holds_title_like);
        assert!(entry("#inner").holds_title_like);
        assert!(entry("#outer").holds_title_like);
        assert!(!entry("#outer").title_like);
    }

    #[test]
    fn scores_and_wrappers_stop_at_body() {
        let doc = dom::parse(
            r#"<body class="content"><div id="w" class="job-details"><span class="job-title">Engineer</span>
                 <div class="description"><h2 id="a">About the job</h2></div></div></body>"#,
        );
        let index = TreeIndex::build(&doc, &Options::default());
        let a = node(&doc, "#a");

        assert_eq!(index.ancestor_score(&a), 4);
        assert_eq!(index.wrapper(&a).and_then(|w| w.attr("id")).as_deref(), Some("w"));
        assert_eq!(index.ancestor_score(&node(&doc, "#w")), 0);
        assert!(index.wrapper(&node(&doc, "#w")).is_none());
    }
}
