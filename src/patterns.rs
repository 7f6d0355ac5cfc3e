//! Compiled regex patterns and class-word vocabularies.
//!
//! Fixed text patterns are compiled once using `LazyLock`. The class-word
//! vocabularies live in [`Vocabulary`], which is injected through
//! [`Options`](crate::Options) so markup churn can be followed without
//! touching traversal code.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::Result;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches blank lines (newline, optional whitespace, newline).
pub static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n").expect("BLANK_LINES regex")
});

/// Matches a leading unread counter such as `(3) `.
pub static LEADING_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d+\)\s*").expect("LEADING_COUNTER regex")
});

/// Matches an unread counter followed by whitespace, as in `(3) Messaging`.
pub static COUNTER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d+\)\s").expect("COUNTER_PREFIX regex")
});

/// Matches inline styles that hide an element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)display\s*:\s*none|visibility\s*:\s*hidden").expect("HIDDEN_STYLE regex")
});

// =============================================================================
// Class Matching
// =============================================================================

/// A case-insensitive matcher over an element's class attribute.
///
/// Built from a list of word alternatives; a class attribute matches when
/// any alternative occurs anywhere in it (`"job-title"` matches
/// `"t-24 job-title__text"`).
#[derive(Debug, Clone)]
pub struct ClassMatcher {
    // `None` is an empty vocabulary and matches nothing.
    re: Option<Regex>,
}

impl ClassMatcher {
    /// Compiles a matcher from literal word alternatives.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jobpost_extract::patterns::ClassMatcher;
    ///
    /// let m = ClassMatcher::new(&["company-name", "company"])?;
    /// assert!(m.is_match("jobs-unified-top-card__Company-Name"));
    /// assert!(!m.is_match("location"));
    /// # Ok::<(), jobpost_extract::Error>(())
    /// ```
    pub fn new(words: &[&str]) -> Result<Self> {
        let alternation = words
            .iter()
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        if alternation.is_empty() {
            return Ok(Self { re: None });
        }
        let re = RegexBuilder::new(&alternation).case_insensitive(true).build()?;
        Ok(Self { re: Some(re) })
    }

    /// Tests a class attribute value.
    #[must_use]
    pub fn is_match(&self, class: &str) -> bool {
        !class.is_empty() && self.re.as_ref().is_some_and(|re| re.is_match(class))
    }
}

fn builtin(words: &[&str]) -> ClassMatcher {
    ClassMatcher::new(words).expect("builtin vocabulary")
}

// =============================================================================
// Vocabulary
// =============================================================================

/// Marker phrases that open a structured detail section.
pub const MARKER_PHRASES: &[&str] = &[
    "About the job",
    "Responsibilities",
    "Qualifications",
    "Job description",
    "What you'll do",
    "What you\u{2019}ll do",
    "Overview",
];

/// Generic feed and landing-page labels that are never a posting title.
pub const FEED_TITLES: &[&str] = &[
    "top job picks for you",
    "jobs you might like",
    "recommended for you",
    "start your job search",
    "job search",
    "jobs home",
    "recommended",
    "saved jobs",
    "applied jobs",
    "collections",
];

/// The full set of patterns the extractor consults.
///
/// Every field is public so callers can swap a single vocabulary:
///
/// ```rust
/// use jobpost_extract::patterns::{ClassMatcher, Vocabulary};
///
/// let vocabulary = Vocabulary {
///     company_words: ClassMatcher::new(&["employer", "company"])?,
///     ..Vocabulary::default()
/// };
/// assert!(vocabulary.company_words.is_match("employer-badge"));
/// # Ok::<(), jobpost_extract::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Case-insensitive marker phrases tested against a node's text.
    pub markers: Regex,

    /// Classes that identify the posting title itself.
    pub job_title: ClassMatcher,

    /// Loose "title" class pattern; only counts for short text.
    pub generic_title: ClassMatcher,

    /// Detail-container classes rewarded by anchor scoring.
    pub detail_container: ClassMatcher,

    /// Card/detail container classes scanned in field lookup tier 2.
    pub card_container: ClassMatcher,

    /// Classes searched for the title field.
    pub title_words: ClassMatcher,

    /// Classes searched for the company field.
    pub company_words: ClassMatcher,

    /// Classes searched for the location field.
    pub location_words: ClassMatcher,

    /// Classes whose nodes are description candidates.
    pub description_words: ClassMatcher,

    /// Classes of "show more" controls.
    pub expand_controls: ClassMatcher,

    /// Text or aria-label a control must carry before it is clicked.
    pub expand_label: Regex,

    /// Lowercase feed labels rejected as titles (substring match).
    pub feed_titles: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let markers = MARKER_PHRASES
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            markers: RegexBuilder::new(&markers)
                .case_insensitive(true)
                .build()
                .expect("marker regex"),
            job_title: builtin(&[
                "job-title",
                "job_title",
                "topcard__title",
                "top-card__title",
                "topcard",
                "top-card-layout__title",
            ]),
            generic_title: builtin(&["title"]),
            detail_container: builtin(&[
                "job-details",
                "description",
                "jobs-description",
                "show-more-less",
                "content",
            ]),
            card_container: builtin(&[
                "topcard",
                "top-card",
                "job-details",
                "search-card",
                "job-card",
                "base-card",
            ]),
            title_words: builtin(&["job-title", "job_title", "topcard", "title"]),
            company_words: builtin(&["company-name", "company", "subtitle"]),
            location_words: builtin(&[
                "location",
                "bullet",
                "insight",
                "subline",
                "primary-description",
            ]),
            description_words: builtin(&[
                "description",
                "markup",
                "job-details",
                "html-content",
                "content",
            ]),
            expand_controls: builtin(&["show-more-less-html__button"]),
            expand_label: RegexBuilder::new("more")
                .case_insensitive(true)
                .build()
                .expect("expand label regex"),
            feed_titles: FEED_TITLES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
