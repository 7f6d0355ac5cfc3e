//! Configuration for job posting extraction.
//!
//! [`Options`] carries every threshold the heuristics use and the injected
//! [`Vocabulary`]. [`PageContext`] carries the scalars a host supplies
//! alongside the document.

use crate::patterns::Vocabulary;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use jobpost_extract::Options;
///
/// let options = Options {
///     min_description_len: 120,
///     site_name: "Example Jobs".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.max_description_len, 10_000);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Upper bound (exclusive) on the text length of a marker anchor.
    ///
    /// Default: `600`
    pub anchor_max_len: usize,

    /// Any title-like node must have text no longer than this.
    ///
    /// Default: `250`
    pub title_like_max_len: usize,

    /// A node matching only the loose "title" class counts as title-like
    /// when its text is shorter than this.
    ///
    /// Default: `150`
    pub generic_title_max_len: usize,

    /// Ancestors with more text than this add one point to an anchor's score.
    ///
    /// Default: `2000`
    pub large_container_len: usize,

    /// Preferred maximum length for a title candidate.
    ///
    /// Default: `200`
    pub title_max_len: usize,

    /// Preferred maximum length for a company candidate.
    ///
    /// Default: `150`
    pub company_max_len: usize,

    /// Preferred maximum length for a location candidate.
    ///
    /// Default: `150`
    pub location_max_len: usize,

    /// Minimum length a description tier must reach to be accepted.
    ///
    /// Default: `80`
    pub min_description_len: usize,

    /// Descriptions are truncated to this many characters.
    ///
    /// Default: `10000`
    pub max_description_len: usize,

    /// A description longer than this marks the page as a job page.
    ///
    /// Default: `50`
    pub job_page_min_description: usize,

    /// Site brand; a bare brand is a noise title and `| <brand> ...` is
    /// stripped from the document title.
    ///
    /// Default: `"LinkedIn"`
    pub site_name: String,

    /// Origin used for canonical URLs when the source URL has none.
    ///
    /// Default: `"https://www.linkedin.com"`
    pub site_origin: String,

    /// Path segment of a canonical item-detail URL.
    ///
    /// Default: `"/jobs/view/"`
    pub detail_path: String,

    /// Path segment of a collection/listing view.
    ///
    /// Default: `"/jobs/collections/"`
    pub collection_path: String,

    /// Query parameter that names the selected item in a collection view.
    ///
    /// Default: `"currentJobId"`
    pub item_id_param: String,

    /// CSS selector groups whose matches are joined to recover a location
    /// split across sibling chips.
    ///
    /// Default: two top-card bullet selectors.
    pub location_selectors: Vec<String>,

    /// Class-word vocabularies and marker phrases.
    pub vocabulary: Vocabulary,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            anchor_max_len: 600,
            title_like_max_len: 250,
            generic_title_max_len: 150,
            large_container_len: 2000,
            title_max_len: 200,
            company_max_len: 150,
            location_max_len: 150,
            min_description_len: 80,
            max_description_len: 10_000,
            job_page_min_description: 50,
            site_name: "LinkedIn".to_string(),
            site_origin: "https://www.linkedin.com".to_string(),
            detail_path: "/jobs/view/".to_string(),
            collection_path: "/jobs/collections/".to_string(),
            item_id_param: "currentJobId".to_string(),
            location_selectors: vec![
                ".job-details-jobs-unified-top-card__bullet".to_string(),
                ".topcard__flavor--bullet".to_string(),
            ],
            vocabulary: Vocabulary::default(),
        }
    }
}

/// Host-supplied scalars that accompany the document.
///
/// `og_title` and `document_title` are read from the document's
/// `<meta property="og:title">` and `<title>` when not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// The current source URL.
    pub url: String,

    /// Structured page-title metadata (an `og:title` equivalent).
    pub og_title: Option<String>,

    /// Host-reported document title.
    pub document_title: Option<String>,
}

impl PageContext {
    /// A context carrying only the source URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the structured page-title metadata.
    #[must_use]
    pub fn with_og_title(mut self, og_title: impl Into<String>) -> Self {
        self.og_title = Some(og_title.into());
        self
    }

    /// Sets the host-reported document title.
    #[must_use]
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(title.into());
        self
    }
}
