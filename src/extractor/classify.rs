//! Job-page classification.
//!
//! Deliberately permissive: any single signal is enough. An empty record is
//! cheap downstream, a dropped posting is not.

use crate::dom;
use crate::options::Options;
use crate::url_utils;

/// Field values the classifier looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct Signals<'a> {
    /// Resolved title.
    pub title: &'a str,
    /// Resolved company.
    pub company: &'a str,
    /// Resolved location.
    pub location: &'a str,
    /// Normalized description.
    pub description: &'a str,
    /// Source URL as supplied by the host.
    pub url: &'a str,
}

/// True if the page is a job posting.
///
/// Holds when the description exceeds `job_page_min_description`
/// characters, any of title/company/location is non-empty, or the source
/// URL is a posting view.
#[must_use]
pub fn is_job_page(signals: &Signals<'_>, options: &Options) -> bool {
    dom::char_len(signals.description) > options.job_page_min_description
        || !signals.title.is_empty()
        || !signals.company.is_empty()
        || !signals.location.is_empty()
        || url_utils::is_posting_url(signals.url, options)
}
