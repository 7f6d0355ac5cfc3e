//! Job posting extraction.
//!
//! # Module Structure
//!
//! - `index`: Per-document node table (text lengths, title-like subtrees, scores)
//! - `anchor`: Marker anchor location ("About the job", "Responsibilities", ...)
//! - `wrapper`: Nearest detail panel holding a title-like element
//! - `scoring`: Anchor scoring and best-candidate selection
//! - `expand`: "Show more" control triggering through the host
//! - `fields`: Title, company and location resolution
//! - `description`: Description cascade and normalization
//! - `classify`: Job-page classification
//! - `pipeline`: Orchestration of the steps above
//!
//! # Usage
//!
//! ```rust
//! use jobpost_extract::extractor::{pipeline, NoopExpander};
//! use jobpost_extract::{dom, Options, PageContext};
//!
//! let doc = dom::parse(r#"<main><h1 class="job-title">Backend Engineer</h1></main>"#);
//! let ctx = PageContext::new("https://www.linkedin.com/jobs/view/42/");
//! let result = pipeline::extract_document(&doc, &ctx, &Options::default(), &NoopExpander);
//!
//! assert_eq!(result.title, "Backend Engineer");
//! assert!(result.is_job_page);
//! ```

pub mod anchor;
pub mod classify;
pub mod description;
pub mod expand;
pub mod fields;
pub mod index;
pub mod pipeline;
pub mod scoring;
pub mod wrapper;

pub use expand::{Expander, NoopExpander};
pub use index::TreeIndex;
pub use pipeline::extract_document;

/// A deferred lookup in a fallback cascade.
pub type Strategy<'s, T> = Box<dyn Fn() -> Option<T> + 's>;

/// Runs strategies in order and returns the first hit.
///
/// Later strategies are never evaluated once one succeeds.
#[must_use]
pub fn first_success<T>(strategies: &[Strategy<'_, T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy())
}

/// `Some(s)` unless `s` is empty after trimming.
#[inline]
#[must_use]
pub fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
