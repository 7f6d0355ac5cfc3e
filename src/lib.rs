//! # jobpost-extract
//!
//! Heuristic extraction of job postings from job-board pages.
//!
//! Given an HTML document and its source URL, the extractor finds the
//! posting's title, company, location and description, decides whether the
//! page is a job posting at all, and produces a canonical URL suitable as a
//! deduplication key. It is built for pages whose markup changes often:
//! everything is located through marker phrases ("About the job",
//! "Responsibilities", ...) and substring class-word vocabularies, with
//! ordered fallbacks down to whole-document heuristics.
//!
//! ## Quick Start
//!
//! ```rust
//! use jobpost_extract::extract;
//!
//! let html = r#"<html><head><title>Backend Engineer | Acme | LinkedIn</title></head>
//! <body><main><div class="job-details">
//!   <h1 class="job-title">Backend Engineer</h1>
//!   <a class="company-name">Acme Corp</a>
//!   <section><h2>About the job</h2>
//!   <p>You will design, build and operate the services behind our checkout flow.</p></section>
//! </div></main></body></html>"#;
//!
//! let result = extract(html, "https://www.linkedin.com/jobs/view/123/?trk=feed");
//! assert_eq!(result.title, "Backend Engineer");
//! assert_eq!(result.company, "Acme Corp");
//! assert_eq!(result.url, "https://www.linkedin.com/jobs/view/123/");
//! assert!(result.is_job_page);
//! ```
//!
//! ## Behavior
//!
//! - **Never fails**: unparseable selectors, missing landmarks and empty
//!   nodes degrade to "no match"; an unrecognized page is an all-empty
//!   result with `is_job_page == false`.
//! - **Configurable**: every threshold and vocabulary lives in [`Options`].
//! - **Host expansion**: callers with a live tree can implement
//!   [`Expander`] to click "show more" controls before the description is
//!   read.

mod error;
mod options;
mod result;

/// DOM access helpers over `dom_query`.
pub mod dom;

/// Compiled patterns and class-word vocabularies.
pub mod patterns;

/// Scoped class-word queries and text collection.
pub mod selector;

/// Anchor location, scoring, field and description resolution.
pub mod extractor;

/// Document and structured title metadata.
pub mod metadata;

/// Source URL classification and canonicalization.
pub mod url_utils;

/// Charset sniffing and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::{extract_document, Expander, NoopExpander};
pub use options::{Options, PageContext};
pub use result::{Diagnostics, ExtractionResult, IngestPayload, RawData};

/// Extracts a job posting using default options.
///
/// # Example
///
/// ```rust
/// use jobpost_extract::extract;
///
/// let result = extract("<html><body></body></html>", "https://example.com/");
/// assert!(!result.is_job_page);
/// ```
#[must_use]
pub fn extract(html: &str, url: &str) -> ExtractionResult {
    extract_with_options(html, &PageContext::new(url), &Options::default())
}

/// Extracts a job posting with host context and custom options.
///
/// # Example
///
/// ```rust
/// use jobpost_extract::{extract_with_options, Options, PageContext};
///
/// let ctx = PageContext::new("https://jobs.example.com/listing")
///     .with_og_title("Data Engineer");
/// let options = Options {
///     site_name: "Example Jobs".to_string(),
///     ..Options::default()
/// };
/// let result = extract_with_options("<body></body>", &ctx, &options);
/// assert_eq!(result.title, "Data Engineer");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, ctx: &PageContext, options: &Options) -> ExtractionResult {
    let doc = dom::parse(html);
    extract_document(&doc, ctx, options, &NoopExpander)
}

/// Extracts a job posting from raw bytes using default options.
///
/// The charset is sniffed from a byte-order mark or a `<meta>` declaration,
/// defaulting to UTF-8.
#[must_use]
pub fn extract_bytes(html: &[u8], url: &str) -> ExtractionResult {
    extract_bytes_with_options(html, None, &PageContext::new(url), &Options::default())
}

/// Extracts a job posting from raw bytes.
///
/// `content_type` is an optional charset label or HTTP `Content-Type`
/// value; it overrides any `<meta>` declaration but not a byte-order mark.
///
/// # Example
///
/// ```rust
/// use jobpost_extract::{extract_bytes_with_options, Options, PageContext};
///
/// let html = b"<body><span class=\"company-name\">Soci\xe9t\xe9 G\xe9n\xe9rale</span></body>";
/// let result = extract_bytes_with_options(
///     html,
///     Some("text/html; charset=iso-8859-1"),
///     &PageContext::new("https://example.com/"),
///     &Options::default(),
/// );
/// assert_eq!(result.company, "Société Générale");
/// ```
#[must_use]
pub fn extract_bytes_with_options(
    html: &[u8],
    content_type: Option<&str>,
    ctx: &PageContext,
    options: &Options,
) -> ExtractionResult {
    let text = encoding::decode_html(html, content_type);
    extract_with_options(&text, ctx, options)
}
