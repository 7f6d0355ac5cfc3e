//! Result types for extraction output.
//!
//! [`ExtractionResult`] is what the extractor returns. [`IngestPayload`] is
//! the record handed to downstream ingestion, built from a result with
//! [`ExtractionResult::to_payload`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Title used in the ingestion payload when none was found.
pub const UNTITLED: &str = "Untitled Position";

/// Marker for a field that resolved to an empty string.
pub const NOT_FOUND: &str = "not_found";

/// Observability data. Never consulted by the extractor itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// `title`/`company`/`location` map to `found` or `not_found`;
    /// `description` maps to `found_<n>_chars` or `not_found`.
    pub selectors_used: BTreeMap<String, String>,

    /// Character length of every output field.
    pub lengths: BTreeMap<String, usize>,

    /// Number of marker anchors located.
    pub anchors: usize,

    /// Score of the selected anchor, if any.
    pub anchor_score: Option<u32>,

    /// Whether the selected anchor had a wrapper.
    pub wrapper_found: bool,

    /// Description tier that succeeded (`section`, `ancestor`,
    /// `class_match`, `body`).
    pub description_source: Option<String>,

    /// Expand controls clicked before the description was read.
    pub expanded: usize,
}

/// Result of extracting a job posting from a document.
///
/// Every string field is empty when nothing was found; the aggregate
/// "not a posting" outcome is `is_job_page == false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Posting title.
    pub title: String,

    /// Hiring organization.
    pub company: String,

    /// Location text.
    pub location: String,

    /// Whitespace-normalized description, at most `max_description_len`
    /// characters.
    pub description: String,

    /// Canonical identifying URL.
    pub url: String,

    /// Whether the page looks like a job posting.
    pub is_job_page: bool,

    /// Which fields were found, and how.
    pub diagnostics: Diagnostics,
}

impl ExtractionResult {
    /// Builds the `selectors_used` map for the current field values.
    #[must_use]
    pub fn selectors_used(&self) -> BTreeMap<String, String> {
        let flag = |value: &str| {
            if value.is_empty() {
                NOT_FOUND.to_string()
            } else {
                "found".to_string()
            }
        };

        let description = if self.description.is_empty() {
            NOT_FOUND.to_string()
        } else {
            format!("found_{}_chars", self.description.chars().count())
        };

        BTreeMap::from([
            ("title".to_string(), flag(&self.title)),
            ("company".to_string(), flag(&self.company)),
            ("location".to_string(), flag(&self.location)),
            ("description".to_string(), description),
        ])
    }

    /// Text handed downstream: the description, or the title without one.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        if self.description.is_empty() {
            &self.title
        } else {
            &self.description
        }
    }

    /// Builds the downstream ingestion record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use jobpost_extract::ExtractionResult;
    ///
    /// let result = ExtractionResult {
    ///     company: "Acme Corp".to_string(),
    ///     ..ExtractionResult::default()
    /// };
    /// let scraped_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    /// let payload = result.to_payload("linkedin", scraped_at);
    ///
    /// assert_eq!(payload.title, "Untitled Position");
    /// assert_eq!(payload.raw_data.selectors_used["company"], "found");
    /// ```
    #[must_use]
    pub fn to_payload(&self, source: &str, scraped_at: DateTime<Utc>) -> IngestPayload {
        let title = if self.title.is_empty() {
            UNTITLED.to_string()
        } else {
            self.title.clone()
        };

        IngestPayload {
            title,
            company: self.company.clone(),
            location: self.location.clone(),
            url: self.url.clone(),
            raw_text: self.raw_text().to_string(),
            raw_data: RawData {
                source: source.to_string(),
                scraped_at,
                selectors_used: self.selectors_used(),
            },
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Record accepted by the downstream ingestion boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestPayload {
    /// Title, `"Untitled Position"` when none was found.
    pub title: String,
    /// Hiring organization, possibly empty.
    pub company: String,
    /// Location, possibly empty.
    pub location: String,
    /// Canonical URL; the downstream dedup key.
    pub url: String,
    /// Description, or the title when there is none.
    pub raw_text: String,
    /// Capture provenance.
    pub raw_data: RawData,
}

impl IngestPayload {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Capture provenance attached to a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawData {
    /// Capture source label, e.g. `"linkedin"`.
    pub source: String,
    /// Capture time, serialized as RFC 3339.
    pub scraped_at: DateTime<Utc>,
    /// Which fields were found.
    pub selectors_used: BTreeMap<String, String>,
}
