//! Source URL classification and canonicalization.
//!
//! Downstream storage keys postings on their URL, so a collection view
//! (shared by every posting in the list) is rewritten to the item-detail
//! form, and detail URLs lose their tracking query. URLs that do not parse
//! as absolute URLs are handled by plain string inspection.

use url::Url;

use crate::options::Options;

/// Parses an absolute `http`/`https` URL with a host.
#[must_use]
pub fn parse_url(s: &str) -> Option<Url> {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }
    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// True if the URL points at a posting view (detail or collection).
#[must_use]
pub fn is_posting_url(url: &str, options: &Options) -> bool {
    is_detail_url(url, options) || is_collection_url(url, options)
}

/// True if the URL contains the item-detail path.
#[must_use]
pub fn is_detail_url(url: &str, options: &Options) -> bool {
    !options.detail_path.is_empty() && url.contains(options.detail_path.as_str())
}

/// True if the URL contains the collection path.
#[must_use]
pub fn is_collection_url(url: &str, options: &Options) -> bool {
    !options.collection_path.is_empty() && url.contains(options.collection_path.as_str())
}

/// Numeric item id from the `item_id_param` query parameter.
///
/// Only the leading digits of the value are kept; a value without leading
/// digits is no id.
#[must_use]
pub fn item_id(url: &str, options: &Options) -> Option<String> {
    let param = options.item_id_param.as_str();
    if param.is_empty() {
        return None;
    }

    let raw = match parse_url(url) {
        Some(parsed) => parsed
            .query_pairs()
            .find(|(key, _)| key == param)
            .map(|(_, value)| value.into_owned()),
        None => {
            let needle = format!("{param}=");
            url.find(&needle)
                .map(|idx| url[idx + needle.len()..].to_string())
        }
    }?;

    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}

/// Scheme and host of `url`, or `options.site_origin` when it has none.
#[must_use]
pub fn origin_of(url: &str, options: &Options) -> String {
    parse_url(url)
        .map(|parsed| parsed.origin().ascii_serialization())
        .filter(|origin| origin != "null")
        .unwrap_or_else(|| options.site_origin.trim_end_matches('/').to_string())
}

/// Removes the query string and fragment.
#[must_use]
pub fn strip_query(url: &str) -> String {
    if let Some(mut parsed) = parse_url(url) {
        parsed.set_query(None);
        parsed.set_fragment(None);
        return parsed.to_string();
    }
    let end = url.find(['?', '#']).unwrap_or(url.len());
    url[..end].to_string()
}

/// Canonical identifying URL for a source URL.
///
/// - collection view with an item id: `<origin><detail_path><id>`
/// - detail view: the URL without its query string
/// - anything else: unchanged
///
/// # Example
///
/// ```rust
/// use jobpost_extract::{url_utils, Options};
///
/// let options = Options::default();
/// assert_eq!(
///     url_utils::canonicalize_url(
///         "https://www.linkedin.com/jobs/collections/recommended/?currentJobId=4821&origin=feed",
///         &options,
///     ),
///     "https://www.linkedin.com/jobs/view/4821"
/// );
/// assert_eq!(
///     url_utils::canonicalize_url("https://www.linkedin.com/jobs/view/4821/?trk=abc", &options),
///     "https://www.linkedin.com/jobs/view/4821/"
/// );
/// ```
#[must_use]
pub fn canonicalize_url(url: &str, options: &Options) -> String {
    if is_collection_url(url, options) {
        if let Some(id) = item_id(url, options) {
            return format!("{}{}{}", origin_of(url, options), options.detail_path, id);
        }
    }
    if is_detail_url(url, options) {
        return strip_query(url);
    }
    url.to_string()
}
