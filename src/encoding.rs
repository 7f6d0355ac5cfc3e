//! Charset sniffing and transcoding for raw page bytes.
//!
//! Saved job pages arrive as bytes (a browser "save as", a crawler dump).
//! The encoding is taken from, in order: a byte-order mark, a charset label
//! supplied by the caller (an HTTP `Content-Type` header), a `<meta>`
//! declaration within the first 1024 bytes, and finally UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes scanned for a `<meta>` charset declaration.
const PRESCAN_LEN: usize = 1024;

/// `<meta charset=...>` or `<meta http-equiv=Content-Type content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?([A-Za-z0-9_:.\-]+)"#).expect("META_CHARSET_RE regex")
});

/// `charset=` parameter of a `Content-Type` value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([A-Za-z0-9_:.\-]+)"#).expect("HEADER_CHARSET_RE regex")
});

/// Encoding for a label, accepting either a bare label (`"latin1"`) or a
/// full `Content-Type` value (`"text/html; charset=latin1"`).
#[must_use]
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();
    let bare = HEADER_CHARSET_RE
        .captures(label)
        .and_then(|c| c.get(1))
        .map_or(label, |m| m.as_str());
    Encoding::for_label(bare.as_bytes())
}

/// Encoding declared by a `<meta>` tag near the start of the document.
#[must_use]
pub fn sniff_meta_charset(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(PRESCAN_LEN)]);
    META_CHARSET_RE
        .captures_iter(&head)
        .filter_map(|c| c.get(1))
        .find_map(|m| Encoding::for_label(m.as_str().as_bytes()))
        // A meta tag cannot truthfully declare UTF-16: it was read as ASCII.
        .map(Encoding::output_encoding)
}

/// Picks the encoding for `html`, honoring `hint` after any BOM.
#[must_use]
pub fn detect_encoding(html: &[u8], hint: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }
    hint.and_then(encoding_for_label)
        .or_else(|| sniff_meta_charset(html))
        .unwrap_or(UTF_8)
}

/// Decodes page bytes into UTF-8 text.
///
/// Malformed sequences become U+FFFD; decoding never fails.
///
/// # Example
///
/// ```rust
/// use jobpost_extract::encoding::decode_html;
///
/// let bytes = b"<meta charset=\"iso-8859-1\"><h1 class=\"job-title\">Ing\xe9nieur</h1>";
/// assert!(decode_html(bytes, None).contains("Ingénieur"));
/// ```
#[must_use]
pub fn decode_html<'a>(html: &'a [u8], hint: Option<&str>) -> Cow<'a, str> {
    let encoding = detect_encoding(html, hint);
    let (text, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "malformed input replaced while decoding");
    }
    text
}
