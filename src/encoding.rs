//! Character encoding detection and transcoding.
//!
//! Product pages on the source site are served in a legacy single-byte
//! charset declared in a `<meta>` tag; the `€` sign in every price is byte
//! 0x80 there. Pages handed over as raw bytes are decoded to UTF-8 here
//! before parsing.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// How far into the document a charset declaration is looked for.
const SNIFF_LIMIT: usize = 1024;

/// `charset=` inside any `<meta>` tag. Covers both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?([A-Za-z0-9_\-:.]+)"#)
        .expect("META_CHARSET_RE regex")
});

/// The encoding declared in the document head, if any is recognized.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = &html[..html.len().min(SNIFF_LIMIT)];

    META_CHARSET_RE
        .captures_iter(head)
        .filter_map(|c| c.get(1))
        .find_map(|label| Encoding::for_label(label.as_bytes()))
}

/// Decode HTML bytes to a UTF-8 string.
///
/// A UTF-8 byte order mark wins over any declaration; otherwise the declared
/// charset is used, defaulting to UTF-8. Malformed sequences become U+FFFD.
///
/// # Examples
///
/// ```
/// use gamestop_extract::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><p>19,90 \x80</p>";
/// assert!(decode_html(html).contains("19,90 \u{20AC}"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = declared_encoding(html).unwrap_or(UTF_8);
    let (decoded, _used, _had_errors) = encoding.decode(html);
    decoded
}
