//! Character encoding of page bytes.
//!
//! Pages read from disk or stdin arrive as bytes. The charset declared in the
//! document head decides how they are decoded; undeclared pages are UTF-8.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` or the `charset=` part of an `http-equiv` content value.
static CHARSET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("CHARSET_DECLARATION regex")
});

/// Encoding declared in the first bytes of a page, defaulting to UTF-8.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    CHARSET_DECLARATION
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to a string.
///
/// Undecodable sequences become U+FFFD rather than errors.
///
/// ```
/// use page_digest::encoding::decode_html;
///
/// let page = decode_html(b"<meta charset=\"iso-8859-1\"><p>Caf\xE9</p>");
/// assert!(page.contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = declared_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "page contained undecodable bytes");
    }
    decoded.into_owned()
}
