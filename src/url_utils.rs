//! Page URL policy.
//!
//! Some pages cannot be read by a content script at all: browser-internal
//! pages, the extension store, other extensions, and PDFs rendered by the
//! built-in viewer. Those are rejected before any extraction is attempted.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Browser-internal schemes and the extension store.
static RESTRICTED_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^chrome:|^edge:|^about:|chromewebstore\.google\.com|^chrome-extension:")
        .expect("RESTRICTED_PAGE regex")
});

/// A `.pdf` path, at the end of the URL or right before the query string.
static PDF_DOCUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.pdf($|\?)").expect("PDF_DOCUMENT regex"));

/// Check whether a page URL is one that cannot be summarized.
///
/// # Example
///
/// ```rust
/// use page_digest::url_utils::is_restricted_url;
///
/// assert!(is_restricted_url("chrome://settings"));
/// assert!(is_restricted_url("https://example.com/paper.PDF?dl=1"));
/// assert!(!is_restricted_url("https://example.com/news/story"));
/// ```
#[must_use]
pub fn is_restricted_url(url: &str) -> bool {
    RESTRICTED_PAGE.is_match(url) || PDF_DOCUMENT.is_match(url)
}
