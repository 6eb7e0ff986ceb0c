//! # page-digest
//!
//! Extracts the readable article text of a web page and summarizes it with a
//! remote language model.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_digest::{extract_article_text, extract_selected_text};
//!
//! let body = "This paragraph is part of a long article about content extraction. ".repeat(4);
//! let html = format!("<html><body><nav>Home</nav><article><p>{body}</p></article></body></html>");
//!
//! let text = extract_article_text(&html);
//! assert!(text.starts_with("This paragraph is part of a long article"));
//!
//! // Selections of 50 characters or fewer are ignored.
//! assert_eq!(extract_selected_text(Some("a short selection")), "");
//! ```
//!
//! ## Extraction
//!
//! Article text comes from the first strategy that yields enough text:
//!
//! 1. the first `<article>` element (more than 200 characters)
//! 2. the named main-content container with the most paragraph, heading and
//!    list-item text (more than 200 characters)
//! 3. the nearest `section`/`article`/`main`/`div` of any paragraph, scored
//!    the same way (more than 200 characters)
//! 4. the whole body (more than 150 characters)
//!
//! Extraction never fails: when nothing qualifies the result is empty.
//!
//! ## Summarization
//!
//! [`digest::Digester`] runs the full summarize action: credential check,
//! restricted-page check, article text with selection fallback, and a single
//! Gemini `generateContent` call through [`summarize::GeminiClient`].

mod error;
mod options;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Rendered (`innerText`-like) text of DOM nodes.
pub mod text;

/// Article and selection text extraction.
pub mod extractor;

/// Page request/response boundary.
pub mod message;

/// Summary prompts and the Gemini client.
pub mod summarize;

/// The summarize action: extraction, fallbacks, summarization.
pub mod digest;

/// Page URL policy.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use digest::{Digester, PageTab};
pub use error::{Error, Result};
pub use extractor::Extraction;
pub use message::{PageChannel, PageContext, Request, Response};
pub use options::{Options, API_KEY_ENV};
pub use summarize::{GeminiClient, Summarizer, SummaryType};

/// Extracts the main article text from an HTML document.
///
/// Returns an empty string when no strategy finds enough text.
///
/// # Example
///
/// ```rust
/// use page_digest::extract_article_text;
///
/// assert_eq!(extract_article_text("<p>Too short to be an article.</p>"), "");
/// ```
#[must_use]
pub fn extract_article_text(html: &str) -> String {
    extractor::extract_article_text(&dom::parse(html))
}

/// Extracts the main article text from HTML bytes, decoding them with the
/// charset the page declares.
#[must_use]
pub fn extract_article_text_bytes(html: &[u8]) -> String {
    extract_article_text(&encoding::decode_html(html))
}

/// Returns the trimmed selection if it is longer than 50 characters,
/// otherwise an empty string.
#[must_use]
pub fn extract_selected_text(selection: Option<&str>) -> String {
    extractor::extract_selected_text(selection)
}
