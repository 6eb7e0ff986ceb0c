//! Article text extraction.
//!
//! # Module Structure
//!
//! - `candidates`: candidate regions and the longest-block-text policy
//! - `strategies`: the ordered fallback chain and its thresholds
//!
//! # Usage
//!
//! ```rust
//! use page_digest::{dom, extractor};
//!
//! let doc = dom::parse("<html><body><p>Too short.</p></body></html>");
//! assert_eq!(extractor::extract_article_text(&doc), "");
//! assert_eq!(extractor::extract_selected_text(Some("  short  ")), "");
//! ```

pub mod candidates;
pub mod strategies;

use dom_query::Document;

use crate::text::char_len;

pub use candidates::{longest_block_text, CandidateRegion};
pub use strategies::{
    Strategy, ARTICLE_MIN_CHARS, BODY_MIN_CHARS, CONTAINER_MIN_CHARS, STRATEGIES,
};

/// Minimum length (exclusive) of a usable text selection.
pub const SELECTION_MIN_CHARS: usize = 50;

/// Outcome of running the fallback chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Extracted text, trimmed. Empty when no strategy produced enough text.
    pub text: String,
    /// Name of the strategy that produced `text`, if any.
    pub strategy: Option<&'static str>,
}

/// Run the fallback chain and report which strategy won.
///
/// Strategies run in [`STRATEGIES`] order; the first whose trimmed text is
/// longer than its threshold wins. The document is only read.
#[must_use]
pub fn extract_article(doc: &Document) -> Extraction {
    for strategy in &STRATEGIES {
        let candidate = (strategy.run)(doc);
        let text = candidate.trim();
        let len = char_len(text);
        if len > strategy.min_chars {
            tracing::debug!(strategy = strategy.name, chars = len, "article text extracted");
            return Extraction {
                text: text.to_string(),
                strategy: Some(strategy.name),
            };
        }
        tracing::trace!(strategy = strategy.name, chars = len, "strategy below threshold");
    }

    tracing::debug!("no strategy produced enough text");
    Extraction::default()
}

/// Best-effort main article text of a document, or an empty string.
#[must_use]
pub fn extract_article_text(doc: &Document) -> String {
    extract_article(doc).text
}

/// The user's selection, trimmed, if it is longer than
/// [`SELECTION_MIN_CHARS`] characters; otherwise an empty string.
#[must_use]
pub fn extract_selected_text(selection: Option<&str>) -> String {
    let text = selection.map(str::trim).unwrap_or_default();
    if char_len(text) > SELECTION_MIN_CHARS {
        text.to_string()
    } else {
        String::new()
    }
}
