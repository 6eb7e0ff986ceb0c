//! Error types for page-digest.
//!
//! Extraction itself never fails; these errors come from the message
//! boundary, configuration, and the summarization workflow. The `Display`
//! text of each variant is the message shown to the user.

/// Error type for digest operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A message from the page transport could not be decoded.
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// No API key is configured.
    #[error("API key not found. Set GEMINI_API_KEY or save your Gemini API key in the config file.")]
    MissingApiKey,

    /// There is no page to summarize.
    #[error("No active tab found.")]
    NoActiveTab,

    /// The page is of a kind that cannot be read (browser-internal, PDF, ...).
    #[error("This page type can't be summarized. Please open a normal web article.")]
    RestrictedPage,

    /// The page did not answer the article text request.
    #[error("Could not extract article text from this page. Try another page.")]
    PageUnreachable,

    /// Neither article text nor a usable selection was found.
    #[error("Could not extract article text from this page. Tip: select the article text and click Summarize again.")]
    NoContent,

    /// The summarization API rejected the request or returned garbage.
    #[error("Error: {0}")]
    Api(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for digest operations.
pub type Result<T> = std::result::Result<T, Error>;
