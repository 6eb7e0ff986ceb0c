//! Page message boundary.
//!
//! A page answers two requests, `GET_ARTICLE_TEXT` and `GET_SELECTED_TEXT`,
//! each with a `{ "text": ... }` response. Whatever goes wrong while
//! answering, the response carries an empty string instead of an error.

use dom_query::Document;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extractor;

/// A request sent to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    /// Extract the main article text.
    GetArticleText,
    /// Extract the user's current text selection.
    GetSelectedText,
}

impl Request {
    /// Decode a request from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidMessage(e.to_string()))
    }
}

/// A page's answer to a [`Request`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Extracted text; empty on failure or no match.
    pub text: String,
}

impl Response {
    /// A response with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Everything a page exposes to the extractor: its document and the
/// current text selection.
pub struct PageContext {
    document: Document,
    selection: Option<String>,
}

impl PageContext {
    /// Wrap a parsed document with no selection.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: None,
        }
    }

    /// Parse an HTML page.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        Self::new(crate::dom::parse(html))
    }

    /// Set the user's current text selection.
    #[must_use]
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    /// The page document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The user's current text selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }
}

/// Answer a decoded request.
#[must_use]
pub fn handle_request(page: &PageContext, request: Request) -> Response {
    let text = match request {
        Request::GetArticleText => extractor::extract_article_text(page.document()),
        Request::GetSelectedText => extractor::extract_selected_text(page.selection()),
    };
    Response { text }
}

/// Answer a raw JSON message.
///
/// Any JSON value that is not one of the two requests (an unknown or
/// non-string `type`, no `type` at all, an array) gets no answer (`None`).
/// Only input that is not JSON, or is `null`, is answered with empty text.
#[must_use]
pub fn handle_message(page: &PageContext, json: &str) -> Option<Response> {
    match Request::from_json(json) {
        Ok(request) => Some(handle_request(page, request)),
        Err(err) => match serde_json::from_str::<serde_json::Value>(json) {
            Ok(value) if !value.is_null() => {
                tracing::debug!(message = json, "ignoring unrecognised page message");
                None
            }
            _ => {
                tracing::warn!(error = %err, "failed to decode page message");
                Some(Response::default())
            }
        },
    }
}

/// Transport that delivers requests to a page.
///
/// An `Err` means the page could not be reached at all, as opposed to a page
/// that answered with empty text.
pub trait PageChannel {
    /// Deliver a request and wait for the answer.
    fn send(&self, request: Request) -> Result<Response>;
}

impl PageChannel for PageContext {
    fn send(&self, request: Request) -> Result<Response> {
        Ok(handle_request(self, request))
    }
}
