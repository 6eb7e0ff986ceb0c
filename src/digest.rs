//! Page digest workflow.
//!
//! Ties extraction and summarization together the way the summarize action
//! does: check the credential and the page, ask the page for its article
//! text, fall back to the user's selection, then summarize.

use crate::error::{Error, Result};
use crate::message::{PageChannel, Request};
use crate::summarize::{Summarizer, SummaryType};
use crate::url_utils::is_restricted_url;

/// The page the user wants summarized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTab {
    /// Page URL; may be unknown (e.g. HTML read from stdin).
    pub url: Option<String>,
}

impl PageTab {
    /// A tab showing `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Runs the summarize action against a page.
pub struct Digester<S> {
    summarizer: Option<S>,
}

impl<S: Summarizer> Digester<S> {
    /// A digester that summarizes with `summarizer`.
    #[must_use]
    pub fn new(summarizer: S) -> Self {
        Self {
            summarizer: Some(summarizer),
        }
    }

    /// A digester with no usable credential; every digest fails with
    /// [`Error::MissingApiKey`].
    #[must_use]
    pub fn without_credentials() -> Self {
        Self { summarizer: None }
    }

    /// Summarize the page behind `channel`.
    ///
    /// `tab` is `None` when there is no page to summarize.
    pub async fn digest(
        &self,
        tab: Option<&PageTab>,
        channel: &dyn PageChannel,
        kind: SummaryType,
    ) -> Result<String> {
        let summarizer = self.summarizer.as_ref().ok_or(Error::MissingApiKey)?;
        let tab = tab.ok_or(Error::NoActiveTab)?;

        if let Some(url) = tab.url.as_deref() {
            if is_restricted_url(url) {
                tracing::info!(url, "refusing restricted page");
                return Err(Error::RestrictedPage);
            }
        }

        let text = page_text(channel)?;
        tracing::info!(chars = text.chars().count(), summary_type = %kind, "summarizing page");
        summarizer.summarize(&text, kind).await
    }
}

/// Article text of the page, falling back to the user's selection.
///
/// An unreachable page is an error; a page that cannot answer the selection
/// request is treated as having no selection.
pub fn page_text(channel: &dyn PageChannel) -> Result<String> {
    let article = channel.send(Request::GetArticleText).map_err(|err| {
        tracing::warn!(error = %err, "page did not answer article text request");
        Error::PageUnreachable
    })?;
    let text = article.text.trim();
    if !text.is_empty() {
        return Ok(text.to_string());
    }

    tracing::debug!("no article text, trying selection");
    let selection = channel
        .send(Request::GetSelectedText)
        .map(|r| r.text.trim().to_string())
        .unwrap_or_default();
    if selection.is_empty() {
        return Err(Error::NoContent);
    }
    Ok(selection)
}
