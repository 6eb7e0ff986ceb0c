//! Summarization of extracted text by a remote language model.
//!
//! - `prompt`: summary prompt templates and input truncation
//! - `gemini`: the Gemini `generateContent` client

pub mod gemini;
pub mod prompt;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use gemini::GeminiClient;
pub use prompt::{build_prompt, MAX_INPUT_CHARS};

/// Summary mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SummaryType {
    /// Two or three sentences.
    #[default]
    Brief,
    /// All main points and key details.
    Detailed,
    /// Five to seven "- " bullet points.
    Bullets,
    /// Plain summary, used for unrecognised labels.
    General,
}

impl SummaryType {
    /// Map a label to a summary mode. Unknown labels give [`SummaryType::General`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "brief" => Self::Brief,
            "detailed" => Self::Detailed,
            "bullets" => Self::Bullets,
            _ => Self::General,
        }
    }

    /// The label accepted by [`SummaryType::from_label`].
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Detailed => "detailed",
            Self::Bullets => "bullets",
            Self::General => "general",
        }
    }
}

impl From<String> for SummaryType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<SummaryType> for String {
    fn from(kind: SummaryType) -> Self {
        kind.label().to_string()
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Something that turns article text into a summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` in the given mode.
    async fn summarize(&self, text: &str, kind: SummaryType) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for kind in [SummaryType::Brief, SummaryType::Detailed, SummaryType::Bullets, SummaryType::General] {
            assert_eq!(SummaryType::from_label(kind.label()), kind);
        }
    }

    #[test]
    fn unknown_labels_are_general() {
        assert_eq!(SummaryType::from_label("tweet"), SummaryType::General);
        assert_eq!(SummaryType::from_label(""), SummaryType::General);
        assert_eq!(SummaryType::from_label(" Bullets "), SummaryType::Bullets);
    }
}
