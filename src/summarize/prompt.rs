//! Summary prompts.

use super::SummaryType;
use crate::text::truncate_chars;

/// Longest article text, in characters, sent to the model.
pub const MAX_INPUT_CHARS: usize = 20_000;

/// Marker appended to truncated text.
pub const TRUNCATION_MARKER: &str = "...";

/// Instruction placed before the article for each summary mode.
#[must_use]
pub fn instruction(kind: SummaryType) -> &'static str {
    match kind {
        SummaryType::Brief => "Provide a brief summary of the following article in 2-3 sentences:",
        SummaryType::Detailed => {
            "Provide a detailed summary of the following article, covering all main points and key details:"
        }
        SummaryType::Bullets => {
            r#"Summarize the following article in 5-7 key points. Format each point as "- " (dash + space):"#
        }
        SummaryType::General => "Summarize the following article:",
    }
}

/// Cut `text` to [`MAX_INPUT_CHARS`] characters, marking the cut.
#[must_use]
pub fn truncate_input(text: &str) -> String {
    match truncate_chars(text, MAX_INPUT_CHARS) {
        Some(head) => format!("{head}{TRUNCATION_MARKER}"),
        None => text.to_string(),
    }
}

/// Full prompt for summarizing `text`.
#[must_use]
pub fn build_prompt(text: &str, kind: SummaryType) -> String {
    format!("{}\n\n{}", instruction(kind), truncate_input(text))
}
