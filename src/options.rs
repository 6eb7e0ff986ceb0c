//! Configuration options for summarization.
//!
//! The `Options` struct holds the stored API credential and the settings of
//! the summarization call. Extraction thresholds are fixed policy and are not
//! configurable here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::summarize::SummaryType;

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration options for summarization.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings, or [`Options::load`] to read a TOML file where every
/// key is optional:
///
/// ```toml
/// api_key = "..."
/// model = "gemini-2.5-flash"
/// summary_type = "bullets"
/// ```
///
/// # Example
///
/// ```rust
/// use page_digest::{Options, SummaryType};
///
/// let options = Options {
///     api_key: Some("secret".to_string()),
///     summary_type: SummaryType::Detailed,
///     ..Options::default()
/// };
/// assert_eq!(options.api_key().ok(), Some("secret"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Gemini API key. Summarizing without one is a user-facing error.
    ///
    /// Default: `None`
    pub api_key: Option<String>,

    /// Model used for `generateContent`.
    ///
    /// Default: `"gemini-2.5-flash"`
    pub model: String,

    /// Base URL of the Gemini REST API.
    ///
    /// Default: `"https://generativelanguage.googleapis.com/v1beta"`
    pub api_base: String,

    /// Sampling temperature sent as `generationConfig.temperature`.
    ///
    /// Default: `0.2`
    pub temperature: f32,

    /// Summary mode used when the caller does not pick one.
    ///
    /// Default: `SummaryType::Brief`
    pub summary_type: SummaryType,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            temperature: 0.2,
            summary_type: SummaryType::Brief,
        }
    }
}

impl Options {
    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded options");
        Self::from_toml_str(&text)
    }

    /// Apply the [`API_KEY_ENV`] override from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    /// Replace the API key when `key` is present and not blank.
    #[must_use]
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// The configured API key, or [`Error::MissingApiKey`] when it is absent
    /// or blank.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.api_key.is_none());
        assert_eq!(opts.model, "gemini-2.5-flash");
        assert_eq!(opts.api_base, DEFAULT_API_BASE);
        assert!((opts.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(opts.summary_type, SummaryType::Brief);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        assert!(matches!(Options::default().api_key(), Err(Error::MissingApiKey)));

        let blank = Options {
            api_key: Some("   ".to_string()),
            ..Options::default()
        };
        assert!(matches!(blank.api_key(), Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts = Options::from_toml_str("api_key = \"abc\"\nsummary_type = \"bullets\"\n");
        let opts = opts.unwrap_or_default();

        assert_eq!(opts.api_key.as_deref(), Some("abc"));
        assert_eq!(opts.summary_type, SummaryType::Bullets);
        assert_eq!(opts.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = Options::from_toml_str("temperature = \"hot\"");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_api_key_override_ignores_blank_values() {
        let opts = Options {
            api_key: Some("stored".to_string()),
            ..Options::default()
        };

        let kept = opts.clone().with_api_key_override(Some(" ".to_string()));
        assert_eq!(kept.api_key.as_deref(), Some("stored"));

        let kept = opts.clone().with_api_key_override(None);
        assert_eq!(kept.api_key.as_deref(), Some("stored"));

        let replaced = opts.with_api_key_override(Some("from-env".to_string()));
        assert_eq!(replaced.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = Options::load("/nonexistent/page-digest.toml");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
