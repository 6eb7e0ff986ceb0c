//! Google Gemini `generateContent` client.
//!
//! Sends the summary prompt as a single user part and reads back the text of
//! the first candidate. Failed responses become [`Error::Api`] carrying the
//! best message the body offers.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{build_prompt, Summarizer, SummaryType};
use crate::error::{Error, Result};
use crate::options::Options;

/// Message used when a failed response carries no usable error text.
pub const DEFAULT_ERROR_MESSAGE: &str = "API request failed. Check your key.";

/// Text returned when a successful response carries no candidate text.
pub const EMPTY_SUMMARY: &str = "No summary available.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
}

/// Google Gemini `generateContent` client.
///
/// One request per call: no retries and no timeout.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
    temperature: f32,
}

impl GeminiClient {
    /// Create a client for the configured model. Fails with
    /// [`Error::MissingApiKey`] when no key is configured.
    pub fn from_options(options: &Options) -> Result<Self> {
        let api_key = options.api_key()?.to_string();
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model: options.model.clone(),
            api_base: options.api_base.trim_end_matches('/').to_string(),
            temperature: options.temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    /// Send a prompt and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint();
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.temperature,
            },
        };

        tracing::debug!(url = %url, prompt_bytes = prompt.len(), "sending Gemini request");

        let resp = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Api(format!("Gemini request failed: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::Api(format!("Failed to read Gemini response: {e}")))?;
        let data = serde_json::from_str::<Value>(&body);

        if !status.is_success() {
            let message = data.as_ref().map_or(DEFAULT_ERROR_MESSAGE, error_message);
            tracing::warn!(status = %status, error = message, "Gemini request rejected");
            return Err(Error::Api(message.to_string()));
        }

        let data = data.map_err(|e| Error::Api(format!("Failed to parse Gemini response: {e}")))?;
        Ok(summary_text(&data).to_string())
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, text: &str, kind: SummaryType) -> Result<String> {
        let prompt = build_prompt(text, kind);
        self.generate(&prompt).await
    }
}

/// Best-effort error text of a failed response: `error.message`, else
/// `error` when it is a string, else [`DEFAULT_ERROR_MESSAGE`].
#[must_use]
pub fn error_message(data: &Value) -> &str {
    let error = data.get("error");
    error
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .or_else(|| error.and_then(Value::as_str).filter(|m| !m.is_empty()))
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
}

/// Generated text of a successful response, or [`EMPTY_SUMMARY`].
#[must_use]
pub fn summary_text(data: &Value) -> &str {
    data.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .unwrap_or(EMPTY_SUMMARY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_wire_format() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: "prompt" }],
            }],
            generation_config: GeminiGenerationConfig { temperature: 0.5 },
        };
        let body = serde_json::to_value(&request).unwrap_or_default();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "prompt" }] }],
                "generationConfig": { "temperature": 0.5 }
            })
        );
    }

    #[test]
    fn error_message_prefers_nested_message() {
        let data = json!({ "error": { "code": 400, "message": "API key not valid." } });
        assert_eq!(error_message(&data), "API key not valid.");
    }

    #[test]
    fn error_message_accepts_string_error() {
        let data = json!({ "error": "quota exhausted" });
        assert_eq!(error_message(&data), "quota exhausted");
    }

    #[test]
    fn error_message_falls_back_to_default() {
        assert_eq!(error_message(&json!({})), DEFAULT_ERROR_MESSAGE);
        assert_eq!(error_message(&json!({ "error": { "code": 500 } })), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn summary_text_reads_first_candidate() {
        let data = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "First." }, { "text": "Ignored." }] } },
                { "content": { "parts": [{ "text": "Second candidate." }] } }
            ]
        });
        assert_eq!(summary_text(&data), "First.");
    }

    #[test]
    fn summary_text_defaults_when_missing() {
        assert_eq!(summary_text(&json!({ "candidates": [] })), EMPTY_SUMMARY);
        assert_eq!(
            summary_text(&json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] })),
            EMPTY_SUMMARY
        );
    }

    #[test]
    fn client_requires_api_key() {
        let result = GeminiClient::from_options(&Options::default());
        assert!(matches!(result, Err(Error::MissingApiKey)));
    }

    #[test]
    fn endpoint_includes_model() {
        let options = Options {
            api_key: Some("k".to_string()),
            api_base: "http://localhost:9999/v1beta/".to_string(),
            ..Options::default()
        };
        let client = GeminiClient::from_options(&options);
        let endpoint = client.map(|c| c.endpoint()).unwrap_or_default();
        assert_eq!(endpoint, "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent");
    }
}
