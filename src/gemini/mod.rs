use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::env;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Returned to the caller when the API reply is missing the text field.
pub const FALLBACK_REPLY: &str = "🤖 I didn’t catch that.";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request to the Gemini API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gemini API returned status {status}")]
    Api { status: StatusCode, body: Value },
}

impl GeminiError {
    /// Best-effort diagnostic payload for the error response body.
    pub fn details(&self) -> Value {
        match self {
            GeminiError::Transport(e) => Value::String(e.to_string()),
            GeminiError::Api { body, .. } => body.clone(),
        }
    }
}

// A wrapper for the Gemini generateContent API
#[derive(Clone)]
pub struct GeminiClient {
    api_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    /// Reads GEMINI_API_KEY (required), GEMINI_API_URL and GEMINI_MODEL
    /// (both optional) from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY is not set"))?;

        let api_url =
            env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        info!("Using Gemini API at: {} (model: {})", api_url, model);

        Ok(Self::new(api_key, api_url, model))
    }

    /// Sends one prompt to the generateContent endpoint and returns the
    /// reply text. A well-formed response with no text degrades to
    /// FALLBACK_REPLY rather than an error.
    pub async fn generate_reply(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        );

        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!("Gemini payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(GeminiError::Api { status, body });
        }

        let body: Value = response.json().await?;
        debug!("Gemini response: {}", body);

        let reply = extract_reply_text(&body)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(FALLBACK_REPLY);

        Ok(reply.to_string())
    }
}

// Reply text lives at candidates[0].content.parts[0].text.
fn extract_reply_text(body: &Value) -> Option<&str> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_well_formed_response() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "42" }] }
            }]
        });
        assert_eq!(extract_reply_text(&body), Some("42"));
    }

    #[test]
    fn missing_candidates_yields_none() {
        assert_eq!(extract_reply_text(&json!({})), None);
        assert_eq!(extract_reply_text(&json!({ "candidates": [] })), None);
    }

    #[test]
    fn missing_parts_yields_none() {
        let body = json!({
            "candidates": [{ "content": { "parts": [] } }]
        });
        assert_eq!(extract_reply_text(&body), None);
    }

    #[test]
    fn non_string_text_yields_none() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": 7 }] }
            }]
        });
        assert_eq!(extract_reply_text(&body), None);
    }
}
