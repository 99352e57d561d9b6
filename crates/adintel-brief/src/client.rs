//! HTTP client for the Anthropic messages API.
//!
//! Wraps `reqwest` with API key management, typed error handling and the
//! single `POST /v1/messages` call brief generation needs. Error envelopes
//! (`"type": "error"`) are surfaced as [`BriefError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::json;

use crate::error::BriefError;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

/// Client for model-written brief generation.
///
/// Use [`BriefClient::new`] for production or [`BriefClient::with_base_url`]
/// to point at a mock server in tests.
pub struct BriefClient {
    client: Client,
    api_key: String,
    messages_url: Url,
    model: String,
    max_tokens: u32,
}

impl BriefClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`BriefError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        model: &str,
        max_tokens: u32,
        timeout_secs: u64,
    ) -> Result<Self, BriefError> {
        Self::with_base_url(api_key, model, max_tokens, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`BriefError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`BriefError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        max_tokens: u32,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, BriefError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("adintel/0.1 (competitive-intelligence)")
            .build()?;

        let messages_url = format!("{}/v1/messages", base_url.trim_end_matches('/'));
        let messages_url = Url::parse(&messages_url)
            .map_err(|e| BriefError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            messages_url,
            model: model.to_owned(),
            max_tokens,
        })
    }

    /// Sends the prompt as a single user message and returns the text of the
    /// first content block.
    ///
    /// # Errors
    ///
    /// - [`BriefError::Api`] if the API returns an error envelope, or a
    ///   non-2xx status without one.
    /// - [`BriefError::Http`] on network failure.
    /// - [`BriefError::Deserialize`] if the body is not valid JSON.
    /// - [`BriefError::MissingContent`] if the response has no text block.
    pub async fn generate(&self, prompt: &str) -> Result<String, BriefError> {
        let payload = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [{ "role": "user", "content": prompt }],
        });

        tracing::debug!(model = %self.model, "requesting brief generation");

        let response = self
            .client
            .post(self.messages_url.clone())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&payload)
            .send()
            .await?;

        // Read the body before checking status: API errors carry a JSON
        // envelope worth surfacing over a bare status code.
        let status = response.status();
        let body = response.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| BriefError::Deserialize {
                context: self.messages_url.to_string(),
                source: e,
            })?;

        Self::check_api_error(&body, status)?;

        body.get("content")
            .and_then(|c| c.get(0))
            .and_then(|block| block.get("text"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .ok_or(BriefError::MissingContent)
    }

    fn check_api_error(
        body: &serde_json::Value,
        status: reqwest::StatusCode,
    ) -> Result<(), BriefError> {
        if body.get("type").and_then(serde_json::Value::as_str) == Some("error") {
            let msg = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(BriefError::Api(msg));
        }
        if !status.is_success() {
            return Err(BriefError::Api(format!("unexpected HTTP status {status}")));
        }
        Ok(())
    }
}
