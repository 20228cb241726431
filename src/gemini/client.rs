//! Gemini API client
//!
//! HTTP client for the `generateContent` endpoint. This is the only code
//! that ever sees an API key; the key travels as a query parameter and is
//! kept out of every log line and error message.

use tracing::{debug, error, instrument};

use crate::{
    error::{AppError, AppResult},
    gemini::models::{GenerateContentRequest, GenerateContentResponse},
    generation::normalize::{normalize, GenerationResult},
};

/// Gemini API client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// The key is injected here rather than read from the environment at
    /// call time, so callers (and tests) control exactly which secret is
    /// in play.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Check whether the client holds an API key
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate content with the configured key
    pub async fn generate(&self, prompt: &str, model: &str) -> AppResult<GenerationResult> {
        let key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;
        self.generate_with_key(prompt, model, key).await
    }

    /// Generate content with an explicit key override
    #[instrument(skip(self, prompt, key), fields(model = %model))]
    pub async fn generate_with_key(
        &self,
        prompt: &str,
        model: &str,
        key: &str,
    ) -> AppResult<GenerationResult> {
        // The model id arrives untrusted through the proxy body, so it
        // must stay a single path segment
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(model)
        );

        debug!(url = %url, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "Gemini response status");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                message
            };
            error!(status = %status, body = %message, "Gemini request failed");
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        Ok(normalize(payload.into_parts()))
    }
}
