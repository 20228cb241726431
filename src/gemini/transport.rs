//! Transport front door
//!
//! Chooses between the direct Gemini path and the secrecy-preserving
//! proxy for each request: a resolvable key means a direct call, no key
//! means the request goes to `POST {proxy}/gemini` carrying the prompt
//! and model only, never a key.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    error::{AppError, AppResult},
    gemini::client::GeminiClient,
    generation::normalize::GenerationResult,
};

/// Parameters for one generation invocation, built once per request
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Model identifier; the configured default applies when absent
    pub model: Option<String>,
    /// Per-request key override; treated as non-secret
    pub api_key: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            api_key: None,
        }
    }
}

/// Body forwarded to the proxy endpoint
#[derive(Debug, Serialize)]
struct ProxyRequest<'a> {
    prompt: &'a str,
    model: &'a str,
}

/// Error shape the proxy may answer with, even on a 2xx status
#[derive(Debug, Deserialize)]
struct ProxyErrorBody {
    error: Option<String>,
}

/// Client-side transport that issues exactly one attempt per invocation
pub struct TransportClient {
    client: reqwest::Client,
    gemini: GeminiClient,
    proxy_url: String,
    default_model: String,
}

impl TransportClient {
    pub fn new(
        client: reqwest::Client,
        gemini: GeminiClient,
        proxy_url: impl Into<String>,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            gemini,
            proxy_url: proxy_url.into(),
            default_model: default_model.into(),
        }
    }

    /// Issue a generation request over whichever path the key situation
    /// allows
    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationResult> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);

        if let Some(key) = request.api_key.as_deref() {
            return self.gemini.generate_with_key(&request.prompt, model, key).await;
        }
        if self.gemini.is_configured() {
            return self.gemini.generate(&request.prompt, model).await;
        }
        self.generate_via_proxy(&request.prompt, model).await
    }

    #[instrument(skip(self, prompt), fields(model = %model))]
    async fn generate_via_proxy(&self, prompt: &str, model: &str) -> AppResult<GenerationResult> {
        let url = format!("{}/gemini", self.proxy_url);
        debug!(url = %url, prompt_len = prompt.len(), "Sending request through proxy");

        let response = self
            .client
            .post(&url)
            .json(&ProxyRequest { prompt, model })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The proxy answers {error} JSON; fall back to the raw body,
            // then to a status-only message
            let message = serde_json::from_str::<ProxyErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or(body);
            let message = if message.is_empty() {
                format!("Gemini proxy request failed ({})", status.as_u16())
            } else {
                message
            };
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.unwrap_or_default();
        if let Ok(ProxyErrorBody { error: Some(error) }) = serde_json::from_str(&body) {
            return Err(AppError::Proxy(error));
        }

        let result: GenerationResult = serde_json::from_str(&body)?;
        Ok(result)
    }
}
