//! Storyboard - decision-comic generation service
//!
//! This library provides the generation request pipeline behind the
//! Storyboard app: prompt assembly from a user's decision problem and
//! options, transport to the Gemini `generateContent` API (directly or
//! through the secrecy-preserving proxy endpoint), normalization of the
//! mixed text/image response, and sanitization of the returned text.

pub mod config;
pub mod error;
pub mod gemini;
pub mod generation;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::gemini::{GeminiClient, GenerationRequest, TransportClient};
pub use crate::generation::{generate_comic, DecisionInput, GenerationResult};
pub use crate::routes::create_router;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub start_time: Instant,
    /// Gemini client holding the server-side secret; the only component
    /// with access to it
    pub gemini: Arc<GeminiClient>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(std::time::Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        let gemini = Arc::new(GeminiClient::new(
            http_client.clone(),
            config.gemini_api_url.clone(),
            config.gemini_api_key.clone(),
        ));

        Ok(Self {
            config,
            http_client,
            start_time: Instant::now(),
            gemini,
        })
    }
}
