//! Configuration management for Storyboard
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Model used when a request does not name one explicitly.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Gemini API base URL
    pub gemini_api_url: String,
    /// Server-held Gemini API key. Optional: without it the proxy
    /// endpoint answers 500 per request, while health endpoints and
    /// direct-key client paths still work.
    pub gemini_api_key: Option<String>,
    /// Default model identifier for requests that do not name one
    pub gemini_model: String,

    /// Path to the plain-text guidance document bundled with the app
    pub guidelines_path: String,

    /// Upstream request timeout (in seconds)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("STORYBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("STORYBOARD_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid STORYBOARD_PORT")?,

            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),

            guidelines_path: env::var("GUIDELINES_PATH")
                .unwrap_or_else(|_| "assets/comic-prompt.txt".to_string()),

            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECONDS")?,
        })
    }
}
