//! Generation proxy endpoint
//!
//! `POST /gemini` forwards a prompt to the Gemini API using the
//! server-held secret key, so clients without a key of their own never
//! see one. The response has the same shape the direct client path
//! produces, keeping the caller's code path uniform.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Request body for the proxy endpoint
#[derive(Debug, Default, Deserialize)]
pub struct GenerateBody {
    pub prompt: Option<String>,
    pub model: Option<String>,
}

/// Handle a proxied generation request.
///
/// The body is parsed leniently: malformed or non-string-prompt payloads
/// behave like an empty body and fail validation rather than producing a
/// decoding error.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let body: GenerateBody = serde_json::from_slice(&body).unwrap_or_default();

    let prompt = body
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or(AppError::MissingField("prompt"))?;

    if !state.gemini.is_configured() {
        return Err(AppError::MissingApiKey);
    }

    let model = body.model.unwrap_or_else(|| state.config.gemini_model.clone());

    info!(
        model = %model,
        prompt_len = prompt.len(),
        "Proxying generateContent request"
    );

    let result = state.gemini.generate(&prompt, &model).await?;
    Ok((StatusCode::OK, Json(result)))
}
