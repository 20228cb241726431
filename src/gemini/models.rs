//! Wire types for the Gemini `generateContent` API
//!
//! Request and response shapes follow the v1beta REST contract. Response
//! parts are decoded with optional fields plus a captured remainder so the
//! normalizer can classify each part explicitly instead of guessing.

use serde::{Deserialize, Serialize};

/// A request to `POST /v1beta/models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Build a single-turn user request for the given prompt
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

/// One conversational turn in the request
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<RequestPart>,
}

/// Request-side part. Only text prompts are sent.
#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    pub text: String,
}

/// Generation parameters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub response_modalities: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
        }
    }
}

/// Top-level response from `generateContent`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Ordered parts of the first candidate, empty when the path is absent
    pub fn into_parts(self) -> Vec<RawPart> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
    }
}

/// One response candidate
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

/// Content block of a candidate
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<RawPart>,
}

/// Response-side part as it arrives off the wire.
///
/// Which field is populated decides the part's kind; any fields this
/// client does not model are captured in `extra` for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPart {
    pub text: Option<String>,
    #[serde(rename = "inlineData")]
    pub inline_data: Option<InlineData>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Inline binary payload, base64-encoded. Also the wire shape of images
/// in a `GenerationResult`, so data passes through without re-encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}
