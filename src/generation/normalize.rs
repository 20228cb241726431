//! Response normalizer
//!
//! Walks the ordered parts of an upstream Gemini payload and folds them
//! into a single [`GenerationResult`]: concatenated text, ordered image
//! blobs, and a truncated diagnostic summary of the response shape.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::gemini::models::{InlineData, RawPart};

/// Longest text preview recorded in the debug summary
const TEXT_PREVIEW_CHARS: usize = 120;
/// Longest image-data preview recorded in the debug summary
const IMAGE_PREVIEW_CHARS: usize = 40;
/// Serialized debug summary is cut to this many characters
const SUMMARY_MAX_CHARS: usize = 200;

/// A response part after explicit classification
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Plain text content
    Text(String),
    /// Inline base64 image payload
    InlineImage(InlineData),
    /// Unrecognized shape; retains the field names that were present
    Other(Vec<String>),
}

impl From<RawPart> for Part {
    fn from(raw: RawPart) -> Self {
        if let Some(text) = raw.text {
            return Part::Text(text);
        }
        if let Some(inline) = raw.inline_data {
            return Part::InlineImage(inline);
        }
        let keys: Vec<String> = raw.extra.keys().cloned().collect();
        debug!(keys = ?keys, "Unrecognized response part shape");
        Part::Other(keys)
    }
}

/// Result of one completed generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// All text parts concatenated in order, trimmed
    pub text: String,
    /// All inline images in order, mime type and base64 data verbatim
    pub images: Vec<InlineData>,
    /// Truncated diagnostic summary of the raw parts, not for end users
    #[serde(rename = "debugParts", skip_serializing_if = "Option::is_none")]
    pub debug_parts: Option<String>,
}

/// Fold raw upstream parts into a [`GenerationResult`]
pub fn normalize(raw_parts: Vec<RawPart>) -> GenerationResult {
    let parts: Vec<Part> = raw_parts.into_iter().map(Part::from).collect();
    let debug_parts = summarize(&parts);

    let mut text = String::new();
    let mut images = Vec::new();
    for part in parts {
        match part {
            Part::Text(t) => text.push_str(&t),
            Part::InlineImage(image) => images.push(image),
            Part::Other(_) => {}
        }
    }

    GenerationResult {
        text: text.trim().to_string(),
        images,
        debug_parts,
    }
}

/// Build the diagnostic summary for a parts list.
///
/// Returns `None` when serialization fails; diagnostics must never sink
/// the request that produced them.
fn summarize(parts: &[Part]) -> Option<String> {
    let entries: Vec<serde_json::Value> = parts
        .iter()
        .enumerate()
        .map(|(idx, part)| match part {
            Part::Text(t) => json!({
                "idx": idx,
                "type": "text",
                "len": t.chars().count(),
                "preview": char_prefix(t, TEXT_PREVIEW_CHARS),
            }),
            Part::InlineImage(image) => json!({
                "idx": idx,
                "type": "inlineData",
                "mimeType": image.mime_type,
                "size": image.data.len(),
                "preview": char_prefix(&image.data, IMAGE_PREVIEW_CHARS),
            }),
            Part::Other(keys) => json!({
                "idx": idx,
                "type": "other",
                "keys": keys,
            }),
        })
        .collect();

    let serialized = serde_json::to_string(&entries).ok()?;
    if serialized.chars().count() > SUMMARY_MAX_CHARS {
        let mut truncated: String = serialized.chars().take(SUMMARY_MAX_CHARS).collect();
        truncated.push('…');
        Some(truncated)
    } else {
        Some(serialized)
    }
}

fn char_prefix(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
