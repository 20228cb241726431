//! Gemini integration: wire types, the direct API client, and the
//! client-side transport that falls back to the proxy endpoint.

pub mod client;
pub mod models;
pub mod transport;

pub use client::GeminiClient;
pub use transport::{GenerationRequest, TransportClient};
