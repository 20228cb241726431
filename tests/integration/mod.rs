//! Integration tests for the Storyboard generation service
//!
//! These verify the complete request/response flow: the proxy endpoint
//! against a mocked Gemini upstream, the client-side transport branch
//! selection, and the end-to-end generation pipeline.

mod flow;
mod health;
