//! End-to-end generation flow
//!
//! The single pipeline the UI layer calls for one decision: parse the
//! options parameter, summarize the user context, load the guidance
//! document, build the prompt, issue the transport call, and sanitize the
//! returned text. Stateless across invocations; one attempt per call.

use tracing::{info, instrument};

use crate::{
    error::AppResult,
    gemini::transport::{GenerationRequest, TransportClient},
    generation::{
        normalize::GenerationResult,
        options::parse_options,
        prompt::{build_prompt, load_guidelines, summarize_context},
        sanitize::sanitize,
    },
};

/// User input for one decision, as handed over by the UI layer
#[derive(Debug, Clone, Default)]
pub struct DecisionInput {
    /// Free-form problem statement
    pub problem: Option<String>,
    /// Candidate options as a JSON array string; malformed input degrades
    /// to no options
    pub options_json: Option<String>,
}

/// Run the full generation pipeline for one decision.
///
/// Soft failures (malformed options, missing guidance document) degrade
/// and the request is still attempted; transport failures surface as a
/// single error.
#[instrument(skip_all)]
pub async fn generate_comic(
    transport: &TransportClient,
    guidelines_path: &str,
    input: &DecisionInput,
) -> AppResult<GenerationResult> {
    let options = parse_options(input.options_json.as_deref());
    let context = summarize_context(input.problem.as_deref(), &options);
    let guidelines = load_guidelines(guidelines_path).await;
    let prompt = build_prompt(&guidelines, &context);

    info!(
        options = options.len(),
        has_problem = input.problem.is_some(),
        prompt_len = prompt.len(),
        "Running generation flow"
    );

    let mut result = transport.generate(&GenerationRequest::new(prompt)).await?;
    result.text = sanitize(&result.text);
    Ok(result)
}
