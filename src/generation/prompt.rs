//! Prompt composer
//!
//! Merges the static guidance document, the user's problem statement, and
//! the option list into the single instruction string sent upstream.

use tracing::warn;

/// Boilerplate telling the model to answer without echoing its inputs
pub const BASE_INSTRUCTION: &str = "Follow the guidelines below to produce the final, tailored \
     comic panel prompts. Respond with ONLY the final comic text. Do not repeat the guidelines \
     or the user input.";

/// Render the user's problem and options as one context block.
///
/// Sections are joined with a blank line; both inputs are optional and an
/// empty result means there is nothing to tailor for.
pub fn summarize_context(problem: Option<&str>, options: &[String]) -> String {
    let mut sections = Vec::new();

    if let Some(problem) = problem.map(str::trim).filter(|p| !p.is_empty()) {
        sections.push(format!("Problem: {problem}"));
    }
    if !options.is_empty() {
        sections.push(format!("Options:\n- {}", options.join("\n- ")));
    }

    sections.join("\n\n")
}

/// Combine the base instruction, guidance document, and user context into
/// the final prompt. Total over all inputs, including empty ones.
pub fn build_prompt(guidelines: &str, context: &str) -> String {
    let guidelines = guidelines.trim();
    if context.is_empty() {
        format!("{BASE_INSTRUCTION}\n\nGuidelines:\n{guidelines}")
    } else {
        format!(
            "{BASE_INSTRUCTION}\n\nGuidelines:\n{guidelines}\n\nUser scenario to tailor for:\n{context}"
        )
    }
}

/// Load the guidance document from disk.
///
/// A missing or unreadable document degrades to empty guidance so the
/// generation request is still attempted.
pub async fn load_guidelines(path: &str) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!(path = %path, error = %e, "Failed to load guidance document, proceeding without it");
            String::new()
        }
    }
}
