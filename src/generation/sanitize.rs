//! Output sanitizer
//!
//! Models occasionally echo the instruction preamble or the guidance
//! sections back in their answer. This pass strips those blocks by
//! pattern matching. It is best-effort cleanup, not a strict parser: a
//! legitimate answer that happens to contain a marker phrase loses that
//! block too.

use once_cell::sync::Lazy;
use regex::Regex;

static PREAMBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Follow the guidelines").expect("valid preamble pattern"));
static GUIDELINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bGuidelines:").expect("valid guidelines pattern"));
static SCENARIO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bUser scenario to tailor for:").expect("valid scenario pattern")
});

/// Remove echoed instruction and guideline blocks from normalized text.
///
/// Each marker deletes from its occurrence up to the next blank line (or
/// end of string), applied in a fixed order: instruction preamble, then
/// `Guidelines:`, then `User scenario to tailor for:`. Every marker is
/// stripped until none remains, so the output is a fixed point and the
/// pass is idempotent. Text without markers passes through unchanged
/// apart from trimming.
pub fn sanitize(text: &str) -> String {
    let out = strip_blocks(text, &PREAMBLE);
    let out = strip_blocks(&out, &GUIDELINES);
    let out = strip_blocks(&out, &SCENARIO);
    out.trim().to_string()
}

/// Delete every marker match through its next blank line.
fn strip_blocks(text: &str, marker: &Regex) -> String {
    let mut out = text.trim().to_string();
    while let Some(range) = next_block(&out, marker) {
        out.replace_range(range, "");
        out = out.trim().to_string();
    }
    out
}

/// Locate the next block to delete: marker start through the following
/// blank line, or end of string.
fn next_block(text: &str, marker: &Regex) -> Option<std::ops::Range<usize>> {
    let m = marker.find(text)?;
    let block_end = text[m.start()..]
        .find("\n\n")
        .map(|offset| m.start() + offset)
        .unwrap_or(text.len());
    Some(m.start()..block_end)
}
