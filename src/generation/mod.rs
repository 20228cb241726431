//! Generation pipeline: options parsing, prompt composition, response
//! normalization, output sanitization, and the end-to-end flow.

pub mod flow;
pub mod normalize;
pub mod options;
pub mod prompt;
pub mod sanitize;

pub use flow::{generate_comic, DecisionInput};
pub use normalize::{GenerationResult, Part};
pub use options::parse_options;
pub use sanitize::sanitize;
