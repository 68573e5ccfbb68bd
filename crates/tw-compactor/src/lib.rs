//! Content passes for LLM-bound text.
//!
//! Passes:
//! 1. Sanitize: entity-escape text, strip unsafe characters from mapping keys
//! 2. Text: collapse whitespace runs
//! 3. Markdown: drop leading indentation, fold blank-line runs
//! 4. JSON: minify (silently degrades on unparsable input)
//! 5. Filter: ordered post-processing of already-generated output

pub mod filter;
pub mod json;
pub mod markdown;
pub mod pipeline;
pub mod sanitize;
pub mod text;

pub use filter::{FilterError, FilterStep, OutputFilter};
pub use pipeline::{optimize, ContentKind};
