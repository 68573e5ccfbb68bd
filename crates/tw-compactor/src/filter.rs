//! Output filtering for already-generated agent text.
//!
//! Filters run in the order given, each on the previous one's output; the
//! final result is trimmed once. Besides the named built-ins, any name is
//! compiled as a regex whose matches are deleted.

use crate::text::collapse_whitespace;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;

static RE_FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static RE_FENCE_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A```[^\n]*\n(.*?)```").unwrap());

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid filter pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
pub enum FilterStep {
    /// `markdown-code-blocks`
    CodeBlocks,
    /// `extra-whitespace`
    ExtraWhitespace,
    /// `repeated-lines`
    RepeatedLines,
    /// Any other name: delete every match.
    Pattern(Regex),
}

impl FilterStep {
    pub fn parse(name: &str) -> Result<Self, FilterError> {
        match name {
            "markdown-code-blocks" => Ok(Self::CodeBlocks),
            "extra-whitespace" => Ok(Self::ExtraWhitespace),
            "repeated-lines" => Ok(Self::RepeatedLines),
            pattern => Regex::new(pattern)
                .map(Self::Pattern)
                .map_err(|source| FilterError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                }),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::CodeBlocks => strip_code_fences(text),
            Self::ExtraWhitespace => collapse_whitespace(text).into_owned(),
            Self::RepeatedLines => collapse_repeated_lines(text),
            Self::Pattern(re) => re.replace_all(text, "").into_owned(),
        }
    }
}

/// A compiled filter list.
#[derive(Debug, Clone, Default)]
pub struct OutputFilter {
    steps: Vec<FilterStep>,
}

impl OutputFilter {
    /// Compile every name up front so a bad pattern fails before any text is touched.
    pub fn compile<S: AsRef<str>>(names: &[S]) -> Result<Self, FilterError> {
        let steps = names
            .iter()
            .map(|name| FilterStep::parse(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[FilterStep] {
        &self.steps
    }

    pub fn apply(&self, text: &str) -> String {
        let filtered = self
            .steps
            .iter()
            .fold(text.to_string(), |acc, step| step.apply(&acc));
        filtered.trim().to_string()
    }
}

/// Compile `names` and apply them to `text`.
pub fn filter<S: AsRef<str>>(text: &str, names: &[S]) -> Result<String, FilterError> {
    Ok(OutputFilter::compile(names)?.apply(text))
}

/// Drop the opening fence line (with any language tag) and the closing fence
/// of each fenced block, keeping the body.
fn strip_code_fences(text: &str) -> String {
    RE_FENCED_BLOCK
        .replace_all(text, |caps: &Captures| RE_FENCE_MARKERS.replace(&caps[0], "$1").into_owned())
        .into_owned()
}

/// Collapse consecutive identical lines. Non-adjacent duplicates stay.
fn collapse_repeated_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.dedup();
    lines.join("\n")
}
