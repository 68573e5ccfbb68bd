use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replace every whitespace run (newlines included) with one space.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    RE_WHITESPACE_RUN.replace_all(text, " ")
}

/// Collapse whitespace runs and trim. Idempotent.
pub fn optimize(text: &str) -> String {
    collapse_whitespace(text).trim().to_string()
}
