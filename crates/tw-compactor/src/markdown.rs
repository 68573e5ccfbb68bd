use regex::Regex;
use std::sync::LazyLock;

static RE_BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip leading whitespace from each line, fold runs of blank lines into a
/// single blank line, trim. Trailing spaces inside a line are kept
/// (markdown hard breaks). Idempotent.
pub fn optimize(markdown: &str) -> String {
    let dedented = markdown
        .split('\n')
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n");
    RE_BLANK_RUN.replace_all(&dedented, "\n\n").trim().to_string()
}
