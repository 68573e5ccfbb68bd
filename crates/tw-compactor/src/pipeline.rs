//! Content-class dispatch.

use crate::{json, markdown, text};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content class selecting the optimization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Text,
    Markdown,
    Json,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown content kind: {other}")),
        }
    }
}

/// Run the pass for `kind`. No sanitization happens here.
pub fn optimize(content: &str, kind: ContentKind) -> String {
    match kind {
        ContentKind::Text => text::optimize(content),
        ContentKind::Markdown => markdown::optimize(content),
        ContentKind::Json => json::optimize(content),
    }
}
