use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZonError {
    #[error("Zon encoding failed: {0}")]
    Encode(String),
    #[error("Zon decoding failed at line {line}: {reason}")]
    Decode { line: usize, reason: String },
}

impl ZonError {
    pub(crate) fn decode(line: usize, reason: impl Into<String>) -> Self {
        Self::Decode {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZonError>;
