use thiserror::Error;
use tw_compactor::FilterError;
use tw_tabular::ZonError;

/// Recoverable failures. Messages carry the operation and input length,
/// never the input itself.
#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("{operation}: input is not valid JSON ({input_len} bytes): {source}")]
    InvalidJson {
        operation: &'static str,
        input_len: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("{operation} ({input_len} bytes): {source}")]
    Zon {
        operation: &'static str,
        input_len: usize,
        #[source]
        source: ZonError,
    },
    #[error("filter ({input_len} bytes): {source}")]
    Filter {
        input_len: usize,
        #[source]
        source: FilterError,
    },
    #[error("{operation}: serialization failed: {source}")]
    Serialization {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
