//! Token optimizer facade.
//!
//! Composes sanitization, the content passes, the tabular codecs and output
//! filtering behind one surface, memoizing every result in an owned cache.

pub mod error;
pub mod optimizer;

pub use error::{OptimizerError, Result};
pub use optimizer::{TabularKind, TokenOptimizer};
pub use tw_cache::CacheStats;
pub use tw_compactor::ContentKind;
pub use tw_core::{Document, OptimizerConfig};
pub use tw_tabular::RenameSchema;
