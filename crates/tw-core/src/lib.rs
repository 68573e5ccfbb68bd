//! Shared model for the tokenwise engine: the `Document` value tree,
//! tabular shape detection, configuration and the core error type.

pub mod config;
pub mod document;
pub mod error;

pub use config::{CacheConfig, OptimizerConfig};
pub use document::{tabular_shape, Document, Mapping, TabularShape};
pub use error::{Result, TwError};

#[cfg(test)]
mod tests;
