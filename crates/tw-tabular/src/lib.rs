//! Line-oriented table encodings for arrays of uniform records.
//!
//! - [`toon`]: display-only compaction, `[N]{cols}:` header. No decoder.
//! - [`zon`]: columnar `@data(N):cols` encoding with an exact inverse.

pub mod error;
pub mod toon;
pub mod zon;

pub use error::{Result, ZonError};
pub use toon::RenameSchema;
