//! Bounded, time-expiring memo store shared by every transform.
//!
//! Eviction is least-recently-used once capacity is reached; expiry is lazy
//! and checked against insertion time on every lookup.

pub mod entry;
pub mod store;

pub use entry::{CacheEntry, CacheKey};
pub use store::{Cache, CacheStats};
