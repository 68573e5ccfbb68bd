use crate::error::{Result, TwError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of cached transform results.
pub const DEFAULT_CACHE_SIZE: usize = 100;
/// Default entry lifetime: one hour.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub cache: CacheConfig,
    /// Filters applied by `filter_output_default`, in order.
    pub default_filters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub max_size: usize,
    pub ttl_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_CACHE_SIZE,
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            default_filters: vec!["extra-whitespace".into(), "repeated-lines".into()],
        }
    }
}

impl OptimizerConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache.max_size == 0 {
            return Err(TwError::InvalidConfig("cache.max_size must be greater than 0".into()));
        }
        if self.cache.ttl_secs == 0 {
            return Err(TwError::InvalidConfig("cache.ttl_secs must be greater than 0".into()));
        }
        Ok(())
    }
}
