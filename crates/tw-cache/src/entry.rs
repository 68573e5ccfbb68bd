use std::time::{Duration, Instant};

/// Identity of a memoized transform: `(operation, params, content)`.
///
/// Fields are compared structurally, so a parameter string that happens to
/// contain a separator can never alias a different request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: String,
    params: String,
    content: String,
}

impl CacheKey {
    pub fn new(
        operation: impl Into<String>,
        params: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            operation: operation.into(),
            params: params.into(),
            content: content.into(),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn params(&self) -> &str {
        &self.params
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub inserted_at: Instant,
    pub last_access: Instant,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, now: Instant) -> Self {
        Self {
            value,
            inserted_at: now,
            last_access: now,
        }
    }

    /// Time since the entry was last read or written.
    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_access)
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.inserted_at) > ttl
    }
}
