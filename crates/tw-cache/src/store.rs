use crate::entry::{CacheEntry, CacheKey};
use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tracing::{debug, trace};
use tw_core::CacheConfig;

/// Read-only diagnostics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
}

struct Inner<V> {
    entries: LruCache<CacheKey, CacheEntry<V>>,
    hits: u64,
    misses: u64,
}

/// LRU cache with a fixed time-to-live.
///
/// All access goes through one mutex, so a lookup followed by an insert for
/// the same key (see [`Cache::get_or_try_insert_with`]) is atomic.
pub struct Cache<V = String> {
    inner: Mutex<Inner<V>>,
    ttl: Duration,
}

impl<V: Clone> Cache<V> {
    /// A capacity of 0 is raised to 1.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(cap),
                hits: 0,
                misses: 0,
            }),
            ttl,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_size, config.ttl())
    }

    /// Look up `key`, refreshing its recency. Expired entries are removed and
    /// count as a miss.
    pub fn get(&self, key: &CacheKey) -> Option<V> {
        let mut guard = self.inner.lock();
        Self::lookup(&mut guard, key, Instant::now(), self.ttl)
    }

    /// Insert or replace `key`, evicting the least-recently-used entry when full.
    pub fn set(&self, key: CacheKey, value: V) {
        let mut guard = self.inner.lock();
        Self::insert(&mut guard, key, value, Instant::now());
    }

    /// Presence check. Does not refresh recency; drops the entry if expired.
    pub fn has(&self, key: &CacheKey) -> bool {
        let mut guard = self.inner.lock();
        let expired = match guard.entries.peek(key) {
            Some(entry) => entry.is_expired(Instant::now(), self.ttl),
            None => return false,
        };
        if expired {
            trace!(operation = key.operation(), "cache entry expired");
            guard.entries.pop(key);
        }
        !expired
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// The lock is held across `compute`, so concurrent callers missing on the
    /// same key run the transform once. Errors are returned without storing.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        let mut guard = self.inner.lock();
        if let Some(value) = Self::lookup(&mut guard, &key, Instant::now(), self.ttl) {
            return Ok(value);
        }
        let value = compute()?;
        Self::insert(&mut guard, key, value.clone(), Instant::now());
        Ok(value)
    }

    pub fn get_or_insert_with(&self, key: CacheKey, compute: impl FnOnce() -> V) -> V {
        self.get_or_try_insert_with(key, || Ok::<_, Infallible>(compute()))
            .unwrap_or_else(|never| match never {})
    }

    /// Drop every expired entry. Never required; lookups expire lazily.
    pub fn purge_expired(&self) -> usize {
        let mut guard = self.inner.lock();
        let now = Instant::now();
        let expired: Vec<CacheKey> = guard
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, self.ttl))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            guard.entries.pop(key);
        }
        expired.len()
    }

    /// Time since `key` was last read or written. Does not refresh recency.
    pub fn idle_time(&self, key: &CacheKey) -> Option<Duration> {
        let guard = self.inner.lock();
        let now = Instant::now();
        guard
            .entries
            .peek(key)
            .filter(|entry| !entry.is_expired(now, self.ttl))
            .map(|entry| entry.idle_for(now))
    }

    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    pub fn size(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().entries.cap().get()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn hits(&self) -> u64 {
        self.inner.lock().hits
    }

    pub fn misses(&self) -> u64 {
        self.inner.lock().misses
    }

    pub fn stats(&self) -> CacheStats {
        let guard = self.inner.lock();
        CacheStats {
            size: guard.entries.len(),
            max_size: guard.entries.cap().get(),
        }
    }

    fn lookup(inner: &mut Inner<V>, key: &CacheKey, now: Instant, ttl: Duration) -> Option<V> {
        let expired = match inner.entries.get_mut(key) {
            Some(entry) if !entry.is_expired(now, ttl) => {
                entry.last_access = now;
                let value = entry.value.clone();
                inner.hits += 1;
                debug!(operation = key.operation(), "cache hit");
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            trace!(operation = key.operation(), "cache entry expired");
            inner.entries.pop(key);
        }
        inner.misses += 1;
        debug!(operation = key.operation(), expired, "cache miss");
        None
    }

    fn insert(inner: &mut Inner<V>, key: CacheKey, value: V, now: Instant) {
        let replacing = inner.entries.contains(&key);
        if let Some((evicted, _)) = inner.entries.push(key, CacheEntry::new(value, now)) {
            if !replacing {
                trace!(operation = evicted.operation(), "evicted least-recently-used entry");
            }
        }
    }
}

impl<V: Clone> Default for Cache<V> {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

impl<V> std::fmt::Debug for Cache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.inner.lock();
        f.debug_struct("Cache")
            .field("size", &guard.entries.len())
            .field("capacity", &guard.entries.cap())
            .field("ttl", &self.ttl)
            .finish()
    }
}
