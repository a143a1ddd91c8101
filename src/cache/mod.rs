//! Squared-norm cache
//!
//! Memoizes an example's self-similarity k(x, x) under one specific kernel.
//! A cache instance is scoped to exactly one kernel's semantics: reusing it
//! across kernels with different similarity functions yields stale norms.
//! Entries are keyed by example identity and invalidated only explicitly;
//! the cache performs no change detection on example contents.

use crate::data::example::{Example, ExampleId};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Bounded LRU cache of squared norms, keyed by example identity
pub struct SquaredNormCache {
    cache: LruCache<ExampleId, f64>,
    hits: u64,
    misses: u64,
}

impl SquaredNormCache {
    /// Create a cache holding up to `capacity` entries
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the previously stored squared norm of `example`, or `None`
    /// on a cache miss. A miss is never an error.
    pub fn get(&mut self, example: &Example) -> Option<f64> {
        if let Some(&value) = self.cache.get(&example.id()) {
            self.hits += 1;
            Some(value)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Stores (or overwrites) the squared norm of `example`
    pub fn set(&mut self, example: &Example, squared_norm: f64) {
        self.cache.put(example.id(), squared_norm);
    }

    /// Drops the entry for `example`, returning it if present. Callers that
    /// mutate an example's representations after caching use this.
    pub fn invalidate(&mut self, example: &Example) -> Option<f64> {
        self.cache.pop(&example.id())
    }

    /// Fraction of lookups that hit
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            capacity: self.cache.cap().get(),
            size: self.cache.len(),
        }
    }

    /// Clear all entries and counters
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub capacity: usize,
    pub size: usize,
}
