//! Normalized kernel composition
//!
//! Reports k(a, b) / sqrt(k(a, a) * k(b, b)), memoizing the two
//! self-similarities in a squared-norm cache. The cache is owned by exactly
//! one kernel instance; callers that mutate an example's representation
//! contents after caching must call [`NormalizedKernel::invalidate`] (or
//! [`NormalizedKernel::clear_cache`]) themselves, the cache does no change
//! detection.

use crate::cache::{CacheStats, SquaredNormCache};
use crate::core::error::Result;
use crate::data::example::Example;
use crate::kernel::traits::Kernel;
use std::cell::RefCell;

const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Wraps a base kernel with normalization backed by a squared-norm cache
pub struct NormalizedKernel<K: Kernel> {
    base: K,
    cache: RefCell<SquaredNormCache>,
}

impl<K: Kernel> NormalizedKernel<K> {
    pub fn new(base: K) -> Self {
        Self::with_cache_capacity(base, DEFAULT_CACHE_CAPACITY)
    }

    /// Bound the number of cached squared norms
    pub fn with_cache_capacity(base: K, capacity: usize) -> Self {
        Self {
            base,
            cache: RefCell::new(SquaredNormCache::new(capacity)),
        }
    }

    /// The wrapped kernel
    pub fn base(&self) -> &K {
        &self.base
    }

    /// Self-similarity of `example` under the base kernel, cached
    pub fn squared_norm(&self, example: &Example) -> Result<f64> {
        if let Some(norm) = self.cache.borrow_mut().get(example) {
            return Ok(norm);
        }
        let norm = self.base.compute(example, example)?;
        self.cache.borrow_mut().set(example, norm);
        Ok(norm)
    }

    /// Drops the cached norm of `example`; call after mutating its contents
    pub fn invalidate(&mut self, example: &Example) {
        self.cache.get_mut().invalidate(example);
    }

    /// Drops every cached norm
    pub fn clear_cache(&mut self) {
        self.cache.get_mut().clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }
}

impl<K: Kernel> Kernel for NormalizedKernel<K> {
    fn compute(&self, a: &Example, b: &Example) -> Result<f64> {
        let raw = self.base.compute(a, b)?;
        let norm_a = self.squared_norm(a)?;
        let norm_b = self.squared_norm(b)?;
        // A zero self-similarity would divide by zero; the similarity to a
        // zero-norm example is reported as 0
        if norm_a <= 0.0 || norm_b <= 0.0 {
            return Ok(0.0);
        }
        Ok(raw / (norm_a * norm_b).sqrt())
    }
}
