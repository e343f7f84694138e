//! Configuration for the LRU cache.
//!
//! The only tunable is the entry capacity. It is fixed when the cache is built
//! and cannot change afterwards.
//!
//! # Examples
//!
//! ```
//! use lru_ring::config::LruCacheConfig;
//! use lru_ring::LruCache;
//! use core::num::NonZeroUsize;
//!
//! // Infallible: the type already guarantees a positive capacity
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap().get(), 1000);
//!
//! // Fallible: validate a capacity that came from user input
//! assert!(LruCacheConfig::new(16).is_ok());
//! assert!(LruCacheConfig::new(0).is_err());
//! assert!(LruCacheConfig::new(-3).is_err());
//! ```

use crate::error::CacheError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// - `capacity`: Maximum number of entries the cache holds at once. Writing a
///   new key into a full cache evicts the least recently used entry.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Validates a requested capacity.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero,
    /// negative, or larger than `usize::MAX` on this target.
    pub fn new(capacity: i64) -> Result<Self, CacheError> {
        usize::try_from(capacity)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(|capacity| LruCacheConfig { capacity })
            .ok_or_else(|| {
                tracing::debug!(requested = capacity, "rejected cache capacity");
                CacheError::InvalidCapacity(capacity)
            })
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
