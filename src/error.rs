//! Error types for the LRU cache.
//!
//! Only construction can fail. A lookup for an absent key is not an error and
//! is reported as `None` by [`LruCache::get`](crate::LruCache::get).
//!
//! # Examples
//!
//! ```
//! use lru_ring::{CacheError, LruCache};
//!
//! let cache: Result<LruCache<&str, i32>, CacheError> = LruCache::try_new(0);
//! assert_eq!(cache.unwrap_err(), CacheError::InvalidCapacity(0));
//! ```

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Errors surfaced by the public cache API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// Construction was requested with a capacity that is not a positive
    /// integer representable as `usize`. Carries the rejected request.
    InvalidCapacity(i64),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidCapacity(requested) => write!(
                f,
                "invalid capacity {requested}: capacity must be a positive integer"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CacheError {}

/// Returned by [`LruCache::check_invariants`](crate::LruCache::check_invariants)
/// when the index and the recency ring disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvariantError {}
