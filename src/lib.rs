#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Structure
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         LruCache                             │
//! │                                                              │
//! │   index: HashMap<K, SlotId>           ring: Ring<(K, V)>     │
//! │   ┌──────────────┐                    ┌───────────────────┐  │
//! │   │ "a" ─▶ slot 2│ ─────────────────▶ │ slot 2 (anchor)   │  │
//! │   │ "b" ─▶ slot 0│ ─────────────────▶ │ slot 0            │  │
//! │   │ "c" ─▶ slot 1│ ─────────────────▶ │ slot 1 (LRU)      │  │
//! │   └──────────────┘                    └───────────────────┘  │
//! │                                   next: 2 ─▶ 0 ─▶ 1 ─▶ 2     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Inspecting without touching
//!
//! [`LruCache::get`] counts as a use and moves the entry to the front.
//! [`LruCache::peek`], [`LruCache::iter`] and [`LruCache::snapshot`] never
//! change the order:
//!
//! ```rust
//! use lru_ring::LruCache;
//!
//! let mut cache = LruCache::try_new(3).unwrap();
//! cache.put(1, "one");
//! cache.put(2, "two");
//!
//! assert_eq!(cache.peek(&1), Some(&"one"));
//! assert_eq!(cache.peek_lru(), Some((&1, &"one")));
//!
//! let keys: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![2, 1]);
//! ```
//!
//! ## Metrics
//!
//! ```rust
//! use lru_ring::LruCache;
//! use lru_ring::metrics::CacheMetrics;
//!
//! let mut cache = LruCache::try_new(1).unwrap();
//! cache.put("x", 10);
//! cache.put("y", 20);
//! assert_eq!(cache.get(&"x"), None);
//! assert_eq!(cache.get(&"y"), Some(&20));
//!
//! let metrics = cache.metrics();
//! assert_eq!(metrics["evictions"], 1.0);
//! assert_eq!(metrics["hit_rate"], 0.5);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the cache engine
//! - [`config`]: capacity configuration and validation
//! - [`error`]: error types
//! - [`metrics`]: hit/miss/eviction counters

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Error types.
///
/// `CacheError::InvalidCapacity` is the only failure of the public API.
pub mod error;

/// Cache configuration.
pub mod config;

/// Circular recency ring over a slot arena.
///
/// **Note**: This module is internal infrastructure. It hands out slot
/// handles that are only meaningful together with the cache's index.
pub(crate) mod ring;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Cache metrics.
pub mod metrics;

pub use config::LruCacheConfig;
pub use error::{CacheError, InvariantError};
pub use lru::LruCache;
pub use metrics::{CacheMetrics, LruCacheMetrics};
