//! Cache Metrics
//!
//! Counters for the LRU cache, reported through the [`CacheMetrics`] trait as a
//! `BTreeMap` so that keys always come out in the same order. Deterministic
//! output keeps test assertions and rendered statistics stable.
//!
//! Only operations that express a *use* of the cache are counted as requests:
//! [`get`](crate::LruCache::get) and [`get_mut`](crate::LruCache::get_mut).
//! Inspection through `peek`, `contains`, `iter` or `snapshot` is not recorded.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters tracked by an [`LruCache`](crate::LruCache).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Total number of lookups made through `get`/`get_mut`
    pub requests: u64,

    /// Lookups that found their key
    pub cache_hits: u64,

    /// New keys written into the cache
    pub insertions: u64,

    /// Writes that replaced the value of an existing key
    pub updates: u64,

    /// Entries dropped because a new key arrived while the cache was full
    pub evictions: u64,

    /// Entries dropped by an explicit `remove` or `pop_lru`
    pub removals: u64,

    /// Entries currently held
    pub entries: u64,

    /// Maximum number of entries the cache can hold
    pub capacity: u64,
}

impl LruCacheMetrics {
    /// Creates an empty set of counters for a cache of `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    #[inline]
    pub(crate) fn record_miss(&mut self) {
        self.requests += 1;
    }

    #[inline]
    pub(crate) fn record_insertion(&mut self) {
        self.insertions += 1;
        self.entries += 1;
    }

    #[inline]
    pub(crate) fn record_update(&mut self) {
        self.updates += 1;
    }

    #[inline]
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
        self.entries -= 1;
    }

    #[inline]
    pub(crate) fn record_removal(&mut self) {
        self.removals += 1;
        self.entries -= 1;
    }

    #[inline]
    pub(crate) fn record_clear(&mut self) {
        self.entries = 0;
    }

    /// Lookups that did not find their key.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Fraction of lookups that hit, or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, or 0.0 before the first lookup.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// How full the cache is, between 0.0 and 1.0.
    pub fn cache_utilization(&self) -> f64 {
        if self.capacity > 0 {
            self.entries as f64 / self.capacity as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a `BTreeMap` for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("updates".to_string(), self.updates as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics.insert("entries".to_string(), self.entries as f64);
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert("cache_utilization".to_string(), self.cache_utilization());

        metrics
    }
}

/// Uniform metrics reporting interface.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU").
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
