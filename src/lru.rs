//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a fixed-capacity LRU cache with O(1) operations for
//! every common cache operation. It is built from two cooperating parts:
//!
//! - an **index**, a hash map from key to the entry's slot handle, and
//! - a **recency ring**, a circular doubly linked list over a slot arena whose
//!   anchor is the most recently used entry.
//!
//! The ring owns the entries. The index only holds slot handles, so the two
//! never alias mutable references and the whole cache is plain safe Rust.
//!
//! # Algorithm
//!
//! Every read or write of a key moves its entry to the anchor. When a new key
//! is written into a full cache, the entry just before the anchor (the least
//! recently used one) is unlinked and its index mapping dropped before the new
//! entry is linked in. Updating an existing key changes its value in place and
//! never evicts.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!   - Iteration / snapshot: O(n)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the number of entries held. Storage grows on demand up
//!     to the capacity; after that freed slots are reused, so a full cache
//!     never allocates on the write path.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. The index and the ring are updated
//! together and must not be interleaved, so callers sharing a cache across
//! threads need one exclusive lock around the whole cache.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::{CacheError, InvariantError};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use crate::ring::{self, Ring, SlotId};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on the number of entries reserved up front. Larger caches grow
/// their storage on demand until they fill up.
const MAX_PREALLOC: usize = 1024;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches capacity,
/// the least recently used entry will be evicted to make room for new entries.
///
/// # Examples
///
/// ```
/// use lru_ring::LruCache;
///
/// let mut cache = LruCache::try_new(2).unwrap();
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// assert_eq!(cache.put("cherry", 3), Some(("banana", 2)));
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.snapshot(), vec![("cherry", 3), ("apple", 1)]);
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    ring: Ring<(K, V)>,
    index: HashMap<K, SlotId, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V, DefaultHashBuilder> {
    /// Creates a new LRU cache from a configuration with an optional hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use lru_ring::config::LruCacheConfig;
    /// use lru_ring::LruCache;
    /// use core::num::NonZeroUsize;
    ///
    /// let config = LruCacheConfig {
    ///     capacity: NonZeroUsize::new(128).unwrap(),
    /// };
    /// let cache: LruCache<u64, String> = LruCache::init(config, None);
    /// assert!(cache.is_empty());
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LruCache::with_hasher(config, hasher.unwrap_or_default())
    }

    /// Creates a new LRU cache that holds at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> Self {
        LruCache::init(LruCacheConfig { capacity: cap }, None)
    }

    /// Creates a new LRU cache from an unchecked capacity.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is not
    /// positive; no cache is created in that case.
    ///
    /// ```
    /// use lru_ring::{CacheError, LruCache};
    ///
    /// assert!(LruCache::<&str, i32>::try_new(3).is_ok());
    /// assert_eq!(
    ///     LruCache::<&str, i32>::try_new(-3).unwrap_err(),
    ///     CacheError::InvalidCapacity(-3)
    /// );
    /// ```
    pub fn try_new(capacity: i64) -> Result<Self, CacheError> {
        Ok(LruCache::init(LruCacheConfig::new(capacity)?, None))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the given configuration and hash builder.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let cap = config.capacity.get();
        let reserve = cap.min(MAX_PREALLOC);
        LruCache {
            config,
            ring: Ring::with_capacity(reserve),
            index: HashMap::with_capacity_and_hasher(reserve, hash_builder),
            metrics: LruCacheMetrics::new(cap as u64),
        }
    }

    /// Maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Number of entries currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Counters recorded so far.
    #[inline]
    pub fn stats(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Returns a reference to the value of `key` and marks it most recently
    /// used. Returns `None` on a miss.
    ///
    /// A miss is distinct from any stored value, including falsy ones:
    ///
    /// ```
    /// use lru_ring::LruCache;
    ///
    /// let mut cache = LruCache::try_new(2).unwrap();
    /// cache.put("zero", 0);
    /// assert_eq!(cache.get(&"zero"), Some(&0));
    /// assert_eq!(cache.get(&"missing"), None);
    /// ```
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.touch(key)?;
        self.ring.get(id).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value of `key` and marks it most
    /// recently used.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.touch(key)?;
        self.ring.get_mut(id).map(|(_, v)| v)
    }

    /// Returns the value of `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = *self.index.get(key)?;
        self.ring.get(id).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is cached. Does not change recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains_key(key)
    }

    /// The most recently used entry.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        let id = self.ring.anchor()?;
        self.ring.get(id).map(|(k, v)| (k, v))
    }

    /// The least recently used entry, i.e. the next eviction candidate.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let id = self.ring.tail()?;
        self.ring.get(id).map(|(k, v)| (k, v))
    }

    /// Removes `key` from the cache and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.index.remove(key)?;
        let (_, value) = self.ring.remove(id)?;
        self.metrics.record_removal();
        Some(value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.ring.pop_back()?;
        self.index.remove(&key);
        self.metrics.record_removal();
        Some((key, value))
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.ring.clear();
        self.metrics.record_clear();
    }

    /// Iterates over the entries from most to least recently used without
    /// changing their order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.ring.iter(),
        }
    }

    /// Checks that the index and the recency ring describe the same set of
    /// entries and that the ring is a single well-formed cycle.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.ring.validate()?;
        if self.index.len() != self.ring.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but the ring links {} entries",
                self.index.len(),
                self.ring.len()
            )));
        }
        if self.index.len() > self.cap().get() {
            return Err(InvariantError::new(format!(
                "{} entries exceed the capacity of {}",
                self.index.len(),
                self.cap()
            )));
        }
        for (position, (id, (key, _))) in self.ring.iter().enumerate() {
            if self.index.get(key) != Some(&id) {
                return Err(InvariantError::new(format!(
                    "ring position {position} (slot {}) is not the index entry for its key",
                    id.index()
                )));
            }
        }
        Ok(())
    }

    /// Resolves `key`, moves it to the anchor and records the lookup.
    fn touch<Q>(&mut self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(id) = self.index.get(key).copied() else {
            self.metrics.record_miss();
            return None;
        };
        self.ring.move_to_front(id)?;
        self.metrics.record_hit();
        Some(id)
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.ring.pop_back()?;
        self.index.remove(&key);
        self.metrics.record_eviction();
        tracing::trace!(
            len = self.index.len(),
            capacity = self.cap().get(),
            "evicted least recently used entry"
        );
        Some((key, value))
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Writes `value` under `key` and marks it most recently used.
    ///
    /// An existing key has its value replaced in place and nothing is evicted.
    /// A new key written into a full cache first evicts the least recently used
    /// entry, which is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(id) = self.index.get(&key).copied() {
            let updated = self
                .ring
                .get_mut(id)
                .map(|entry| entry.1 = value)
                .and_then(|()| self.ring.move_to_front(id));
            debug_assert!(updated.is_some(), "index entry points at an empty ring slot");
            if updated.is_some() {
                self.metrics.record_update();
            }
            return None;
        }

        let evicted = if self.index.len() >= self.cap().get() {
            self.evict_lru()
        } else {
            None
        };

        let id = self.ring.push_front((key.clone(), value));
        self.index.insert(key, id);
        self.metrics.record_insertion();
        tracing::trace!(len = self.index.len(), "inserted new entry");

        evicted
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LruCache<K, V, S> {
    /// Copies out every entry from most to least recently used.
    ///
    /// Unlike [`get`](Self::get) this never changes the recency order.
    pub fn snapshot(&self) -> Vec<(K, V)> {
        self.iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> core::fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.index.len())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries from most to least recently used.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: ring::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, (k, v))| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> core::fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn cache<K: Hash + Eq, V>(cap: i64) -> LruCache<K, V> {
        LruCache::try_new(cap).unwrap()
    }

    #[test]
    fn test_lru_get_put() {
        let mut cache = cache(2);
        assert_eq!(cache.put("apple", 1), None);
        assert_eq!(cache.put("banana", 2), None);
        assert_eq!(cache.get(&"apple"), Some(&1));
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), None);
        assert_eq!(cache.put("apple", 3), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.put("cherry", 4), Some(("banana", 2)));
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_invalid_capacity() {
        assert_eq!(
            LruCache::<&str, i32>::try_new(0).unwrap_err(),
            CacheError::InvalidCapacity(0)
        );
        assert_eq!(
            LruCache::<&str, i32>::try_new(-3).unwrap_err(),
            CacheError::InvalidCapacity(-3)
        );
    }

    #[test]
    fn test_lru_get_mut() {
        let mut cache = cache(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        if let Some(v) = cache.get_mut(&"apple") {
            *v = 3;
        }
        assert_eq!(cache.get(&"apple"), Some(&3));
        cache.put("cherry", 4);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_update_moves_to_front_without_evicting() {
        let mut cache = cache(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.put("a", 10), None);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.snapshot(), vec![("a", 10), ("b", 2)]);
        assert_eq!(cache.stats().updates, 1);
        assert_eq!(cache.stats().evictions, 0);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_peek_does_not_touch() {
        let mut cache = cache(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.peek(&"a"), Some(&1));
        assert!(cache.contains(&"a"));
        assert_eq!(cache.peek_mru(), Some((&"b", &2)));
        assert_eq!(cache.peek_lru(), Some((&"a", &1)));
        cache.put("c", 3);
        assert!(!cache.contains(&"a"));
        assert_eq!(cache.stats().requests, 0);
    }

    #[test]
    fn test_lru_remove() {
        let mut cache = cache(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.remove(&"apple"), Some(1));
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.remove(&"cherry"), None);
        assert_eq!(cache.put("cherry", 3), None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_remove_last_entry() {
        let mut cache = cache(1);
        cache.put("only", 1);
        assert_eq!(cache.remove(&"only"), Some(1));
        assert!(cache.is_empty());
        assert_eq!(cache.peek_mru(), None);
        assert_eq!(cache.peek_lru(), None);
        assert!(cache.snapshot().is_empty());
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_pop_lru() {
        let mut cache = cache(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        cache.get(&"a");
        assert_eq!(cache.pop_lru(), Some(("b", 2)));
        assert_eq!(cache.pop_lru(), Some(("c", 3)));
        assert_eq!(cache.pop_lru(), Some(("a", 1)));
        assert_eq!(cache.pop_lru(), None);
        assert_eq!(cache.stats().removals, 3);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = cache(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.cap().get(), 2);
        cache.put("cherry", 3);
        assert_eq!(cache.get(&"cherry"), Some(&3));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_lru_string_keys() {
        let mut cache = cache(2);
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        cache.put(key1.clone(), 1);
        cache.put(key2.clone(), 2);
        assert_eq!(cache.get(&key1), Some(&1));
        assert_eq!(cache.get(&key2), Some(&2));
        assert_eq!(cache.get("apple"), Some(&1));
        assert_eq!(cache.get("banana"), Some(&2));
        assert_eq!(cache.peek("apple"), Some(&1));
        assert_eq!(cache.remove("banana"), Some(2));
    }

    #[test]
    fn test_lru_iter_order() {
        let mut cache = cache(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        cache.get(&"a");
        let order: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
        assert_eq!(cache.iter().len(), 3);
        let mut count = 0;
        for (_, v) in &cache {
            count += *v;
        }
        assert_eq!(count, 6);
    }

    #[test]
    fn test_lru_snapshot_is_read_only() {
        let mut cache = cache(2);
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);
        let first = cache.snapshot();
        let second = cache.snapshot();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![("b".to_string(), 2), ("a".to_string(), 1)]
        );
        cache.put("c".to_string(), 3);
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn test_lru_metrics() {
        let mut cache = cache(2);
        let metrics = cache.metrics();
        assert_eq!(metrics.get("requests").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_hits").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_misses").unwrap(), &0.0);
        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.get(&"apple");
        cache.get(&"banana");
        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_hits").unwrap(), &2.0);
        cache.get(&"durian");
        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_misses").unwrap(), &1.0);
        assert_eq!(metrics.get("requests").unwrap(), &3.0);
        cache.put("cherry", 3);
        let metrics = cache.metrics();
        assert_eq!(metrics.get("evictions").unwrap(), &1.0);
        assert_eq!(metrics.get("insertions").unwrap(), &3.0);
        assert_eq!(metrics.get("entries").unwrap(), &2.0);
        assert_eq!(metrics.get("cache_utilization").unwrap(), &1.0);
        assert_eq!(cache.algorithm_name(), "LRU");
    }

    #[test]
    fn test_lru_slots_reused_at_capacity() {
        let mut cache = cache(3);
        for i in 0..100 {
            cache.put(i, i * 2);
            cache.check_invariants().unwrap();
        }
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.snapshot(), vec![(99, 198), (98, 196), (97, 194)]);
    }

    #[test]
    fn test_lru_debug() {
        let mut cache = cache(4);
        cache.put(1, "one");
        assert_eq!(
            format!("{cache:?}"),
            "LruCache { capacity: 4, len: 1 }"
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_lru_huge_capacity_grows_on_demand() {
        let mut cache: LruCache<String, String> = LruCache::try_new(i64::MAX).unwrap();
        assert_eq!(cache.cap().get(), i64::MAX as usize);
        assert!(cache.ring.reserved() <= MAX_PREALLOC);

        cache.put("a".to_string(), "1".to_string());
        cache.put("b".to_string(), "2".to_string());
        assert_eq!(cache.get("a"), Some(&"1".to_string()));
        assert_eq!(
            cache.snapshot(),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
        cache.check_invariants().unwrap();

        let cache: LruCache<u64, u64> = LruCache::try_new(1_000_000_000_000).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lru_grows_past_initial_reservation() {
        let cap = MAX_PREALLOC + 10;
        let mut cache = cache(cap as i64);
        for i in 0..cap + 5 {
            cache.put(i, i);
        }
        assert_eq!(cache.len(), cap);
        assert_eq!(cache.peek_lru(), Some((&5, &5)));
        cache.check_invariants().unwrap();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "index entry points at an empty ring slot")]
    fn test_lru_update_of_unlinked_slot_is_caught() {
        let mut cache = cache(2);
        cache.put("a", 1);
        let id = *cache.index.get(&"a").unwrap();
        cache.ring.remove(id);
        cache.put("a", 2);
    }

    #[test]
    fn test_lru_behind_a_lock() {
        extern crate std;
        use std::sync::{Arc, Mutex};
        use std::thread;

        let cache: Arc<Mutex<LruCache<i32, i32>>> = Arc::new(Mutex::new(cache(50)));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..200 {
                        let mut guard = cache.lock().unwrap();
                        if i % 2 == 0 {
                            guard.put(i % 80, t);
                        } else {
                            let _ = guard.get(&(i % 80));
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let guard = cache.lock().unwrap();
        assert!(guard.len() <= 50);
        guard.check_invariants().unwrap();
    }
}
