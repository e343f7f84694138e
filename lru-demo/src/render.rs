//! Text rendering of cache state

use lru_ring::{CacheMetrics, LruCache};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

/// Renders the cache as a single line, most recently used first.
///
/// ```
/// use lru_ring::LruCache;
/// use lru_demo::render::render_list;
///
/// let mut cache = LruCache::try_new(2).unwrap();
/// assert_eq!(render_list(&cache), "(empty)");
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(render_list(&cache), "[MRU] b=2 -> a=1 [LRU]");
/// ```
pub fn render_list<K, V, S>(cache: &LruCache<K, V, S>) -> String
where
    K: Display + Hash + Eq,
    V: Display,
    S: BuildHasher,
{
    if cache.is_empty() {
        return "(empty)".to_string();
    }
    let entries: Vec<String> = cache.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("[MRU] {} [LRU]", entries.join(" -> "))
}

/// Renders the cache counters, one per line, in a stable order.
pub fn render_stats<K, V, S>(cache: &LruCache<K, V, S>) -> String
where
    K: Hash + Eq,
    S: BuildHasher,
{
    let mut out = format!(
        "{} cache: {}/{} entries\n",
        cache.algorithm_name(),
        cache.len(),
        cache.cap()
    );
    for (name, value) in cache.metrics() {
        let is_ratio = name.ends_with("_rate") || name == "cache_utilization";
        let line = if is_ratio {
            format!("  {name:<18} {value:.3}\n")
        } else {
            format!("  {name:<18} {}\n", value as u64)
        };
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list_order_follows_reads() {
        let mut cache = LruCache::try_new(3).unwrap();
        cache.put("a".to_string(), "1".to_string());
        cache.put("b".to_string(), "2".to_string());
        cache.put("c".to_string(), "3".to_string());
        assert_eq!(render_list(&cache), "[MRU] c=3 -> b=2 -> a=1 [LRU]");
        cache.get("a");
        assert_eq!(render_list(&cache), "[MRU] a=1 -> c=3 -> b=2 [LRU]");
    }

    #[test]
    fn test_render_single_entry() {
        let mut cache = LruCache::try_new(1).unwrap();
        cache.put("x", 10);
        assert_eq!(render_list(&cache), "[MRU] x=10 [LRU]");
    }

    #[test]
    fn test_render_stats() {
        let mut cache = LruCache::try_new(2).unwrap();
        cache.put("a", 1);
        cache.get(&"a");
        cache.get(&"b");
        let stats = render_stats(&cache);
        assert!(stats.starts_with("LRU cache: 1/2 entries\n"));
        assert!(stats.contains("  cache_hits         1\n"));
        assert!(stats.contains("  cache_misses       1\n"));
        assert!(stats.contains("  hit_rate           0.500\n"));
        assert!(stats.contains("  cache_utilization  0.500\n"));
    }

    #[test]
    fn test_render_stats_one_line_per_counter() {
        let cache: LruCache<&str, i32> = LruCache::try_new(3).unwrap();
        let stats = render_stats(&cache);
        let lines: Vec<&str> = stats.lines().collect();
        assert_eq!(lines.len(), 1 + cache.metrics().len());
        assert_eq!(lines[0], "LRU cache: 0/3 entries");
        assert!(lines[1..].iter().all(|line| line.starts_with("  ")));
        assert!(stats.ends_with("  updates            0\n"));
    }
}
