//! In-memory TTL cache for Quill.
//!
//! A thread-safe key-value store where every entry carries its own expiry.
//! Expiry is checked lazily on read: a `get` past the deadline evicts the
//! entry and reports a miss. [`cleanup_expired`](TtlCache::cleanup_expired)
//! sweeps eagerly for the stats endpoint.
//!
//! The cache is constructed once at service start and handed to the HTTP
//! layer; the content pipeline never sees it. Concurrent requests that
//! miss on the same key may both recompute; last write wins, which is
//! acceptable for idempotent response payloads.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

/// One cached value with its expiry deadline.
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Cache statistics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries currently stored, expired or not.
    pub total_entries: usize,
    /// Entries that would still be served.
    pub valid_entries: usize,
    /// Entries past their deadline but not yet evicted.
    pub expired_entries: usize,
}

/// Thread-safe in-memory cache with per-entry TTL.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
    default_ttl: u64,
}

impl<V: Clone> TtlCache<V> {
    /// Create a cache with the given default TTL in seconds.
    #[must_use]
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    /// The default TTL in seconds.
    #[must_use]
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    /// Get a value if present and not expired.
    ///
    /// A read past the deadline evicts the entry and behaves as a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock().unwrap();

        match entries.get(key) {
            Some(entry) if Instant::now() > entry.expires_at => {
                debug!("Cache key '{}' expired, removing", key);
                entries.remove(key);
                None
            }
            Some(entry) => {
                debug!("Cache hit for key '{}'", key);
                Some(entry.value.clone())
            }
            None => None,
        }
    }

    /// Store a value with the default TTL.
    pub fn set(&self, key: &str, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Store a value with an explicit TTL in seconds.
    ///
    /// Overwrites any existing entry for the key.
    pub fn set_with_ttl(&self, key: &str, value: V, ttl: u64) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + Duration::from_secs(ttl),
        };

        self.entries.lock().unwrap().insert(key.to_owned(), entry);
        debug!("Cache set for key '{}' with TTL {}s", key, ttl);
    }

    /// Delete a key. Returns whether it was present.
    pub fn delete(&self, key: &str) -> bool {
        let removed = self.entries.lock().unwrap().remove(key).is_some();
        if removed {
            debug!("Cache key '{}' deleted", key);
        }
        removed
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
        debug!("Cache cleared");
    }

    /// Evict all expired entries and return how many were removed.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let now = Instant::now();

        let before = entries.len();
        entries.retain(|_, entry| now <= entry.expires_at);
        let removed = before - entries.len();

        if removed > 0 {
            debug!("Cleaned up {} expired cache entries", removed);
        }
        removed
    }

    /// Snapshot entry counts without evicting anything.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock().unwrap();
        let now = Instant::now();

        let valid = entries
            .values()
            .filter(|entry| now <= entry.expires_at)
            .count();

        CacheStats {
            total_entries: entries.len(),
            valid_entries: valid,
            expired_entries: entries.len() - valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Sleep long enough for a zero-TTL entry to pass its deadline.
    fn tick() {
        thread::sleep(Duration::from_millis(10));
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let cache = TtlCache::new(300);

        cache.set("posts_list", "payload".to_owned());

        assert_eq!(cache.get("posts_list"), Some("payload".to_owned()));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_expired_read_is_a_miss_and_evicts() {
        let cache = TtlCache::new(300);

        cache.set_with_ttl("k", 1_u32, 0);
        tick();

        assert_eq!(cache.get("k"), None);
        // The lazy eviction removed the entry entirely.
        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn test_set_overwrites_existing_entry() {
        let cache = TtlCache::new(300);

        cache.set("k", "old".to_owned());
        cache.set("k", "new".to_owned());

        assert_eq!(cache.get("k"), Some("new".to_owned()));
        assert_eq!(cache.stats().total_entries, 1);
    }

    #[test]
    fn test_delete_reports_presence() {
        let cache = TtlCache::new(300);
        cache.set("k", 1_u32);

        assert!(cache.delete("k"));
        assert!(!cache.delete("k"));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let cache = TtlCache::new(300);
        cache.set("a", 1_u32);
        cache.set("b", 2_u32);

        cache.clear();

        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn test_cleanup_expired_counts_removed_entries() {
        let cache = TtlCache::new(300);
        cache.set_with_ttl("dead1", 1_u32, 0);
        cache.set_with_ttl("dead2", 2_u32, 0);
        cache.set("alive", 3_u32);
        tick();

        assert_eq!(cache.cleanup_expired(), 2);
        assert_eq!(cache.get("alive"), Some(3));
        assert_eq!(cache.cleanup_expired(), 0);
    }

    #[test]
    fn test_stats_separate_valid_and_expired() {
        let cache = TtlCache::new(300);
        cache.set_with_ttl("dead", 1_u32, 0);
        cache.set("alive", 2_u32);
        tick();

        let stats = cache.stats();

        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.valid_entries, 1);
        assert_eq!(stats.expired_entries, 1);
    }

    #[test]
    fn test_concurrent_access_is_safe() {
        let cache = std::sync::Arc::new(TtlCache::new(300));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = std::sync::Arc::clone(&cache);
                thread::spawn(move || {
                    let key = format!("k{}", i % 2);
                    cache.set(&key, i);
                    cache.get(&key);
                    cache.cleanup_expired();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.stats().total_entries <= 2);
    }
}
