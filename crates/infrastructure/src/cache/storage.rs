use super::{CacheMetrics, CachedResponse};
use dashmap::DashMap;
use genes_application::ports::ResponseCache;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Process-wide response cache.
///
/// Entries expire lazily on read and in bulk through
/// [`InMemoryResponseCache::purge_expired`]. When full, expired entries are
/// purged first, then the entry closest to expiry is evicted.
pub struct InMemoryResponseCache {
    entries: DashMap<String, CachedResponse, FxBuildHasher>,
    max_entries: usize,
    metrics: Arc<CacheMetrics>,
}

impl InMemoryResponseCache {
    pub fn new(max_entries: usize) -> Self {
        info!(max_entries = max_entries, "Initializing response cache");

        Self {
            entries: DashMap::with_capacity_and_hasher(
                max_entries.min(4096),
                FxBuildHasher::default(),
            ),
            max_entries: max_entries.max(1),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Removes every expired entry, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            CacheMetrics::incr(&self.metrics.expirations, removed as u64);
            debug!(removed = removed, remaining = self.entries.len(), "Purged expired responses");
        }
        removed
    }

    fn make_room(&self) {
        self.purge_expired();
        if self.entries.len() < self.max_entries {
            return;
        }

        let victim = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().expires_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
            CacheMetrics::incr(&self.metrics.evictions, 1);
            debug!(key = %key, "Evicted response to stay within capacity");
        }
    }
}

impl ResponseCache for InMemoryResponseCache {
    fn get(&self, key: &str) -> Option<Arc<str>> {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now) {
                CacheMetrics::incr(&self.metrics.hits, 1);
                return Some(Arc::clone(&entry.body));
            }
        }

        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            CacheMetrics::incr(&self.metrics.expirations, 1);
        }
        CacheMetrics::incr(&self.metrics.misses, 1);
        None
    }

    fn set(&self, key: &str, body: Arc<str>, ttl: Duration) {
        if !self.entries.contains_key(key) && self.entries.len() >= self.max_entries {
            self.make_room();
        }

        self.entries
            .insert(key.to_string(), CachedResponse::new(body, ttl));
        CacheMetrics::incr(&self.metrics.insertions, 1);
    }
}
