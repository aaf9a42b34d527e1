use super::InMemoryResponseCache;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Background task purging expired responses on a fixed interval.
pub struct CacheSweeper {
    cache: Arc<InMemoryResponseCache>,
    interval: Duration,
}

impl CacheSweeper {
    pub fn new(cache: Arc<InMemoryResponseCache>, interval_secs: u64) -> Self {
        Self {
            cache,
            interval: Duration::from_secs(interval_secs.max(1)),
        }
    }

    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                interval_secs = self.interval.as_secs(),
                "Response cache sweeper started"
            );

            let mut ticker = tokio::time::interval(self.interval);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let removed = self.cache.purge_expired();
                let metrics = self.cache.metrics();
                debug!(
                    removed = removed,
                    entries = self.cache.len(),
                    hit_rate = format!("{:.1}%", metrics.hit_rate()),
                    evictions = metrics.evictions.load(Ordering::Relaxed),
                    "Cache sweep complete"
                );
            }
        })
    }
}
