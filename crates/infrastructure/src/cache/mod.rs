// Response cache: TTL entries in a sharded concurrent map

pub mod entry;
pub mod metrics;
pub mod storage;
pub mod sweeper;

pub use entry::CachedResponse;
pub use metrics::CacheMetrics;
pub use storage::InMemoryResponseCache;
pub use sweeper::CacheSweeper;
