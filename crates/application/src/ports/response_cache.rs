use std::sync::Arc;
use std::time::Duration;

/// Process-wide store of serialized responses.
///
/// Implementations must tolerate concurrent `get`/`set`; when two writers
/// race on the same key the last one wins.
pub trait ResponseCache: Send + Sync {
    /// Returns the stored body if present and not expired.
    fn get(&self, key: &str) -> Option<Arc<str>>;

    /// Stores `body` under `key` for `ttl`.
    fn set(&self, key: &str, body: Arc<str>, ttl: Duration);
}
