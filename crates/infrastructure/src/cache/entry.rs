use std::sync::Arc;
use std::time::{Duration, Instant};

/// Serialized response body with its expiry (lazy expiration).
#[derive(Clone, Debug)]
pub struct CachedResponse {
    pub body: Arc<str>,
    pub expires_at: Instant,
}

impl CachedResponse {
    pub fn new(body: Arc<str>, ttl: Duration) -> Self {
        Self {
            body,
            expires_at: Instant::now() + ttl,
        }
    }

    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
