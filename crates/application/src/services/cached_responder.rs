use crate::ports::ResponseCache;
use genes_domain::DomainError;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Cache-or-compute wrapper around a [`ResponseCache`].
///
/// On a hit the stored body is returned untouched, so repeated identical
/// requests within the TTL get byte-identical responses. Failures are never
/// cached.
pub struct CachedResponder {
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl CachedResponder {
    pub fn new(cache: Arc<dyn ResponseCache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    pub async fn get_or_compute<T, F, Fut>(&self, key: &str, compute: F) -> Result<Arc<str>, DomainError>
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        if let Some(body) = self.cache.get(key) {
            debug!(key = %key, "Serving cached response");
            return Ok(body);
        }

        let value = compute().await?;
        let body: Arc<str> = serde_json::to_string(&value)
            .map_err(|e| DomainError::Serialization(e.to_string()))?
            .into();

        self.cache.set(key, Arc::clone(&body), self.ttl);
        debug!(key = %key, bytes = body.len(), "Cached fresh response");

        Ok(body)
    }
}
