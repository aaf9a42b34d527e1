use async_trait::async_trait;
use genes_application::ports::{DatabaseCatalog, GeneTrackReader, ResponseCache};
use genes_domain::{DatabaseDescriptor, DomainError, GeneRecord, GenomicLocation, TrackSource};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock GeneTrackReader
// ============================================================================

pub struct MockGeneTrackReader {
    genes: Vec<GeneRecord>,
    calls: AtomicUsize,
    should_fail: AtomicBool,
    last_dir: Mutex<Option<PathBuf>>,
}

impl MockGeneTrackReader {
    pub fn new(genes: Vec<GeneRecord>) -> Self {
        Self {
            genes,
            calls: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
            last_dir: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn last_dir(&self) -> Option<PathBuf> {
        self.last_dir.lock().unwrap().clone()
    }

    fn record_call(&self, source: &TrackSource) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_dir.lock().unwrap() = Some(source.dir.clone());

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::TrackNotFound(source.id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl GeneTrackReader for MockGeneTrackReader {
    async fn find_genes(
        &self,
        source: &TrackSource,
        location: &GenomicLocation,
    ) -> Result<Vec<GeneRecord>, DomainError> {
        self.record_call(source)?;
        Ok(self
            .genes
            .iter()
            .filter(|g| g.location.overlaps(location))
            .cloned()
            .collect())
    }

    async fn get_genes(
        &self,
        source: &TrackSource,
        term: &str,
    ) -> Result<Vec<GeneRecord>, DomainError> {
        self.record_call(source)?;
        Ok(self
            .genes
            .iter()
            .filter(|g| g.matches_id(term))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Mock ResponseCache (never expires)
// ============================================================================

#[derive(Default)]
pub struct MockResponseCache {
    entries: Mutex<HashMap<String, Arc<str>>>,
    last_ttl: Mutex<Option<Duration>>,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.lock().unwrap()
    }
}

impl ResponseCache for MockResponseCache {
    fn get(&self, key: &str) -> Option<Arc<str>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, body: Arc<str>, ttl: Duration) {
        self.entries.lock().unwrap().insert(key.to_string(), body);
        *self.last_ttl.lock().unwrap() = Some(ttl);
    }
}

// ============================================================================
// Mock DatabaseCatalog
// ============================================================================

pub struct MockDatabaseCatalog {
    databases: Vec<DatabaseDescriptor>,
    calls: AtomicUsize,
}

impl MockDatabaseCatalog {
    pub fn new(databases: Vec<DatabaseDescriptor>) -> Self {
        Self {
            databases,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatabaseCatalog for MockDatabaseCatalog {
    async fn list_databases(&self) -> Result<Vec<DatabaseDescriptor>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.databases.clone())
    }
}
