#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use genes_api::{create_api_routes, AppState};
use genes_application::ports::{DatabaseCatalog, GeneTrackReader};
use genes_application::services::CachedResponder;
use genes_application::use_cases::{
    FindGenesUseCase, GetAboutUseCase, ListDatabasesUseCase, SearchGenesUseCase,
};
use genes_domain::{
    DatabaseDescriptor, DomainError, GeneRecord, GenomicLocation, Level, QueryDefaults, Strand,
    TrackSource,
};
use genes_infrastructure::cache::InMemoryResponseCache;
use http_body_util::BodyExt;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub struct StubReader {
    genes: Vec<GeneRecord>,
    calls: AtomicUsize,
    missing: bool,
    last_source: Mutex<Option<TrackSource>>,
}

impl StubReader {
    pub fn new(genes: Vec<GeneRecord>) -> Self {
        Self {
            genes,
            calls: AtomicUsize::new(0),
            missing: false,
            last_source: Mutex::new(None),
        }
    }

    pub fn missing() -> Self {
        Self {
            missing: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_source(&self) -> Option<TrackSource> {
        self.last_source.lock().unwrap().clone()
    }

    fn record(&self, source: &TrackSource) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_source.lock().unwrap() = Some(source.clone());
        if self.missing {
            return Err(DomainError::TrackNotFound(source.id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl GeneTrackReader for StubReader {
    async fn find_genes(
        &self,
        source: &TrackSource,
        location: &GenomicLocation,
    ) -> Result<Vec<GeneRecord>, DomainError> {
        self.record(source)?;
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
        self.record(source)?;
        Ok(self
            .genes
            .iter()
            .filter(|g| g.matches_id(term))
            .cloned()
            .collect())
    }
}

pub struct StubCatalog {
    databases: Vec<DatabaseDescriptor>,
    fail: bool,
}

impl StubCatalog {
    pub fn new(databases: Vec<DatabaseDescriptor>) -> Self {
        Self {
            databases,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            databases: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl DatabaseCatalog for StubCatalog {
    async fn list_databases(&self) -> Result<Vec<DatabaseDescriptor>, DomainError> {
        if self.fail {
            return Err(DomainError::IoError("permission denied".to_string()));
        }
        Ok(self.databases.clone())
    }
}

pub struct TestApp {
    pub router: Router,
    pub cache: Arc<InMemoryResponseCache>,
}

pub fn build_app(
    reader: Arc<dyn GeneTrackReader>,
    catalog: Arc<dyn DatabaseCatalog>,
    data_root: &Path,
) -> TestApp {
    let cache = Arc::new(InMemoryResponseCache::new(1000));
    let responder = Arc::new(CachedResponder::new(
        cache.clone(),
        Duration::from_secs(3600),
    ));

    let state = AppState {
        get_about: Arc::new(GetAboutUseCase::new()),
        find_genes: Arc::new(FindGenesUseCase::new(
            reader.clone(),
            responder.clone(),
            data_root,
        )),
        search_genes: Arc::new(SearchGenesUseCase::new(reader, responder.clone(), data_root)),
        list_databases: Arc::new(ListDatabasesUseCase::new(catalog, responder)),
        defaults: Arc::new(QueryDefaults::default()),
    };

    TestApp {
        router: create_api_routes(state),
        cache,
    }
}

pub async fn get(router: &Router, uri: &str) -> (u16, Option<String>, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// BCL6 with one transcript and two exons on chr3.
pub fn bcl6() -> GeneRecord {
    let mut transcript = GeneRecord::new(
        Level::Transcript,
        GenomicLocation::new("chr3", 187721377, 187745725).unwrap(),
        Strand::Minus,
    )
    .with_id("transcript_id", "ENST00000406870.7")
    .with_tag("basic");

    for (start, end) in [(187745471, 187745725), (187721377, 187722826)] {
        let exon = GeneRecord::new(
            Level::Exon,
            GenomicLocation::new("chr3", start, end).unwrap(),
            Strand::Minus,
        );
        transcript.add_child(exon).unwrap();
    }

    let mut gene = GeneRecord::new(
        Level::Gene,
        GenomicLocation::new("chr3", 187721377, 187745725).unwrap(),
        Strand::Minus,
    )
    .with_id("gene_id", "ENSG00000113916.17")
    .with_id("gene_name", "BCL6");
    gene.add_child(transcript).unwrap();
    gene
}
