use super::builder::TrackBuilder;
use super::gtf::GtfReader;
use super::index::TrackIndex;
use async_trait::async_trait;
use dashmap::DashMap;
use genes_application::ports::GeneTrackReader;
use genes_domain::{DomainError, GeneRecord, GenomicLocation, TrackSource};
use rustc_hash::FxBuildHasher;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// [`GeneTrackReader`] backed by one GTF file per track directory.
///
/// A track is parsed and indexed on first use and kept for the life of the
/// process. Two requests racing on a cold track may both parse it; the first
/// index stored wins.
pub struct GtfTrackReader {
    annotation_file: PathBuf,
    tracks: DashMap<PathBuf, Arc<TrackIndex>, FxBuildHasher>,
}

impl GtfTrackReader {
    pub fn new(annotation_file: impl Into<PathBuf>) -> Self {
        Self {
            annotation_file: annotation_file.into(),
            tracks: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Number of tracks currently indexed.
    pub fn loaded_tracks(&self) -> usize {
        self.tracks.len()
    }

    async fn index_for(&self, source: &TrackSource) -> Result<Arc<TrackIndex>, DomainError> {
        if let Some(index) = self.tracks.get(&source.dir) {
            return Ok(Arc::clone(index.value()));
        }

        let path = source.dir.join(&self.annotation_file);
        let track = source.id.to_string();

        let index = tokio::task::spawn_blocking(move || load_track(&path, &track))
            .await
            .map_err(|e| DomainError::IoError(format!("track loader task failed: {e}")))??;

        let stored = self
            .tracks
            .entry(source.dir.clone())
            .or_insert_with(|| Arc::new(index));

        Ok(Arc::clone(stored.value()))
    }
}

#[async_trait]
impl GeneTrackReader for GtfTrackReader {
    #[instrument(skip(self, source), fields(track = %source.id))]
    async fn find_genes(
        &self,
        source: &TrackSource,
        location: &GenomicLocation,
    ) -> Result<Vec<GeneRecord>, DomainError> {
        let index = self.index_for(source).await?;
        Ok(index.find(location))
    }

    #[instrument(skip(self, source), fields(track = %source.id))]
    async fn get_genes(
        &self,
        source: &TrackSource,
        term: &str,
    ) -> Result<Vec<GeneRecord>, DomainError> {
        let index = self.index_for(source).await?;
        Ok(index.search(term))
    }
}

fn load_track(path: &Path, track: &str) -> Result<TrackIndex, DomainError> {
    let started = Instant::now();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::TrackNotFound(track.to_string()),
        _ => DomainError::IoError(format!("{}: {e}", path.display())),
    })?;

    let mut builder = TrackBuilder::new();
    for item in GtfReader::new(BufReader::new(file)).records() {
        let (line_no, record) = item?;
        builder.push(&record, line_no)?;
    }

    let index = TrackIndex::new(builder.finish());

    info!(
        track = track,
        genes = index.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Track indexed"
    );
    debug!(path = %path.display(), "Track source file");

    Ok(index)
}
