use async_trait::async_trait;
use genes_domain::{DomainError, GeneRecord, GenomicLocation, TrackSource};

/// Read access to one annotation track on disk.
///
/// This is the boundary to the track-file format. Implementations own
/// parsing and indexing; callers only see fully built gene hierarchies.
#[async_trait]
pub trait GeneTrackReader: Send + Sync {
    /// Genes overlapping `location`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<GeneRecord>)` - Gene-level records ordered by start, each owning
    ///   its transcripts and their exons
    /// * `Err(DomainError)` - If the track cannot be opened or parsed
    ///
    /// # Errors
    ///
    /// * `DomainError::TrackNotFound` - If the track directory or annotation file is missing
    /// * `DomainError::TrackParse` - If the annotation file is malformed
    async fn find_genes(
        &self,
        source: &TrackSource,
        location: &GenomicLocation,
    ) -> Result<Vec<GeneRecord>, DomainError>;

    /// Genes whose identifiers (symbol, accession) match `term`.
    ///
    /// # Errors
    ///
    /// Same as [`GeneTrackReader::find_genes`].
    async fn get_genes(&self, source: &TrackSource, term: &str)
        -> Result<Vec<GeneRecord>, DomainError>;
}
