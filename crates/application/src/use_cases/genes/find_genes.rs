use genes_domain::{DomainError, FindQuery, TrackSource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::GeneTrackReader;
use crate::services::{genes_to_json, CachedResponder, LocationGenesJson};

/// Use case for looking up genes overlapping a genomic location.
///
/// Responses are cached per normalized query; a hit never touches the
/// track reader.
pub struct FindGenesUseCase {
    reader: Arc<dyn GeneTrackReader>,
    responder: Arc<CachedResponder>,
    data_root: PathBuf,
}

impl FindGenesUseCase {
    pub fn new(
        reader: Arc<dyn GeneTrackReader>,
        responder: Arc<CachedResponder>,
        data_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            reader,
            responder,
            data_root: data_root.into(),
        }
    }

    /// Returns the serialized `{loc, genes}` body for `query`.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<str>)` - JSON body, possibly served from cache
    /// * `Err(DomainError)` - If the track cannot be read
    #[instrument(skip(self), fields(track = %query.track, loc = %query.location))]
    pub async fn execute(&self, query: &FindQuery) -> Result<Arc<str>, DomainError> {
        let key = query.cache_key();
        let source = TrackSource::resolve(query.track.clone(), &self.data_root);
        let reader = Arc::clone(&self.reader);

        self.responder
            .get_or_compute(&key, || async move {
                let genes = reader.find_genes(&source, &query.location).await?;
                debug!(count = genes.len(), "Genes found by location");

                Ok(LocationGenesJson {
                    loc: query.location.to_string(),
                    genes: genes_to_json(&genes),
                })
            })
            .await
    }
}
