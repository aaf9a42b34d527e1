use genes_domain::{DomainError, SearchQuery, TrackSource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::GeneTrackReader;
use crate::services::{genes_to_json, CachedResponder};

/// Use case for looking up genes by symbol or accession.
pub struct SearchGenesUseCase {
    reader: Arc<dyn GeneTrackReader>,
    responder: Arc<CachedResponder>,
    data_root: PathBuf,
}

impl SearchGenesUseCase {
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

    /// Returns the serialized JSON array of matching genes.
    #[instrument(skip(self), fields(track = %query.track, term = %query.term))]
    pub async fn execute(&self, query: &SearchQuery) -> Result<Arc<str>, DomainError> {
        let key = query.cache_key();
        let source = TrackSource::resolve(query.track.clone(), &self.data_root);
        let reader = Arc::clone(&self.reader);

        self.responder
            .get_or_compute(&key, || async move {
                let genes = reader.get_genes(&source, &query.term).await?;
                debug!(count = genes.len(), "Genes found by name");
                Ok(genes_to_json(&genes))
            })
            .await
    }
}
