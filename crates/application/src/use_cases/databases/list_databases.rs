use genes_domain::{DomainError, DATABASES_CACHE_KEY};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::DatabaseCatalog;
use crate::services::CachedResponder;

pub struct ListDatabasesUseCase {
    catalog: Arc<dyn DatabaseCatalog>,
    responder: Arc<CachedResponder>,
}

impl ListDatabasesUseCase {
    pub fn new(catalog: Arc<dyn DatabaseCatalog>, responder: Arc<CachedResponder>) -> Self {
        Self { catalog, responder }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Arc<str>, DomainError> {
        let catalog = Arc::clone(&self.catalog);

        self.responder
            .get_or_compute(DATABASES_CACHE_KEY, || async move {
                let databases = catalog.list_databases().await?;
                debug!(count = databases.len(), "Databases enumerated");
                Ok(databases)
            })
            .await
    }
}
