use async_trait::async_trait;
use genes_domain::{DatabaseDescriptor, DomainError};

/// Enumerates the tracks available under the data root.
#[async_trait]
pub trait DatabaseCatalog: Send + Sync {
    async fn list_databases(&self) -> Result<Vec<DatabaseDescriptor>, DomainError>;
}
