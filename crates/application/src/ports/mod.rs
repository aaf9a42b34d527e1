mod database_catalog;
mod gene_track_reader;
mod response_cache;

pub use database_catalog::DatabaseCatalog;
pub use gene_track_reader::GeneTrackReader;
pub use response_cache::ResponseCache;
