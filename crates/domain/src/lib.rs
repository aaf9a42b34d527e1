//! Genes Domain Layer
pub mod about;
pub mod config;
pub mod errors;
pub mod gene;
pub mod location;
pub mod params;
pub mod query;
pub mod track;

pub use about::AboutInfo;
pub use config::{CliOverrides, Config, ConfigError, QueryDefaults};
pub use errors::DomainError;
pub use gene::{GeneRecord, Level, Strand};
pub use location::GenomicLocation;
pub use params::{ParamResolver, ResolvedParams};
pub use query::{FindQuery, SearchQuery, DATABASES_CACHE_KEY};
pub use track::{DatabaseDescriptor, TrackId, TrackSource};
