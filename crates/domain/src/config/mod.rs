//! Configuration module for the genes service
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, file loading and CLI overrides
//! - `server`: HTTP binding and CORS
//! - `data`: Track directory layout on disk
//! - `cache`: Response cache lifetime and bounds
//! - `defaults`: Fallback query parameters
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod data;
pub mod defaults;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use data::DataConfig;
pub use defaults::QueryDefaults;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
pub use server::ServerConfig;
