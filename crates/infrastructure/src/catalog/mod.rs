pub mod filesystem;

pub use filesystem::FsDatabaseCatalog;
