pub mod about;
pub mod databases;
pub mod genes;

// Re-export use cases
pub use about::GetAboutUseCase;
pub use databases::ListDatabasesUseCase;
pub use genes::{FindGenesUseCase, SearchGenesUseCase};
