mod list_databases;

pub use list_databases::ListDatabasesUseCase;
