pub mod about;
pub mod databases;
pub mod genes;
pub mod health;

pub use about::get_about;
pub use databases::list_databases;
pub use genes::{find_genes, search_genes};
pub use health::health_check;
