mod find_genes;
mod search_genes;

pub use find_genes::FindGenesUseCase;
pub use search_genes::SearchGenesUseCase;
