mod cached_responder;
mod gene_formatter;

pub use cached_responder::CachedResponder;
pub use gene_formatter::{gene_to_json, genes_to_json, GeneJson, LocationGenesJson};
