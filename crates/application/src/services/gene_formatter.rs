use genes_domain::{GeneRecord, Level};
use serde::Serialize;
use std::collections::BTreeMap;

/// JSON shape of one hierarchy node.
///
/// Gene-level nodes carry `transcripts`, transcript-level nodes carry
/// `exons`, exons carry neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneJson {
    pub loc: String,
    pub strand: &'static str,
    #[serde(rename = "type")]
    pub level: &'static str,
    pub ids: BTreeMap<String, String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcripts: Option<Vec<GeneJson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exons: Option<Vec<GeneJson>>,
}

/// Body of a `/find` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGenesJson {
    pub loc: String,
    pub genes: Vec<GeneJson>,
}

pub fn gene_to_json(record: &GeneRecord) -> GeneJson {
    let mut json = GeneJson {
        loc: record.location.to_string(),
        strand: record.strand.as_str(),
        level: record.level.as_str(),
        ids: record.ids.clone(),
        tags: record.tags.clone(),
        transcripts: None,
        exons: None,
    };

    match record.level {
        Level::Gene => {
            json.transcripts = Some(genes_to_json(record.children_at(Level::Transcript)));
        }
        Level::Transcript => {
            json.exons = Some(genes_to_json(record.children_at(Level::Exon)));
        }
        Level::Exon => {}
    }

    json
}

/// Formats records in the order given.
pub fn genes_to_json(records: &[GeneRecord]) -> Vec<GeneJson> {
    records.iter().map(gene_to_json).collect()
}
