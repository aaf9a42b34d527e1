use super::gtf::GtfRecord;
use genes_domain::{DomainError, GeneRecord, GenomicLocation, Level};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use tracing::debug;

const LEVEL_PREFIXES: [&str; 3] = ["gene_", "transcript_", "exon_"];

/// Attributes that are never identifiers.
const RESERVED_KEYS: [&str; 2] = ["tag", "level"];

struct StagedTranscript {
    gene_id: String,
    /// `gene_*` attributes carried on the transcript line, used when the
    /// gene line itself is missing.
    gene_ids: BTreeMap<String, String>,
    record: GeneRecord,
}

struct StagedExon {
    transcript_id: String,
    record: GeneRecord,
}

/// Assembles the gene → transcript → exon hierarchy from GTF lines.
///
/// Lines may arrive in any order; linking happens in [`TrackBuilder::finish`].
#[derive(Default)]
pub struct TrackBuilder {
    genes: Vec<GeneRecord>,
    gene_index: FxHashMap<String, usize>,
    transcripts: Vec<StagedTranscript>,
    exons: Vec<StagedExon>,
}

impl TrackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &GtfRecord, line_no: usize) -> Result<(), DomainError> {
        let level = match record.feature.as_str() {
            "gene" => Level::Gene,
            "transcript" => Level::Transcript,
            "exon" => Level::Exon,
            _ => return Ok(()),
        };

        let location = GenomicLocation::new(&record.seqname, record.start, record.end)
            .map_err(|e| DomainError::TrackParse(format!("line {line_no}: {e}")))?;

        let mut gene = GeneRecord::new(level, location, record.strand);
        gene.ids = ids_for_level(record, level);
        for tag in record.attrs("tag") {
            gene.add_tag(tag);
        }

        match level {
            Level::Gene => {
                let gene_id = required(record, "gene_id", line_no)?;
                self.gene_index.insert(gene_id.to_string(), self.genes.len());
                self.genes.push(gene);
            }
            Level::Transcript => {
                let gene_id = required(record, "gene_id", line_no)?;
                required(record, "transcript_id", line_no)?;
                self.transcripts.push(StagedTranscript {
                    gene_id: gene_id.to_string(),
                    gene_ids: ids_for_level(record, Level::Gene),
                    record: gene,
                });
            }
            Level::Exon => {
                let transcript_id = required(record, "transcript_id", line_no)?;
                self.exons.push(StagedExon {
                    transcript_id: transcript_id.to_string(),
                    record: gene,
                });
            }
        }

        Ok(())
    }

    /// Links staged records and returns the genes in file order.
    ///
    /// Genes synthesized for orphan transcripts follow the declared ones.
    pub fn finish(self) -> Vec<GeneRecord> {
        let TrackBuilder {
            mut genes,
            mut gene_index,
            mut transcripts,
            exons,
        } = self;

        let transcript_index: FxHashMap<String, usize> = transcripts
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.record.id("transcript_id").map(|id| (id.to_string(), i)))
            .collect();

        let mut orphan_exons = 0usize;
        for exon in exons {
            match transcript_index.get(&exon.transcript_id) {
                Some(&i) => {
                    let attached = transcripts[i].record.add_child(exon.record);
                    debug_assert!(attached.is_ok(), "exon under transcript: {attached:?}");
                }
                None => orphan_exons += 1,
            }
        }

        if orphan_exons > 0 {
            debug!(dropped = orphan_exons, "Dropped exons without a transcript");
        }

        let mut synthesized: FxHashSet<usize> = FxHashSet::default();
        for transcript in transcripts {
            let idx = match gene_index.get(&transcript.gene_id) {
                Some(&idx) => idx,
                None => {
                    let mut gene = GeneRecord::new(
                        Level::Gene,
                        transcript.record.location.clone(),
                        transcript.record.strand,
                    );
                    gene.ids = transcript.gene_ids;
                    gene.ids
                        .entry("gene_id".to_string())
                        .or_insert_with(|| transcript.gene_id.clone());

                    debug!(gene_id = %transcript.gene_id, "Synthesized gene for orphan transcript");
                    let idx = genes.len();
                    gene_index.insert(transcript.gene_id, idx);
                    synthesized.insert(idx);
                    genes.push(gene);
                    idx
                }
            };

            let gene = &mut genes[idx];
            // Declared genes keep their own extent.
            if synthesized.contains(&idx) {
                if let Some(span) = gene.location.span(&transcript.record.location) {
                    gene.location = span;
                }
            }
            let attached = gene.add_child(transcript.record);
            debug_assert!(attached.is_ok(), "transcript under gene: {attached:?}");
        }

        genes
    }
}

fn required<'a>(record: &'a GtfRecord, key: &str, line_no: usize) -> Result<&'a str, DomainError> {
    record
        .attr(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::TrackParse(format!("line {line_no}: missing {key}")))
}

/// Identifiers for `level`: attributes carrying the level's prefix plus
/// unprefixed attributes other than the reserved ones.
fn ids_for_level(record: &GtfRecord, level: Level) -> BTreeMap<String, String> {
    let prefix = match level {
        Level::Gene => "gene_",
        Level::Transcript => "transcript_",
        Level::Exon => "exon_",
    };

    record
        .attributes
        .iter()
        .filter(|(key, _)| {
            if key.starts_with(prefix) {
                return true;
            }
            !LEVEL_PREFIXES.iter().any(|p| key.starts_with(p))
                && !RESERVED_KEYS.contains(&key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
