use genes_domain::{GeneRecord, GenomicLocation};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::ops::Range;

struct ChromosomeBin {
    range: Range<usize>,
    /// Longest gene on the chromosome, bounds how far back an overlap can start.
    max_len: u64,
}

/// In-memory index over one track's genes.
///
/// Genes are stored sorted by `(chr, start, end)`. Overlap queries binary
/// search the chromosome's slice; name queries go through a lower-cased
/// lookup table that also holds the unversioned form of each identifier.
pub struct TrackIndex {
    genes: Vec<GeneRecord>,
    bins: FxHashMap<String, ChromosomeBin>,
    names: FxHashMap<String, SmallVec<[usize; 2]>>,
}

impl TrackIndex {
    pub fn new(mut genes: Vec<GeneRecord>) -> Self {
        genes.sort_by(|a, b| {
            (a.location.chr(), a.location.start(), a.location.end()).cmp(&(
                b.location.chr(),
                b.location.start(),
                b.location.end(),
            ))
        });

        let mut bins: FxHashMap<String, ChromosomeBin> = FxHashMap::default();
        for (i, gene) in genes.iter().enumerate() {
            let bin = bins
                .entry(gene.location.chr().to_string())
                .or_insert(ChromosomeBin {
                    range: i..i,
                    max_len: 0,
                });
            bin.range.end = i + 1;
            bin.max_len = bin.max_len.max(gene.location.length());
        }

        let mut names: FxHashMap<String, SmallVec<[usize; 2]>> = FxHashMap::default();
        for (i, gene) in genes.iter().enumerate() {
            for value in gene.ids.values() {
                let key = value.to_ascii_lowercase();
                if let Some((base, _)) = key.split_once('.') {
                    push_unique(names.entry(base.to_string()).or_default(), i);
                }
                push_unique(names.entry(key).or_default(), i);
            }
        }

        Self { genes, bins, names }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Genes overlapping `location`, ordered by start.
    pub fn find(&self, location: &GenomicLocation) -> Vec<GeneRecord> {
        let Some(bin) = self.bins.get(location.chr()) else {
            return Vec::new();
        };

        let slice = &self.genes[bin.range.clone()];
        let earliest = location.start().saturating_sub(bin.max_len);
        let from = slice.partition_point(|g| g.location.start() < earliest);
        let to = slice.partition_point(|g| g.location.start() <= location.end());

        slice[from..to.max(from)]
            .iter()
            .filter(|g| g.location.overlaps(location))
            .cloned()
            .collect()
    }

    /// Genes whose identifiers match `term`, in index order.
    pub fn search(&self, term: &str) -> Vec<GeneRecord> {
        let key = term.trim().to_ascii_lowercase();
        let Some(hits) = self.names.get(&key) else {
            return Vec::new();
        };

        hits.iter()
            .map(|&i| &self.genes[i])
            .filter(|g| g.matches_id(term.trim()))
            .cloned()
            .collect()
    }
}

fn push_unique(slot: &mut SmallVec<[usize; 2]>, i: usize) {
    if slot.last() != Some(&i) {
        slot.push(i);
    }
}
