use genes_domain::{GeneRecord, GenomicLocation, Level, Strand};

pub fn loc(chr: &str, start: u64, end: u64) -> GenomicLocation {
    GenomicLocation::new(chr, start, end).unwrap()
}

/// BCL6 on chr3 with two transcripts: two exons, then one.
pub fn bcl6() -> GeneRecord {
    let mut gene = GeneRecord::new(Level::Gene, loc("chr3", 187721377, 187745725), Strand::Minus)
        .with_id("gene_id", "ENSG00000113916.17")
        .with_id("gene_name", "BCL6")
        .with_tag("protein_coding");

    let mut first = GeneRecord::new(
        Level::Transcript,
        loc("chr3", 187721377, 187745725),
        Strand::Minus,
    )
    .with_id("transcript_id", "ENST00000406870.7")
    .with_tag("basic");
    first
        .add_child(
            GeneRecord::new(Level::Exon, loc("chr3", 187745468, 187745725), Strand::Minus)
                .with_id("exon_number", "1"),
        )
        .unwrap();
    first
        .add_child(
            GeneRecord::new(Level::Exon, loc("chr3", 187721377, 187722000), Strand::Minus)
                .with_id("exon_number", "2"),
        )
        .unwrap();

    let mut second = GeneRecord::new(
        Level::Transcript,
        loc("chr3", 187730000, 187740000),
        Strand::Minus,
    )
    .with_id("transcript_id", "ENST00000621993.1");
    second
        .add_child(
            GeneRecord::new(Level::Exon, loc("chr3", 187730000, 187740000), Strand::Minus)
                .with_id("exon_number", "1"),
        )
        .unwrap();

    gene.add_child(first).unwrap();
    gene.add_child(second).unwrap();
    gene
}

pub fn tp53() -> GeneRecord {
    GeneRecord::new(Level::Gene, loc("chr17", 7661779, 7687538), Strand::Minus)
        .with_id("gene_id", "ENSG00000141510.18")
        .with_id("gene_name", "TP53")
}
