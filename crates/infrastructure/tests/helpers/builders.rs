#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal two-gene annotation on chr3 and chr17.
pub const SAMPLE_GTF: &str = "\
#!genome-build GRCh38
chr3\tHAVANA\tgene\t187721377\t187745725\t.\t-\t.\tgene_id \"ENSG00000113916.17\"; gene_type \"protein_coding\"; gene_name \"BCL6\"; level 2; tag \"overlapping_locus\";
chr3\tHAVANA\ttranscript\t187721377\t187745725\t.\t-\t.\tgene_id \"ENSG00000113916.17\"; transcript_id \"ENST00000406870.7\"; gene_name \"BCL6\"; transcript_name \"BCL6-201\"; tag \"basic\"; tag \"CCDS\";
chr3\tHAVANA\texon\t187745471\t187745725\t.\t-\t.\tgene_id \"ENSG00000113916.17\"; transcript_id \"ENST00000406870.7\"; exon_number 1; exon_id \"ENSE00001543211.1\";
chr3\tHAVANA\texon\t187721377\t187722826\t.\t-\t.\tgene_id \"ENSG00000113916.17\"; transcript_id \"ENST00000406870.7\"; exon_number 2; exon_id \"ENSE00003497406.1\";
chr3\tHAVANA\tCDS\t187722000\t187722826\t.\t-\t0\tgene_id \"ENSG00000113916.17\"; transcript_id \"ENST00000406870.7\";

chr17\tHAVANA\tgene\t7661779\t7687538\t.\t-\t.\tgene_id \"ENSG00000141510.18\"; gene_name \"TP53\";
chr17\tHAVANA\ttranscript\t7661779\t7687538\t.\t-\t.\tgene_id \"ENSG00000141510.18\"; transcript_id \"ENST00000269305.9\"; gene_name \"TP53\";
";

/// Builds a `<genome>/<assembly>/<track>` data tree in a temp directory.
pub struct DataTreeBuilder {
    root: TempDir,
}

impl DataTreeBuilder {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    pub fn track(self, genome: &str, assembly: &str, track: &str, gtf: &str) -> Self {
        let dir = self.root.path().join(genome).join(assembly).join(track);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("genes.gtf"), gtf).unwrap();
        self
    }

    pub fn empty_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.root.path().join(relative)).unwrap();
        self
    }

    pub fn file(self, relative: &str, contents: &str) -> Self {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    pub fn build(self) -> TempDir {
        self.root
    }
}

pub fn track_dir(root: &Path, genome: &str, assembly: &str, track: &str) -> PathBuf {
    root.join(genome).join(assembly).join(track)
}
