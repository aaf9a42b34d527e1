use genes_application::services::{gene_to_json, genes_to_json};
use genes_domain::{GeneRecord, Level, Strand};

mod helpers;
use helpers::{bcl6, loc, tp53};

#[test]
fn test_gene_level_has_transcripts_key() {
    let json = serde_json::to_value(gene_to_json(&tp53())).unwrap();

    assert!(json.get("transcripts").is_some());
    assert!(json.get("exons").is_none());
    assert_eq!(json["transcripts"], serde_json::json!([]));
}

#[test]
fn test_transcript_level_has_exons_key() {
    let gene = bcl6();
    let json = serde_json::to_value(gene_to_json(&gene.children()[0])).unwrap();

    assert!(json.get("exons").is_some());
    assert!(json.get("transcripts").is_none());
}

#[test]
fn test_exon_level_has_no_children_key() {
    let exon = GeneRecord::new(Level::Exon, loc("chr1", 10, 20), Strand::Plus);
    let json = serde_json::to_value(gene_to_json(&exon)).unwrap();

    assert!(json.get("exons").is_none());
    assert!(json.get("transcripts").is_none());
}

#[test]
fn test_record_fields_are_shaped() {
    let json = serde_json::to_value(gene_to_json(&bcl6())).unwrap();

    assert_eq!(json["loc"], "chr3:187721377-187745725");
    assert_eq!(json["strand"], "-");
    assert_eq!(json["type"], "gene");
    assert_eq!(json["ids"]["gene_id"], "ENSG00000113916.17");
    assert_eq!(json["tags"], serde_json::json!(["protein_coding"]));
    assert_eq!(json["transcripts"][0]["type"], "transcript");
    assert_eq!(json["transcripts"][0]["exons"][0]["type"], "exon");
}

#[test]
fn test_child_order_is_preserved() {
    let json = gene_to_json(&bcl6());

    let transcripts = json.transcripts.unwrap();
    assert_eq!(transcripts[0].ids["transcript_id"], "ENST00000406870.7");
    assert_eq!(transcripts[1].ids["transcript_id"], "ENST00000621993.1");

    let exons = transcripts[0].exons.as_ref().unwrap();
    assert_eq!(exons[0].ids["exon_number"], "1");
    assert_eq!(exons[1].ids["exon_number"], "2");
}

#[test]
fn test_formatting_leaves_input_untouched() {
    let genes = vec![bcl6(), tp53()];
    let before = genes.clone();

    let json = genes_to_json(&genes);

    assert_eq!(genes, before);
    assert_eq!(json.len(), 2);
    assert_eq!(json[1].ids["gene_name"], "TP53");
}
