use serde::{Deserialize, Serialize};

/// Values substituted for query parameters the client leaves out.
///
/// The built-in location and search term both point at BCL6 on GRCh38.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryDefaults {
    #[serde(default = "default_genome")]
    pub genome: String,

    #[serde(default = "default_assembly")]
    pub assembly: String,

    #[serde(default = "default_track")]
    pub track: String,

    #[serde(default = "default_chr")]
    pub chr: String,

    #[serde(default = "default_start")]
    pub start: u64,

    #[serde(default = "default_end")]
    pub end: u64,

    #[serde(default = "default_search")]
    pub search: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            genome: default_genome(),
            assembly: default_assembly(),
            track: default_track(),
            chr: default_chr(),
            start: default_start(),
            end: default_end(),
            search: default_search(),
        }
    }
}

fn default_genome() -> String {
    "Human".to_string()
}

fn default_assembly() -> String {
    "grch38".to_string()
}

fn default_track() -> String {
    "gencode".to_string()
}

fn default_chr() -> String {
    "chr3".to_string()
}

fn default_start() -> u64 {
    187_721_377
}

fn default_end() -> u64 {
    187_736_497
}

fn default_search() -> String {
    "BCL6".to_string()
}
