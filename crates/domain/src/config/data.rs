use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the annotation tracks on disk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Root directory laid out as `<genome>/<assembly>/<track>/` (default: "./data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Annotation file read from each track directory (default: "genes.gtf")
    #[serde(default = "default_annotation_file")]
    pub annotation_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            annotation_file: default_annotation_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_annotation_file() -> String {
    "genes.gtf".to_string()
}
