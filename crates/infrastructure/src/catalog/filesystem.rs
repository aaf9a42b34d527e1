use async_trait::async_trait;
use genes_application::ports::DatabaseCatalog;
use genes_domain::{DatabaseDescriptor, DomainError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Lists tracks laid out as `<data root>/<genome>/<assembly>/<track>/`.
pub struct FsDatabaseCatalog {
    data_root: PathBuf,
}

impl FsDatabaseCatalog {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }
}

#[async_trait]
impl DatabaseCatalog for FsDatabaseCatalog {
    async fn list_databases(&self) -> Result<Vec<DatabaseDescriptor>, DomainError> {
        let root = self.data_root.clone();

        let mut databases = tokio::task::spawn_blocking(move || scan(&root))
            .await
            .map_err(|e| DomainError::IoError(format!("catalog scan task failed: {e}")))??;

        databases.sort();
        debug!(count = databases.len(), "Databases listed");
        Ok(databases)
    }
}

/// Walks exactly three directory levels. Files and hidden entries are skipped.
fn scan(root: &Path) -> Result<Vec<DatabaseDescriptor>, DomainError> {
    let genomes = match subdirectories(root) {
        Ok(dirs) => dirs,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(root = %root.display(), "Data root does not exist");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(DomainError::IoError(format!(
                "Failed to read data root {}: {e}",
                root.display()
            )))
        }
    };

    let mut databases = Vec::new();
    for (genome, genome_dir) in genomes {
        for (assembly, assembly_dir) in subdirectories(&genome_dir)? {
            for (track, _) in subdirectories(&assembly_dir)? {
                databases.push(DatabaseDescriptor::from_dir_names(&genome, &assembly, &track));
            }
        }
    }

    Ok(databases)
}

fn subdirectories(dir: &Path) -> std::io::Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // Follows symlinks, so linked tracks are listed like real ones.
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        dirs.push((name, path));
    }

    Ok(dirs)
}
