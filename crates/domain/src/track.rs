use crate::DomainError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifies one annotation track: `<genome>/<assembly>/<track>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId {
    pub genome: Arc<str>,
    pub assembly: Arc<str>,
    pub track: Arc<str>,
}

impl TrackId {
    pub fn new(
        genome: impl Into<Arc<str>>,
        assembly: impl Into<Arc<str>>,
        track: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            genome: genome.into(),
            assembly: assembly.into(),
            track: track.into(),
        }
    }

    /// Builds an id from request values. Each selector must name a single
    /// directory entry below its parent, so the resolved path never leaves
    /// the data root.
    pub fn parse(genome: &str, assembly: &str, track: &str) -> Result<Self, DomainError> {
        Ok(Self::new(
            path_segment("genome", genome)?,
            path_segment("assembly", assembly)?,
            path_segment("track", track)?,
        ))
    }

    /// Directory holding this track under `data_root`.
    pub fn directory(&self, data_root: &Path) -> PathBuf {
        data_root
            .join(self.genome.as_ref())
            .join(self.assembly.as_ref())
            .join(self.track.as_ref())
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.genome, self.assembly, self.track)
    }
}

fn path_segment<'a>(field: &str, value: &'a str) -> Result<&'a str, DomainError> {
    let invalid = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '\\', '\0']);

    if invalid {
        return Err(DomainError::InvalidTrack(format!("{field} '{}'", value.escape_debug())));
    }
    Ok(value)
}

/// A track together with the directory the reader should open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSource {
    pub id: TrackId,
    pub dir: PathBuf,
}

impl TrackSource {
    pub fn resolve(id: TrackId, data_root: &Path) -> Self {
        let dir = id.directory(data_root);
        Self { id, dir }
    }
}

/// One entry of the `/databases` listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DatabaseDescriptor {
    pub genome: String,
    pub assembly: String,
    pub track: String,
}

impl DatabaseDescriptor {
    /// Builds a descriptor from on-disk directory names. The genome is
    /// capitalized for display (`human` → `Human`).
    pub fn from_dir_names(genome: &str, assembly: &str, track: &str) -> Self {
        Self {
            genome: capitalize(genome),
            assembly: assembly.to_string(),
            track: track.to_string(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
