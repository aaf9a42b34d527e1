use crate::GenomicLocation;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Plus,
    Minus,
    Unknown,
}

impl FromStr for Strand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "+" => Self::Plus,
            "-" => Self::Minus,
            _ => Self::Unknown,
        })
    }
}

impl Strand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Unknown => ".",
        }
    }
}

impl Serialize for Strand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Position of a record in the gene → transcript → exon hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Gene,
    Transcript,
    Exon,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gene => "gene",
            Self::Transcript => "transcript",
            Self::Exon => "exon",
        }
    }

    /// The level directly below this one, if any.
    pub fn child_level(&self) -> Option<Level> {
        match self {
            Self::Gene => Some(Self::Transcript),
            Self::Transcript => Some(Self::Exon),
            Self::Exon => None,
        }
    }
}

/// One node of the annotation hierarchy.
///
/// A record only ever owns children exactly one level below its own, which
/// [`GeneRecord::add_child`] enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneRecord {
    pub location: GenomicLocation,
    pub strand: Strand,
    pub level: Level,
    pub ids: BTreeMap<String, String>,
    pub tags: Vec<String>,
    children: Vec<GeneRecord>,
}

impl GeneRecord {
    pub fn new(level: Level, location: GenomicLocation, strand: Strand) -> Self {
        Self {
            location,
            strand,
            level,
            ids: BTreeMap::new(),
            tags: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.ids.insert(key.into(), value.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tag(tag);
        self
    }

    /// Adds a tag unless already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn id(&self, key: &str) -> Option<&str> {
        self.ids.get(key).map(String::as_str)
    }

    /// Appends a child, handing it back when it is not one level below.
    pub fn add_child(&mut self, child: GeneRecord) -> Result<(), GeneRecord> {
        if self.level.child_level() != Some(child.level) {
            return Err(child);
        }
        self.children.push(child);
        Ok(())
    }

    pub fn children(&self) -> &[GeneRecord] {
        &self.children
    }

    /// Children at `level`, empty unless `level` is directly below this record.
    pub fn children_at(&self, level: Level) -> &[GeneRecord] {
        if self.level.child_level() == Some(level) {
            &self.children
        } else {
            &[]
        }
    }

    /// Case-insensitive match of `term` against any identifier value.
    ///
    /// Versioned identifiers (`ENSG00000113916.17`) also match their
    /// unversioned form.
    pub fn matches_id(&self, term: &str) -> bool {
        self.ids.values().any(|value| {
            value.eq_ignore_ascii_case(term)
                || value
                    .split_once('.')
                    .is_some_and(|(base, _)| base.eq_ignore_ascii_case(term))
        })
    }
}
