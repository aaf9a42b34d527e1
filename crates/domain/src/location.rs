use crate::DomainError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A closed interval on one chromosome, 1-based and inclusive.
///
/// Construction always yields `start <= end`; reversed coordinates are
/// swapped rather than rejected. Chromosome names are normalized so that
/// `3`, `chr3` and `CHR3` all refer to the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenomicLocation {
    chr: Arc<str>,
    start: u64,
    end: u64,
}

impl GenomicLocation {
    pub fn new(chr: &str, start: u64, end: u64) -> Result<Self, DomainError> {
        let chr = normalize_chromosome(chr)?;
        let (start, end) = if start > end { (end, start) } else { (start, end) };

        if start == 0 {
            return Err(DomainError::InvalidLocation(format!(
                "{chr}:{start}-{end} (coordinates are 1-based)"
            )));
        }

        Ok(Self {
            chr: Arc::from(chr),
            start,
            end,
        })
    }

    /// Builds a location from separate chromosome/start/end request values.
    pub fn from_parts(chr: &str, start: &str, end: &str) -> Result<Self, DomainError> {
        let start = parse_coordinate(start)?;
        let end = parse_coordinate(end)?;
        Self::new(chr, start, end)
    }

    pub fn chr(&self) -> &str {
        &self.chr
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn overlaps(&self, other: &GenomicLocation) -> bool {
        self.chr == other.chr && self.start <= other.end && other.start <= self.end
    }

    /// Smallest location covering both, or `None` across chromosomes.
    pub fn span(&self, other: &GenomicLocation) -> Option<GenomicLocation> {
        if self.chr != other.chr {
            return None;
        }

        Some(Self {
            chr: Arc::clone(&self.chr),
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }
}

impl fmt::Display for GenomicLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chr, self.start, self.end)
    }
}

impl FromStr for GenomicLocation {
    type Err = DomainError;

    /// Parses `chr3:187721377-187736497` or a single position `chr3:187721377`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chr, range) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| DomainError::InvalidLocation(s.to_string()))?;

        match range.split_once('-') {
            Some((start, end)) => Self::from_parts(chr, start, end),
            None => Self::from_parts(chr, range, range),
        }
    }
}

impl Serialize for GenomicLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Normalizes a chromosome name to the `chr<name>` form.
pub fn normalize_chromosome(raw: &str) -> Result<String, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.contains(|c: char| c.is_whitespace() || c == ':') {
        return Err(DomainError::InvalidLocation(format!(
            "invalid chromosome '{raw}'"
        )));
    }

    let name = match raw.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &raw[3..],
        _ => raw,
    };

    if name.is_empty() {
        return Err(DomainError::InvalidLocation(format!(
            "invalid chromosome '{raw}'"
        )));
    }

    match name {
        "x" | "y" | "m" => Ok(format!("chr{}", name.to_ascii_uppercase())),
        _ => Ok(format!("chr{name}")),
    }
}

fn parse_coordinate(raw: &str) -> Result<u64, DomainError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse()
        .map_err(|_| DomainError::InvalidLocation(format!("invalid coordinate '{raw}'")))
}
