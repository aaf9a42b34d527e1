use crate::config::QueryDefaults;
use crate::{DomainError, GenomicLocation, ParamResolver, ResolvedParams, TrackId};
use std::collections::HashMap;

/// Cache key of the `/databases` listing.
pub const DATABASES_CACHE_KEY: &str = "databases";

/// Lookup of genes overlapping a genomic location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    pub track: TrackId,
    pub location: GenomicLocation,
}

impl FindQuery {
    pub fn resolver(defaults: &QueryDefaults) -> ParamResolver {
        track_resolver(defaults)
            .add("loc", "")
            .add("chr", &defaults.chr)
            .add("s", defaults.start)
            .add("e", defaults.end)
    }

    /// Resolves raw request parameters. An explicit `loc` wins over
    /// `chr`/`s`/`e`.
    pub fn from_params(
        raw: &HashMap<String, String>,
        defaults: &QueryDefaults,
    ) -> Result<Self, DomainError> {
        let params = Self::resolver(defaults).resolve(raw);
        let track = resolve_track(&params)?;

        let location = match params.get("loc") {
            "" => GenomicLocation::from_parts(params.get("chr"), params.get("s"), params.get("e"))?,
            loc => loc.parse()?,
        };

        Ok(Self { track, location })
    }

    /// `find/<genome>/<assembly>/<track>/<chr>/<start>/<end>`. Selectors
    /// never contain `/`, and the chromosome is followed only by numeric
    /// fields, so distinct queries never share a key.
    pub fn cache_key(&self) -> String {
        format!(
            "find/{}/{}/{}/{}",
            self.track,
            self.location.chr(),
            self.location.start(),
            self.location.end()
        )
    }
}

/// Lookup of genes by identifier or symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub track: TrackId,
    pub term: String,
}

impl SearchQuery {
    pub fn resolver(defaults: &QueryDefaults) -> ParamResolver {
        track_resolver(defaults).add("s", &defaults.search)
    }

    pub fn from_params(
        raw: &HashMap<String, String>,
        defaults: &QueryDefaults,
    ) -> Result<Self, DomainError> {
        let params = Self::resolver(defaults).resolve(raw);

        Ok(Self {
            track: resolve_track(&params)?,
            term: params.get("s").to_string(),
        })
    }

    /// `search/<genome>/<assembly>/<track>/<term>`. The term comes last, so
    /// it may contain any character.
    pub fn cache_key(&self) -> String {
        format!("search/{}/{}", self.track, self.term)
    }
}

fn track_resolver(defaults: &QueryDefaults) -> ParamResolver {
    ParamResolver::new()
        .add("genome", &defaults.genome)
        .add("assembly", &defaults.assembly)
        .add("track", &defaults.track)
}

/// Lower-cases the track selectors. Any assembly containing `mm` (mm9,
/// mm10, ...) forces the genome to `mouse`, whatever genome was supplied.
///
/// # Errors
///
/// * `DomainError::InvalidTrack` - If a selector is not a single path segment
pub fn resolve_track(params: &ResolvedParams) -> Result<TrackId, DomainError> {
    let assembly = params.get("assembly").to_lowercase();
    let track = params.get("track").to_lowercase();

    let genome = if assembly.contains("mm") {
        "mouse".to_string()
    } else {
        params.get("genome").to_lowercase()
    };

    TrackId::parse(&genome, &assembly, &track)
}
