use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::config::RosterConfig;

use super::domain::{Affiliation, AffiliationId, Candidate, CandidateId};
use super::fixtures;

/// Immutable influencer roster, populated once at startup and never mutated.
///
/// Declaration order is meaningful: it is the tie-break order for every sort
/// the query engine performs.
#[derive(Debug)]
pub struct CandidateRoster {
    candidates: Vec<Candidate>,
}

impl CandidateRoster {
    /// Roster backed by the compiled-in fixture.
    pub fn seeded() -> Self {
        Self::new(fixtures::seed_candidates())
    }

    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Lookup by id; an unknown id is a silent miss, never an error.
    pub fn get(&self, id: &CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| &candidate.id == id)
    }

    /// Lookup many ids, preserving the caller's id order and silently
    /// dropping ids with no match. Callers rely on this to rebuild a
    /// previously selected set in their own stable order.
    pub fn get_all(&self, ids: &[CandidateId]) -> Vec<&Candidate> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }

    /// Every candidate in fixture-declaration order.
    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Wire shape of one record in an external affiliation document.
#[derive(Debug, Deserialize)]
struct AffiliationRecord {
    id: String,
    name: String,
    city: String,
    state: String,
    lat: f64,
    lng: f64,
}

/// School directory backing the exact-match affiliation filter.
#[derive(Debug)]
pub struct AffiliationDirectory {
    affiliations: Vec<Affiliation>,
}

impl AffiliationDirectory {
    /// Directory backed by the compiled-in fixture.
    pub fn seeded() -> Self {
        Self {
            affiliations: fixtures::seed_affiliations(),
        }
    }

    /// Load per configuration: an external JSON document when a path is set,
    /// the compiled-in fixture otherwise. A configured-but-broken document is
    /// a startup error rather than a silent fallback.
    pub fn load(config: &RosterConfig) -> Result<Self, RosterError> {
        match &config.affiliations_path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::seeded()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RosterError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::from_reader(BufReader::new(file))?;
        info!(
            affiliations = directory.affiliations.len(),
            path = %path.display(),
            "loaded affiliation directory"
        );
        Ok(directory)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, RosterError> {
        let records: Vec<AffiliationRecord> = serde_json::from_reader(reader)?;
        let affiliations = records
            .into_iter()
            .map(|record| Affiliation {
                id: AffiliationId::new(record.id),
                name: record.name,
                city: record.city,
                state: record.state,
                lat: record.lat,
                lng: record.lng,
            })
            .collect();
        Ok(Self { affiliations })
    }

    pub fn get(&self, id: &AffiliationId) -> Option<&Affiliation> {
        self.affiliations
            .iter()
            .find(|affiliation| &affiliation.id == id)
    }

    pub fn all(&self) -> &[Affiliation] {
        &self.affiliations
    }
}

/// Errors raised while sourcing the affiliation directory at startup.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("unable to read affiliation document at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed affiliation document: {0}")]
    Parse(#[from] serde_json::Error),
}
