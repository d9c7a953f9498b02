use serde::{Deserialize, Serialize};

/// Identifier wrapper for roster candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Identifier wrapper for affiliation (school) records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AffiliationId(pub String);

impl AffiliationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// A single social channel a candidate publishes on.
///
/// Platform names are unique within one candidate's channel list but not globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub platform: String,
    pub followers: u64,
}

/// Coordinates used by presentation layers (globe rendering); opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A matchable influencer profile as seeded into the roster.
///
/// `fit_score` is a precomputed 0-100 compatibility rating. The engine treats it
/// as an opaque input and never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub display_name: String,
    pub affiliation_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation_id: Option<AffiliationId>,
    pub channels: Vec<Channel>,
    pub interests: Vec<String>,
    pub fit_score: u8,
    pub geo: GeoPoint,
}

/// A school record candidates may be linked to through `affiliation_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliation {
    pub id: AffiliationId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub lat: f64,
    pub lng: f64,
}

/// A brand deal offered on the student dashboard.
///
/// `payout` is free text as entered by the brand ("$250 per post", "Up to $1,200").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub notes: String,
    pub payout: String,
    pub fit_score: u8,
}
