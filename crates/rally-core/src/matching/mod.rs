//! Candidate roster, query engine, and the helpers that rank results.
//!
//! Everything in this module is synchronous and error-free by design: filter
//! fields that are absent deactivate their predicate, unknown ids are silent
//! misses, and an empty result set is a valid outcome the caller renders as an
//! explicit empty state.

pub mod deals;
pub mod domain;
pub mod fixtures;
pub mod query;
pub mod roster;
pub mod selection;
pub mod stats;

#[cfg(test)]
mod tests;

pub use deals::{parse_payout_amount, search_deals, DealQuery, DealSortKey};
pub use domain::{
    Affiliation, AffiliationId, Candidate, CandidateId, Channel, Deal, GeoPoint,
};
pub use query::{recommend, CandidateSortKey, RecommendationQuery};
pub use roster::{AffiliationDirectory, CandidateRoster, RosterError};
pub use selection::SelectionSet;
pub use stats::{classify_tier, format_follower_count, total_followers, Tier};
