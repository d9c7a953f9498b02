use serde::{Deserialize, Serialize};

use super::domain::{AffiliationId, Candidate};
use super::stats::total_followers;

/// Ranking key for recommendation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSortKey {
    #[default]
    FitScore,
    TotalFollowers,
}

/// One recommendation request: every field defaults to "predicate inactive".
///
/// Queries are cheap value objects built per interaction and discarded after
/// producing a result; they never mutate the roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub min_followers: u64,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation_id: Option<AffiliationId>,
    #[serde(default)]
    pub sort: CandidateSortKey,
}

/// Filter and rank the roster for one query.
///
/// Predicates combine with AND across kinds and OR within the interest list.
/// Sorting is descending and stable, so candidates tied on the sort key keep
/// their roster declaration order. An empty result is a valid outcome, not an
/// error; malformed or absent filter fields simply deactivate their predicate.
pub fn recommend(candidates: &[Candidate], query: &RecommendationQuery) -> Vec<Candidate> {
    let mut matches: Vec<Candidate> = candidates
        .iter()
        .filter(|candidate| matches_query(candidate, query))
        .cloned()
        .collect();

    match query.sort {
        CandidateSortKey::FitScore => {
            matches.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
        }
        CandidateSortKey::TotalFollowers => {
            matches.sort_by(|a, b| total_followers(b).cmp(&total_followers(a)));
        }
    }

    matches
}

fn matches_query(candidate: &Candidate, query: &RecommendationQuery) -> bool {
    if total_followers(candidate) < query.min_followers {
        return false;
    }

    if !query.interests.is_empty() {
        let has_overlap = query.interests.iter().any(|wanted| {
            candidate
                .interests
                .iter()
                .any(|tag| tags_match(tag, wanted))
        });
        if !has_overlap {
            return false;
        }
    }

    if let Some(wanted) = &query.affiliation_id {
        if candidate.affiliation_id.as_ref() != Some(wanted) {
            return false;
        }
    }

    true
}

/// Case-folded bidirectional substring match, e.g. "Fashion" matches "fashion"
/// and "street fashion". Deliberately loose to mirror product behavior.
pub(crate) fn tags_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}
