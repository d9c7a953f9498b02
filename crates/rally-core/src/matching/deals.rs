use serde::{Deserialize, Serialize};

use super::domain::Deal;

/// Ranking key for the student deal board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealSortKey {
    #[default]
    FitScore,
    Payout,
}

/// Deal board search request; a blank `text` leaves the predicate inactive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub sort: DealSortKey,
}

/// Filter and rank the deal board.
///
/// The free-text predicate is a trimmed, case-folded substring match over the
/// concatenated title, brand, and notes fields. Sorting is descending and
/// stable on declaration order, as with candidate recommendations.
pub fn search_deals(deals: &[Deal], query: &DealQuery) -> Vec<Deal> {
    let needle = query
        .text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase);

    let mut matches: Vec<Deal> = deals
        .iter()
        .filter(|deal| match &needle {
            Some(needle) => deal_haystack(deal).contains(needle.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    match query.sort {
        DealSortKey::FitScore => {
            matches.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
        }
        DealSortKey::Payout => {
            matches.sort_by(|a, b| {
                parse_payout_amount(&b.payout).total_cmp(&parse_payout_amount(&a.payout))
            });
        }
    }

    matches
}

fn deal_haystack(deal: &Deal) -> String {
    format!("{} {} {}", deal.title, deal.brand, deal.notes).to_lowercase()
}

/// Extract the first numeric token from a free-text payout string.
///
/// Commas between digits are treated as thousands separators and a single
/// decimal point is honored, so "$1,200.50 per post" yields 1200.5. Text with
/// no numeric token ranks as 0.
pub fn parse_payout_amount(text: &str) -> f64 {
    let mut token = String::new();
    let mut seen_point = false;

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            token.push(ch);
        } else if !token.is_empty() && ch == ',' {
            // thousands separator inside the token
        } else if !token.is_empty() && ch == '.' && !seen_point {
            token.push('.');
            seen_point = true;
        } else if !token.is_empty() {
            break;
        }
    }

    token.parse::<f64>().unwrap_or(0.0)
}
