use serde::{Deserialize, Serialize};

use super::domain::Candidate;

/// Sum of follower counts across every channel a candidate publishes on.
///
/// Computed on demand so it always reflects the channel list as loaded; a
/// candidate with no channels totals zero.
pub fn total_followers(candidate: &Candidate) -> u64 {
    candidate.channels.iter().map(|channel| channel.followers).sum()
}

/// Compact human-readable follower count: "812", "12.5K", "1.5M".
///
/// Rounding happens before the unit is chosen, so a count that rounds to a
/// four-digit K value ("1000.0K") promotes to "1.0M" instead.
pub fn format_follower_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }

    // one-decimal rounding in integer space (tenths of a unit)
    let tenths_of_k = (count + 50) / 100;
    if tenths_of_k < 10_000 {
        return format!("{}.{}K", tenths_of_k / 10, tenths_of_k % 10);
    }

    let tenths_of_m = (count + 50_000) / 100_000;
    format!("{}.{}M", tenths_of_m / 10, tenths_of_m % 10)
}

/// Coarse audience bucket derived from total followers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Nano,
    Micro,
    MidTier,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Nano => "Nano",
            Tier::Micro => "Micro",
            Tier::MidTier => "Mid-tier",
        }
    }
}

/// Buckets a follower total; lower bounds are inclusive, highest threshold wins.
pub fn classify_tier(total_followers: u64) -> Tier {
    if total_followers >= 50_000 {
        Tier::MidTier
    } else if total_followers >= 10_000 {
        Tier::Micro
    } else {
        Tier::Nano
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::domain::{Candidate, CandidateId, Channel, GeoPoint};

    fn candidate_with_channels(channels: Vec<Channel>) -> Candidate {
        Candidate {
            id: CandidateId::new("inf-test"),
            display_name: "Test".to_string(),
            affiliation_name: "Test U".to_string(),
            affiliation_id: None,
            channels,
            interests: Vec::new(),
            fit_score: 50,
            geo: GeoPoint { lat: 0.0, lng: 0.0 },
        }
    }

    #[test]
    fn total_followers_sums_all_channels() {
        let candidate = candidate_with_channels(vec![
            Channel {
                platform: "instagram".to_string(),
                followers: 12_500,
            },
            Channel {
                platform: "tiktok".to_string(),
                followers: 8_200,
            },
            Channel {
                platform: "youtube".to_string(),
                followers: 1_800,
            },
        ]);
        assert_eq!(total_followers(&candidate), 22_500);
    }

    #[test]
    fn total_followers_is_zero_without_channels() {
        let candidate = candidate_with_channels(Vec::new());
        assert_eq!(total_followers(&candidate), 0);
    }

    #[test]
    fn format_boundaries() {
        assert_eq!(format_follower_count(999), "999");
        assert_eq!(format_follower_count(1_000), "1.0K");
        assert_eq!(format_follower_count(12_540), "12.5K");
        assert_eq!(format_follower_count(1_500_000), "1.5M");
    }

    #[test]
    fn format_never_shows_a_four_digit_k_value() {
        assert_eq!(format_follower_count(999_949), "999.9K");
        assert_eq!(format_follower_count(999_950), "1.0M");
        assert_eq!(format_follower_count(1_000_000), "1.0M");
    }

    #[test]
    fn tier_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(classify_tier(9_999), Tier::Nano);
        assert_eq!(classify_tier(10_000), Tier::Micro);
        assert_eq!(classify_tier(49_999), Tier::Micro);
        assert_eq!(classify_tier(50_000), Tier::MidTier);
    }

    #[test]
    fn tier_labels_match_marketing_copy() {
        assert_eq!(classify_tier(500).label(), "Nano");
        assert_eq!(classify_tier(25_000).label(), "Micro");
        assert_eq!(classify_tier(180_000).label(), "Mid-tier");
    }
}
