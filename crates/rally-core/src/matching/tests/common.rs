use crate::matching::domain::{AffiliationId, Candidate, CandidateId, Channel, GeoPoint};

pub(super) fn candidate(
    id: &str,
    affiliation_id: Option<&str>,
    channels: &[(&str, u64)],
    interests: &[&str],
    fit_score: u8,
) -> Candidate {
    Candidate {
        id: CandidateId::new(id),
        display_name: format!("Candidate {id}"),
        affiliation_name: "Test University".to_string(),
        affiliation_id: affiliation_id.map(AffiliationId::new),
        channels: channels
            .iter()
            .map(|(platform, followers)| Channel {
                platform: platform.to_string(),
                followers: *followers,
            })
            .collect(),
        interests: interests.iter().map(|tag| tag.to_string()).collect(),
        fit_score,
        geo: GeoPoint { lat: 0.0, lng: 0.0 },
    }
}

/// Three-record roster with follower totals 22,500 / 38,200 / 23,600.
pub(super) fn trio() -> Vec<Candidate> {
    vec![
        candidate(
            "inf-a",
            Some("sch-1"),
            &[("instagram", 12_500), ("tiktok", 8_200), ("youtube", 1_800)],
            &["Fashion", "Lifestyle"],
            92,
        ),
        candidate(
            "inf-b",
            Some("sch-2"),
            &[("instagram", 18_700), ("tiktok", 15_300), ("youtube", 4_200)],
            &["Food", "Travel"],
            88,
        ),
        candidate(
            "inf-c",
            Some("sch-1"),
            &[("instagram", 9_800), ("tiktok", 11_200), ("youtube", 2_600)],
            &["Tech", "Gaming"],
            85,
        ),
    ]
}

pub(super) fn result_ids(results: &[Candidate]) -> Vec<&str> {
    results.iter().map(|candidate| candidate.id.0.as_str()).collect()
}
