//! Compiled-in demo roster for the waitlist launch.
//!
//! Declaration order matters: it is the stable tie-break order for every sort
//! the query engine performs, so keep new records appended rather than
//! reordered.

use super::domain::{
    Affiliation, AffiliationId, Candidate, CandidateId, Channel, Deal, GeoPoint,
};

fn candidate(
    id: &str,
    display_name: &str,
    affiliation_name: &str,
    affiliation_id: Option<&str>,
    channels: &[(&str, u64)],
    interests: &[&str],
    fit_score: u8,
    lat: f64,
    lng: f64,
) -> Candidate {
    Candidate {
        id: CandidateId::new(id),
        display_name: display_name.to_string(),
        affiliation_name: affiliation_name.to_string(),
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
        geo: GeoPoint { lat, lng },
    }
}

fn affiliation(id: &str, name: &str, city: &str, state: &str, lat: f64, lng: f64) -> Affiliation {
    Affiliation {
        id: AffiliationId::new(id),
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        lat,
        lng,
    }
}

fn deal(id: &str, title: &str, brand: &str, notes: &str, payout: &str, fit_score: u8) -> Deal {
    Deal {
        id: id.to_string(),
        title: title.to_string(),
        brand: brand.to_string(),
        notes: notes.to_string(),
        payout: payout.to_string(),
        fit_score,
    }
}

pub fn seed_affiliations() -> Vec<Affiliation> {
    vec![
        affiliation("sch-ucla", "UCLA", "Los Angeles", "CA", 34.0689, -118.4452),
        affiliation("sch-nyu", "New York University", "New York", "NY", 40.7295, -73.9965),
        affiliation("sch-utexas", "UT Austin", "Austin", "TX", 30.2849, -97.7341),
        affiliation("sch-umich", "University of Michigan", "Ann Arbor", "MI", 42.278, -83.7382),
        affiliation("sch-fsu", "Florida State University", "Tallahassee", "FL", 30.4419, -84.2985),
        affiliation("sch-asu", "Arizona State University", "Tempe", "AZ", 33.4242, -111.9281),
        affiliation("sch-uw", "University of Washington", "Seattle", "WA", 47.6553, -122.3035),
        affiliation("sch-gatech", "Georgia Tech", "Atlanta", "GA", 33.7756, -84.3963),
        affiliation("sch-osu", "Ohio State University", "Columbus", "OH", 40.0067, -83.0305),
        affiliation("sch-bu", "Boston University", "Boston", "MA", 42.3505, -71.1054),
    ]
}

pub fn seed_candidates() -> Vec<Candidate> {
    vec![
        candidate(
            "inf-001",
            "Maya Chen",
            "UCLA",
            Some("sch-ucla"),
            &[("instagram", 12_500), ("tiktok", 8_200), ("youtube", 1_800)],
            &["Fashion", "Lifestyle"],
            92,
            34.0689,
            -118.4452,
        ),
        candidate(
            "inf-002",
            "Jordan Avery",
            "New York University",
            Some("sch-nyu"),
            &[("instagram", 18_700), ("tiktok", 15_300), ("youtube", 4_200)],
            &["Food", "Travel"],
            88,
            40.7295,
            -73.9965,
        ),
        candidate(
            "inf-003",
            "Priya Raman",
            "UT Austin",
            Some("sch-utexas"),
            &[("instagram", 9_800), ("tiktok", 11_200), ("youtube", 2_600)],
            &["Tech", "Gaming"],
            85,
            30.2849,
            -97.7341,
        ),
        candidate(
            "inf-004",
            "Deshawn Carter",
            "University of Michigan",
            Some("sch-umich"),
            &[("instagram", 45_000), ("tiktok", 62_000)],
            &["Sports", "Fitness"],
            90,
            42.278,
            -83.7382,
        ),
        candidate(
            "inf-005",
            "Sofia Delgado",
            "Florida State University",
            Some("sch-fsu"),
            &[("instagram", 7_400), ("tiktok", 21_900)],
            &["Beauty", "Fashion"],
            81,
            30.4419,
            -84.2985,
        ),
        candidate(
            "inf-006",
            "Ethan Park",
            "Arizona State University",
            Some("sch-asu"),
            &[("instagram", 3_100), ("tiktok", 5_600), ("youtube", 900)],
            &["Comedy", "Gaming"],
            74,
            33.4242,
            -111.9281,
        ),
        candidate(
            "inf-007",
            "Lena Okafor",
            "University of Washington",
            Some("sch-uw"),
            &[("instagram", 28_300), ("youtube", 19_500)],
            &["Photography", "Travel"],
            87,
            47.6553,
            -122.3035,
        ),
        candidate(
            "inf-008",
            "Marcus Hill",
            "Georgia Tech",
            Some("sch-gatech"),
            &[("instagram", 6_200), ("tiktok", 4_400)],
            &["Tech", "Music"],
            79,
            33.7756,
            -84.3963,
        ),
        candidate(
            "inf-009",
            "Hannah Brooks",
            "Ohio State University",
            Some("sch-osu"),
            &[("instagram", 52_000), ("tiktok", 48_000), ("youtube", 12_000)],
            &["Fitness", "Lifestyle"],
            95,
            40.0067,
            -83.0305,
        ),
        candidate(
            "inf-010",
            "Noah Kim",
            "Boston University",
            Some("sch-bu"),
            &[("instagram", 2_800), ("tiktok", 1_900)],
            &["Music", "Comedy"],
            68,
            42.3505,
            -71.1054,
        ),
        candidate(
            "inf-011",
            "Isabella Rossi",
            "UCLA",
            Some("sch-ucla"),
            &[("instagram", 88_000), ("tiktok", 134_000), ("youtube", 22_000)],
            &["Fashion", "Beauty"],
            97,
            34.0689,
            -118.4452,
        ),
        candidate(
            "inf-012",
            "Tyler Nguyen",
            "UT Austin",
            Some("sch-utexas"),
            &[("tiktok", 17_800), ("youtube", 6_300)],
            &["Food", "Comedy"],
            76,
            30.2849,
            -97.7341,
        ),
        candidate(
            "inf-013",
            "Amara Diallo",
            "New York University",
            Some("sch-nyu"),
            &[("instagram", 14_600), ("tiktok", 9_700)],
            &["Fashion", "Photography"],
            84,
            40.7295,
            -73.9965,
        ),
        candidate(
            "inf-014",
            "Caleb Wright",
            "Arizona State University",
            Some("sch-asu"),
            &[("instagram", 31_500), ("tiktok", 27_200)],
            &["Fitness", "Sports"],
            83,
            33.4242,
            -111.9281,
        ),
        candidate(
            "inf-015",
            "Grace Liu",
            "University of Washington",
            Some("sch-uw"),
            &[("instagram", 5_900), ("youtube", 3_200)],
            &["Tech", "Photography"],
            72,
            47.6553,
            -122.3035,
        ),
        candidate(
            "inf-016",
            "Omar Haddad",
            "Georgia Tech",
            Some("sch-gatech"),
            &[("instagram", 11_300), ("tiktok", 13_800), ("youtube", 2_100)],
            &["Gaming", "Tech"],
            86,
            33.7756,
            -84.3963,
        ),
        candidate(
            "inf-017",
            "Ava Thompson",
            "Florida State University",
            Some("sch-fsu"),
            &[("instagram", 23_400), ("tiktok", 41_600)],
            &["Lifestyle", "Travel"],
            80,
            30.4419,
            -84.2985,
        ),
        candidate(
            "inf-018",
            "Lucas Mendes",
            "Boston University",
            Some("sch-bu"),
            &[("instagram", 8_800), ("tiktok", 7_100), ("youtube", 15_400)],
            &["Music", "Lifestyle"],
            77,
            42.3505,
            -71.1054,
        ),
        candidate(
            "inf-019",
            "Zoe Martin",
            "University of Michigan",
            Some("sch-umich"),
            &[("instagram", 4_400), ("tiktok", 3_300)],
            &["Food", "Beauty"],
            70,
            42.278,
            -83.7382,
        ),
        candidate(
            "inf-020",
            "Ibrahim Sow",
            "Ohio State University",
            Some("sch-osu"),
            &[("instagram", 19_200), ("tiktok", 22_700), ("youtube", 5_800)],
            &["Sports", "Comedy"],
            82,
            40.0067,
            -83.0305,
        ),
        candidate(
            "inf-021",
            "Chloe Dubois",
            "New York University",
            Some("sch-nyu"),
            &[("instagram", 64_000), ("tiktok", 51_000)],
            &["Fashion", "Travel"],
            93,
            40.7295,
            -73.9965,
        ),
        candidate(
            "inf-022",
            "Ryan O'Connell",
            "UCLA",
            Some("sch-ucla"),
            &[("tiktok", 36_500), ("youtube", 8_900)],
            &["Comedy", "Sports"],
            75,
            34.0689,
            -118.4452,
        ),
        candidate(
            "inf-023",
            "Naomi Tanaka",
            "University of Washington",
            Some("sch-uw"),
            &[("instagram", 16_800), ("tiktok", 12_400), ("youtube", 3_700)],
            &["Beauty", "Lifestyle"],
            89,
            47.6553,
            -122.3035,
        ),
        candidate(
            "inf-024",
            "Gabriel Santos",
            "UT Austin",
            Some("sch-utexas"),
            &[("instagram", 27_900), ("tiktok", 33_100)],
            &["Music", "Food"],
            78,
            30.2849,
            -97.7341,
        ),
        candidate(
            "inf-025",
            "Emily Foster",
            "University of Michigan",
            Some("sch-umich"),
            &[("instagram", 9_100), ("tiktok", 6_500), ("youtube", 1_200)],
            &["Travel", "Photography"],
            73,
            42.278,
            -83.7382,
        ),
        candidate(
            "inf-026",
            "Andre Bishop",
            "Georgia Tech",
            Some("sch-gatech"),
            &[("instagram", 41_700), ("tiktok", 38_200), ("youtube", 9_600)],
            &["Tech", "Fitness"],
            91,
            33.7756,
            -84.3963,
        ),
        candidate(
            "inf-027",
            "Mia Kowalski",
            "Boston University",
            Some("sch-bu"),
            &[("instagram", 13_200), ("tiktok", 10_900)],
            &["Food", "Lifestyle"],
            71,
            42.3505,
            -71.1054,
        ),
        candidate(
            "inf-028",
            "Jaylen Reed",
            "Florida State University",
            Some("sch-fsu"),
            &[("instagram", 56_000), ("tiktok", 72_000), ("youtube", 18_000)],
            &["Sports", "Music"],
            94,
            30.4419,
            -84.2985,
        ),
        candidate(
            "inf-029",
            "Sarah Whitfield",
            "Arizona State University",
            Some("sch-asu"),
            &[("instagram", 7_700), ("tiktok", 9_300)],
            &["Fashion", "Fitness"],
            69,
            33.4242,
            -111.9281,
        ),
        candidate(
            "inf-030",
            "Daniel Mwangi",
            "Ohio State University",
            Some("sch-osu"),
            &[("instagram", 21_600), ("tiktok", 18_400), ("youtube", 6_900)],
            &["Gaming", "Comedy"],
            87,
            40.0067,
            -83.0305,
        ),
    ]
}

pub fn seed_deals() -> Vec<Deal> {
    vec![
        deal(
            "deal-001",
            "Game-day story takeover",
            "Campus Eats",
            "Three stories during the home opener, tag the brand account.",
            "$250 per post",
            90,
        ),
        deal(
            "deal-002",
            "Dorm essentials haul",
            "NestBox",
            "One in-feed reel unboxing the fall dorm kit.",
            "$400",
            84,
        ),
        deal(
            "deal-003",
            "Spring tour ambassador",
            "TrailBrew Coffee",
            "Month-long ambassadorship covering three campus events.",
            "Up to $1,200 for the full run",
            88,
        ),
        deal(
            "deal-004",
            "Fitness challenge duet",
            "PulseWear",
            "Duet the brand's challenge video and share your routine.",
            "$150 plus gear bundle",
            76,
        ),
        deal(
            "deal-005",
            "Study-week playlist promo",
            "Looply",
            "Promote the collaborative playlist feature in one story.",
            "Gift card",
            64,
        ),
        deal(
            "deal-006",
            "Late-night snack review",
            "Campus Eats",
            "Honest review reel of the new midnight menu.",
            "$180.50",
            71,
        ),
        deal(
            "deal-007",
            "Career fair fit check",
            "Thread & Co",
            "Style two interview outfits from the fall line.",
            "$320 per look",
            82,
        ),
        deal(
            "deal-008",
            "Homecoming photo diary",
            "SnapPrint",
            "Photo-diary carousel from homecoming weekend, prints provided.",
            "$95",
            58,
        ),
        deal(
            "deal-009",
            "Esports watch party",
            "LevelUp Lounge",
            "Host and stream a watch party at the campus lounge.",
            "$1,000 appearance fee",
            86,
        ),
        deal(
            "deal-010",
            "Sustainable swaps series",
            "GreenRoute",
            "Three-part series on low-waste campus living.",
            "$275 per episode",
            79,
        ),
    ]
}
