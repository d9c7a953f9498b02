use crate::infra::{parse_candidate_sort, parse_deal_sort, shortlist_candidates, RallyState};
use clap::Args;
use rally_core::error::AppError;
use rally_core::matching::{
    classify_tier, format_follower_count, parse_payout_amount, recommend, search_deals,
    total_followers, AffiliationId, Candidate, CandidateSortKey, DealQuery, DealSortKey,
    RecommendationQuery,
};

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Minimum combined follower count across all channels
    #[arg(long, default_value_t = 0)]
    pub(crate) min_followers: u64,
    /// Interest tag to match (repeatable; any match qualifies)
    #[arg(long = "interest")]
    pub(crate) interests: Vec<String>,
    /// Restrict results to one school by affiliation id (e.g. sch-ucla)
    #[arg(long)]
    pub(crate) school: Option<String>,
    /// Ranking key: 'fit' or 'followers'
    #[arg(long, default_value = "fit", value_parser = parse_candidate_sort)]
    pub(crate) sort: CandidateSortKey,
    /// Truncate output to the top N results
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Truncate each demo listing to the top N results
    #[arg(long, default_value_t = 5)]
    pub(crate) limit: usize,
    /// Ranking key for the deal board: 'fit' or 'payout'
    #[arg(long, default_value = "payout", value_parser = parse_deal_sort)]
    pub(crate) deal_sort: DealSortKey,
    /// Skip the deal board portion of the demo
    #[arg(long)]
    pub(crate) skip_deals: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        min_followers,
        interests,
        school,
        sort,
        limit,
    } = args;

    let state = RallyState::seeded();
    let query = RecommendationQuery {
        min_followers,
        interests,
        affiliation_id: school.map(AffiliationId::new),
        sort,
    };

    let results = recommend(state.roster.all(), &query);
    if results.is_empty() {
        println!("No influencers match this query.");
        return Ok(());
    }

    let shown = limit.unwrap_or(results.len()).min(results.len());
    println!("{} match(es), showing {}", results.len(), shown);
    for candidate in results.iter().take(shown) {
        print_candidate_line(candidate);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        limit,
        deal_sort,
        skip_deals,
    } = args;
    let state = RallyState::seeded();

    println!("Rally matching demo");
    println!(
        "Roster: {} influencers across {} schools",
        state.roster.len(),
        state.directory.all().len()
    );

    let query = RecommendationQuery {
        min_followers: 20_000,
        interests: vec!["fashion".to_string(), "lifestyle".to_string()],
        sort: CandidateSortKey::FitScore,
        ..Default::default()
    };
    println!("\nTop picks for a fashion/lifestyle campaign (min 20K followers)");
    let results = recommend(state.roster.all(), &query);
    if results.is_empty() {
        println!("  No influencers match this query.");
    }
    for candidate in results.iter().take(limit) {
        print_candidate_line(candidate);
    }

    // shortlist the leaders, then rebuild the list in toggle order
    for candidate in results.iter().take(3) {
        state.shortlist.toggle(candidate.id.clone());
    }
    let shortlisted = shortlist_candidates(&state.shortlist, &state.roster);
    println!("\nShortlist ({} selected)", state.shortlist.count());
    for candidate in &shortlisted {
        println!(
            "- {} ({}) | fit {}",
            candidate.display_name, candidate.affiliation_name, candidate.fit_score
        );
    }

    if skip_deals {
        return Ok(());
    }

    let deal_query = DealQuery {
        sort: deal_sort,
        ..Default::default()
    };
    println!("\nDeal board ({:?} order)", deal_sort);
    for deal in search_deals(&state.deals, &deal_query).iter().take(limit) {
        println!(
            "- {} | {} | {} (parsed {:.0}) | fit {}",
            deal.title,
            deal.brand,
            deal.payout,
            parse_payout_amount(&deal.payout),
            deal.fit_score
        );
    }

    Ok(())
}

fn print_candidate_line(candidate: &Candidate) {
    let total = total_followers(candidate);
    println!(
        "- {} ({}) | {} followers | {} | fit {} | {}",
        candidate.display_name,
        candidate.affiliation_name,
        format_follower_count(total),
        classify_tier(total).label(),
        candidate.fit_score,
        candidate.interests.join(", ")
    );
}
