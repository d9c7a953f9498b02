use crate::infra::{parse_id_list, shortlist_candidates, AppState, RallyState};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use rally_core::matching::{
    classify_tier, format_follower_count, parse_payout_amount, recommend, search_deals,
    total_followers, Affiliation, Candidate, CandidateId, Deal, DealQuery, GeoPoint,
    RecommendationQuery,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// API shape of one candidate, with the derived fields the UI renders.
#[derive(Debug, Serialize)]
pub(crate) struct CandidateView {
    pub(crate) id: String,
    pub(crate) display_name: String,
    pub(crate) school: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) affiliation_id: Option<String>,
    pub(crate) total_followers: u64,
    pub(crate) followers_label: String,
    pub(crate) tier: &'static str,
    pub(crate) fit_score: u8,
    pub(crate) interests: Vec<String>,
    pub(crate) channels: Vec<ChannelView>,
    pub(crate) geo: GeoPoint,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChannelView {
    pub(crate) platform: String,
    pub(crate) followers: u64,
    pub(crate) followers_label: String,
}

impl CandidateView {
    pub(crate) fn from_candidate(candidate: &Candidate) -> Self {
        let total = total_followers(candidate);
        Self {
            id: candidate.id.0.clone(),
            display_name: candidate.display_name.clone(),
            school: candidate.affiliation_name.clone(),
            affiliation_id: candidate.affiliation_id.as_ref().map(|id| id.0.clone()),
            total_followers: total,
            followers_label: format_follower_count(total),
            tier: classify_tier(total).label(),
            fit_score: candidate.fit_score,
            interests: candidate.interests.clone(),
            channels: candidate
                .channels
                .iter()
                .map(|channel| ChannelView {
                    platform: channel.platform.clone(),
                    followers: channel.followers,
                    followers_label: format_follower_count(channel.followers),
                })
                .collect(),
            geo: candidate.geo,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) total: usize,
    pub(crate) results: Vec<CandidateView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DealView {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) brand: String,
    pub(crate) notes: String,
    pub(crate) payout: String,
    pub(crate) payout_amount: f64,
    pub(crate) fit_score: u8,
}

impl DealView {
    fn from_deal(deal: &Deal) -> Self {
        Self {
            id: deal.id.clone(),
            title: deal.title.clone(),
            brand: deal.brand.clone(),
            notes: deal.notes.clone(),
            payout: deal.payout.clone(),
            payout_amount: parse_payout_amount(&deal.payout),
            fit_score: deal.fit_score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct InfluencerListParams {
    pub(crate) ids: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ShortlistToggleResponse {
    pub(crate) id: String,
    pub(crate) selected: bool,
    pub(crate) count: usize,
}

pub(crate) fn rally_router(state: RallyState) -> Router {
    Router::new()
        .route(
            "/api/v1/recommendations",
            post(recommendations_endpoint),
        )
        .route("/api/v1/influencers", get(influencers_endpoint))
        .route(
            "/api/v1/influencers/:influencer_id",
            get(influencer_endpoint),
        )
        .route("/api/v1/affiliations", get(affiliations_endpoint))
        .route("/api/v1/deals/search", post(deal_search_endpoint))
        .route(
            "/api/v1/shortlist",
            get(shortlist_endpoint).delete(shortlist_clear_endpoint),
        )
        .route(
            "/api/v1/shortlist/:influencer_id/toggle",
            post(shortlist_toggle_endpoint),
        )
        .with_state(state)
}

pub(crate) fn with_service_routes(state: RallyState) -> Router {
    rally_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Rank the roster for a brand query. An empty result list is a valid 200
/// response; the client renders its own empty state.
pub(crate) async fn recommendations_endpoint(
    State(state): State<RallyState>,
    Json(query): Json<RecommendationQuery>,
) -> Json<RecommendationResponse> {
    let results = recommend(state.roster.all(), &query);
    let views: Vec<CandidateView> = results.iter().map(CandidateView::from_candidate).collect();
    Json(RecommendationResponse {
        total: views.len(),
        results: views,
    })
}

pub(crate) async fn influencer_endpoint(
    State(state): State<RallyState>,
    Path(influencer_id): Path<String>,
) -> Response {
    let id = CandidateId::new(influencer_id);
    match state.roster.get(&id) {
        Some(candidate) => {
            (StatusCode::OK, Json(CandidateView::from_candidate(candidate))).into_response()
        }
        None => {
            let payload = json!({ "error": "influencer not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

/// List candidates; with `?ids=a,b,c` returns only those ids in the caller's
/// order, silently dropping unknown ids.
pub(crate) async fn influencers_endpoint(
    State(state): State<RallyState>,
    Query(params): Query<InfluencerListParams>,
) -> Json<Vec<CandidateView>> {
    let views = match params.ids.as_deref() {
        Some(raw) => {
            let ids = parse_id_list(raw);
            state
                .roster
                .get_all(&ids)
                .into_iter()
                .map(CandidateView::from_candidate)
                .collect()
        }
        None => state
            .roster
            .all()
            .iter()
            .map(CandidateView::from_candidate)
            .collect(),
    };
    Json(views)
}

pub(crate) async fn affiliations_endpoint(
    State(state): State<RallyState>,
) -> Json<Vec<Affiliation>> {
    Json(state.directory.all().to_vec())
}

pub(crate) async fn deal_search_endpoint(
    State(state): State<RallyState>,
    Json(query): Json<DealQuery>,
) -> Json<Vec<DealView>> {
    let results = search_deals(&state.deals, &query);
    Json(results.iter().map(DealView::from_deal).collect())
}

pub(crate) async fn shortlist_toggle_endpoint(
    State(state): State<RallyState>,
    Path(influencer_id): Path<String>,
) -> Response {
    let id = CandidateId::new(influencer_id);
    if state.roster.get(&id).is_none() {
        let payload = json!({ "error": "influencer not found" });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    }

    let (selected, count) = state.shortlist.toggle(id.clone());
    let payload = ShortlistToggleResponse {
        id: id.0,
        selected,
        count,
    };
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn shortlist_endpoint(
    State(state): State<RallyState>,
) -> Json<Vec<CandidateView>> {
    let candidates = shortlist_candidates(&state.shortlist, &state.roster);
    Json(
        candidates
            .into_iter()
            .map(CandidateView::from_candidate)
            .collect(),
    )
}

pub(crate) async fn shortlist_clear_endpoint(State(state): State<RallyState>) -> Json<serde_json::Value> {
    state.shortlist.clear();
    Json(json!({ "count": state.shortlist.count() }))
}
