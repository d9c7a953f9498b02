use metrics_exporter_prometheus::PrometheusHandle;
use rally_core::config::RosterConfig;
use rally_core::error::AppError;
use rally_core::matching::{
    AffiliationDirectory, Candidate, CandidateId, CandidateRoster, CandidateSortKey, Deal,
    DealSortKey, SelectionSet,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared read-only roster data plus the mutable shortlist, cloned per handler.
#[derive(Clone)]
pub(crate) struct RallyState {
    pub(crate) roster: Arc<CandidateRoster>,
    pub(crate) directory: Arc<AffiliationDirectory>,
    pub(crate) deals: Arc<Vec<Deal>>,
    pub(crate) shortlist: ShortlistStore,
}

impl RallyState {
    /// State backed entirely by the compiled-in fixtures.
    pub(crate) fn seeded() -> Self {
        Self {
            roster: Arc::new(CandidateRoster::seeded()),
            directory: Arc::new(AffiliationDirectory::seeded()),
            deals: Arc::new(rally_core::matching::fixtures::seed_deals()),
            shortlist: ShortlistStore::default(),
        }
    }

    /// State for the running service; the affiliation directory honors the
    /// configured external document.
    pub(crate) fn from_config(config: &RosterConfig) -> Result<Self, AppError> {
        let directory = AffiliationDirectory::load(config)?;
        Ok(Self {
            roster: Arc::new(CandidateRoster::seeded()),
            directory: Arc::new(directory),
            deals: Arc::new(rally_core::matching::fixtures::seed_deals()),
            shortlist: ShortlistStore::default(),
        })
    }
}

#[derive(Default)]
struct ShortlistInner {
    selection: SelectionSet,
    order: Vec<CandidateId>,
}

/// In-memory shortlist: set membership via `SelectionSet`, presentation order
/// via a separately maintained id list (first-toggle order).
#[derive(Default, Clone)]
pub(crate) struct ShortlistStore {
    inner: Arc<Mutex<ShortlistInner>>,
}

impl ShortlistStore {
    /// Flip membership; returns (now_selected, count).
    pub(crate) fn toggle(&self, id: CandidateId) -> (bool, usize) {
        let mut guard = self.inner.lock().expect("shortlist mutex poisoned");
        let selected = guard.selection.toggle(id.clone());
        if selected {
            if !guard.order.contains(&id) {
                guard.order.push(id);
            }
        } else {
            guard.order.retain(|existing| existing != &id);
        }
        (selected, guard.selection.count())
    }

    pub(crate) fn ordered_ids(&self) -> Vec<CandidateId> {
        let guard = self.inner.lock().expect("shortlist mutex poisoned");
        guard.order.clone()
    }

    pub(crate) fn count(&self) -> usize {
        let guard = self.inner.lock().expect("shortlist mutex poisoned");
        guard.selection.count()
    }

    pub(crate) fn clear(&self) {
        let mut guard = self.inner.lock().expect("shortlist mutex poisoned");
        guard.selection.clear();
        guard.order.clear();
    }
}

/// Resolve the current shortlist to candidates in first-toggle order.
pub(crate) fn shortlist_candidates<'a>(
    store: &ShortlistStore,
    roster: &'a CandidateRoster,
) -> Vec<&'a Candidate> {
    let ids = store.ordered_ids();
    roster.get_all(&ids)
}

pub(crate) fn parse_candidate_sort(raw: &str) -> Result<CandidateSortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "fit" | "fit_score" => Ok(CandidateSortKey::FitScore),
        "followers" | "total_followers" => Ok(CandidateSortKey::TotalFollowers),
        other => Err(format!(
            "unknown sort '{other}' (expected 'fit' or 'followers')"
        )),
    }
}

pub(crate) fn parse_deal_sort(raw: &str) -> Result<DealSortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "fit" | "fit_score" => Ok(DealSortKey::FitScore),
        "payout" => Ok(DealSortKey::Payout),
        other => Err(format!("unknown sort '{other}' (expected 'fit' or 'payout')")),
    }
}

/// Split a comma-separated id list, dropping empty segments.
pub(crate) fn parse_id_list(raw: &str) -> Vec<CandidateId> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(CandidateId::new)
        .collect()
}
