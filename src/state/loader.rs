use tokio_util::sync::CancellationToken;

use crate::api::CampaignSource;
use crate::models::Campaign;

/// What the dashboard knows about the campaign fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderState {
    pub campaigns: Vec<Campaign>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for LoaderState {
    fn default() -> Self {
        Self {
            campaigns: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// How a single fetch settled.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<Campaign>),
    Failed(String),
    /// The view went away first. Never shown to the user.
    Cancelled,
}

impl LoaderState {
    /// Mark a fetch as in flight. The current list stays visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(campaigns) => {
                self.campaigns = campaigns;
                self.error = None;
            }
            LoadOutcome::Failed(message) => {
                self.error = Some(message);
            }
            LoadOutcome::Cancelled => {}
        }
        self.loading = false;
    }

    /// Whether the table should show its "no match" row.
    pub fn shows_empty_placeholder(&self, filtered_len: usize) -> bool {
        !self.loading && self.error.is_none() && filtered_len == 0
    }
}

/// Fetch campaigns from `source`, giving up as soon as `cancel` fires.
///
/// A result that arrives after cancellation is dropped, so callers can
/// commit anything other than `Cancelled` without re-checking.
pub async fn load_campaigns(source: &dyn CampaignSource, cancel: &CancellationToken) -> LoadOutcome {
    let result = cancel.run_until_cancelled(source.fetch_campaigns()).await;

    match result {
        None => {
            tracing::debug!("Campaign fetch cancelled before it settled");
            LoadOutcome::Cancelled
        }
        Some(_) if cancel.is_cancelled() => {
            tracing::debug!("Discarding campaign fetch result after cancellation");
            LoadOutcome::Cancelled
        }
        Some(Ok(campaigns)) => {
            tracing::info!("Loaded {} campaigns", campaigns.len());
            LoadOutcome::Loaded(campaigns)
        }
        Some(Err(e)) if e.is_cancelled() => {
            tracing::debug!("Campaign fetch aborted");
            LoadOutcome::Cancelled
        }
        Some(Err(e)) => {
            tracing::warn!("Failed to load campaigns: {}", e);
            LoadOutcome::Failed(e.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, LOAD_FAILED_MESSAGE};
    use crate::models::{CampaignId, CampaignStatus};
    use async_trait::async_trait;
    use std::cell::Cell;

    fn campaign(id: i64, status: CampaignStatus) -> Campaign {
        Campaign {
            id: CampaignId::Number(id),
            name: format!("Campaign {}", id),
            status,
            clicks: Some(10),
            cost: Some(1.0),
            impressions: Some(100),
        }
    }

    struct FixedSource {
        result: Result<Vec<Campaign>, ApiError>,
        calls: Cell<usize>,
    }

    impl FixedSource {
        fn new(result: Result<Vec<Campaign>, ApiError>) -> Self {
            Self { result, calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl CampaignSource for FixedSource {
        async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    /// Never settles, like a request to a hung server.
    struct PendingSource;

    #[async_trait(?Send)]
    impl CampaignSource for PendingSource {
        async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
            std::future::pending::<Result<Vec<Campaign>, ApiError>>().await
        }
    }

    /// Succeeds, but cancels the token on the way out.
    struct TeardownDuringFetch {
        cancel: CancellationToken,
    }

    #[async_trait(?Send)]
    impl CampaignSource for TeardownDuringFetch {
        async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
            self.cancel.cancel();
            Ok(vec![campaign(1, CampaignStatus::Active)])
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = LoaderState::default();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.campaigns.is_empty());
        assert!(!state.shows_empty_placeholder(0));
    }

    #[tokio::test]
    async fn test_successful_load_replaces_list() {
        let source = FixedSource::new(Ok(vec![
            campaign(1, CampaignStatus::Active),
            campaign(2, CampaignStatus::Paused),
        ]));
        let cancel = CancellationToken::new();

        let mut state = LoaderState::default();
        state.begin();
        let outcome = load_campaigns(&source, &cancel).await;
        state.apply(outcome);

        assert_eq!(source.calls.get(), 1);
        assert_eq!(state.campaigns.len(), 2);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_http_500_sets_error_and_keeps_list() {
        let source = FixedSource::new(Err(ApiError::Server("500 Internal Server Error: ".to_string())));
        let cancel = CancellationToken::new();

        let mut state = LoaderState {
            campaigns: vec![campaign(9, CampaignStatus::Active)],
            ..Default::default()
        };
        state.begin();
        let outcome = load_campaigns(&source, &cancel).await;
        state.apply(outcome);

        assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
        assert_eq!(state.campaigns.len(), 1);
        assert!(!state.loading);
        assert!(!state.shows_empty_placeholder(0));
    }

    #[tokio::test]
    async fn test_network_failure_surfaces_message() {
        let source = FixedSource::new(Err(ApiError::Network("connection refused".to_string())));
        let cancel = CancellationToken::new();

        let outcome = load_campaigns(&source, &cancel).await;
        assert_eq!(
            outcome,
            LoadOutcome::Failed("Network error: connection refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_cancellation_error_is_not_surfaced() {
        let source = FixedSource::new(Err(ApiError::Cancelled));
        let cancel = CancellationToken::new();

        let mut state = LoaderState::default();
        let outcome = load_campaigns(&source, &cancel).await;
        assert_eq!(outcome, LoadOutcome::Cancelled);

        state.apply(outcome);
        assert!(state.error.is_none());
        assert!(!state.loading);
        assert!(state.campaigns.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_token_abandons_pending_fetch() {
        let cancel = CancellationToken::new();
        let teardown = async {
            tokio::task::yield_now().await;
            cancel.cancel();
        };

        let (outcome, ()) = tokio::join!(load_campaigns(&PendingSource, &cancel), teardown);
        assert_eq!(outcome, LoadOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_already_cancelled_token_skips_fetch_result() {
        let source = FixedSource::new(Ok(vec![campaign(1, CampaignStatus::Active)]));
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert_eq!(load_campaigns(&source, &cancel).await, LoadOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_result_after_teardown_is_discarded() {
        let cancel = CancellationToken::new();
        let source = TeardownDuringFetch { cancel: cancel.clone() };

        assert_eq!(load_campaigns(&source, &cancel).await, LoadOutcome::Cancelled);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = LoaderState::default();
        state.apply(LoadOutcome::Failed("boom".to_string()));
        assert_eq!(state.error.as_deref(), Some("boom"));

        state.begin();
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_empty_placeholder_rules() {
        let loaded = LoaderState {
            campaigns: Vec::new(),
            loading: false,
            error: None,
        };
        assert!(loaded.shows_empty_placeholder(0));
        assert!(!loaded.shows_empty_placeholder(3));

        let failed = LoaderState {
            error: Some("Failed to load campaigns".to_string()),
            ..loaded.clone()
        };
        assert!(!failed.shows_empty_placeholder(0));

        let loading = LoaderState {
            loading: true,
            ..loaded
        };
        assert!(!loading.shows_empty_placeholder(0));
    }
}
