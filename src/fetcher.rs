//! Fetches a user's repositories and reduces them to a ranked top-N.

use log::{debug, info, warn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::http::FetchError;
use crate::ranking::{DEFAULT_LIMIT, RankingPolicy, rank};
use crate::result::FetchResult;
use crate::source::{RepoSource, RepositoryRecord, Username};

#[derive(Clone)]
pub struct RepositoryFetcher {
    source: Arc<dyn RepoSource>,
}

impl RepositoryFetcher {
    pub fn new(source: Arc<dyn RepoSource>) -> Self {
        Self { source }
    }

    /// One read from the source, then filter, sort and truncate.
    ///
    /// `limit` falls back to [`DEFAULT_LIMIT`]. An empty listing is not an
    /// error.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_top_repositories(
        &self,
        username: &Username,
        policy: RankingPolicy,
        limit: Option<usize>,
    ) -> Result<Vec<RepositoryRecord>, FetchError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        debug!(
            "Listing repositories for {} from {}",
            username,
            self.source.api_url()
        );

        let records = match self.source.list_user_repos(username).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Fetching repositories for {} failed: {}", username, e);
                return Err(e);
            }
        };

        let total = records.len();
        let ranked = rank(records, policy, limit);
        debug!(
            "Ranked {} of {} repositories for {} by {}",
            ranked.len(),
            total,
            username,
            policy
        );
        Ok(ranked)
    }

    /// Like [`fetch_top_repositories`](Self::fetch_top_repositories), but
    /// gives up as soon as `token` is cancelled.
    ///
    /// Returns `None` on cancellation; the in-flight request is dropped.
    #[tracing::instrument(skip(self, token))]
    pub async fn fetch_cancellable(
        &self,
        username: &Username,
        policy: RankingPolicy,
        limit: Option<usize>,
        token: &CancellationToken,
    ) -> Option<Result<Vec<RepositoryRecord>, FetchError>> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                info!("Fetch for {} cancelled", username);
                None
            }
            outcome = self.fetch_top_repositories(username, policy, limit) => {
                if token.is_cancelled() {
                    None
                } else {
                    Some(outcome)
                }
            }
        }
    }

    /// Runs one invocation to its terminal [`FetchResult`].
    pub async fn run(
        &self,
        username: &Username,
        policy: RankingPolicy,
        limit: Option<usize>,
    ) -> FetchResult {
        let mut result = FetchResult::loading();
        result.complete(self.fetch_top_repositories(username, policy, limit).await);
        result
    }
}
