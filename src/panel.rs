//! Consumer-side controller for the "top repositories" panel.
//!
//! A [`RepoPanel`] owns at most one live invocation. Starting a new load, or
//! tearing the panel down, cancels the previous one; a cancelled invocation
//! never publishes anything. Subscribers see every transition through a
//! `watch` channel.

use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::fetcher::RepositoryFetcher;
use crate::ranking::RankingPolicy;
use crate::result::FetchResult;
use crate::source::Username;

pub struct RepoPanel {
    fetcher: RepositoryFetcher,
    policy: RankingPolicy,
    limit: Option<usize>,
    state_tx: watch::Sender<FetchResult>,
    /// Id of the live invocation. Only touched under the watch lock.
    live: Arc<AtomicU64>,
    token: Option<CancellationToken>,
}

impl RepoPanel {
    pub fn new(fetcher: RepositoryFetcher, policy: RankingPolicy, limit: Option<usize>) -> Self {
        let (state_tx, _) = watch::channel(FetchResult::loading());
        Self {
            fetcher,
            policy,
            limit,
            state_tx,
            live: Arc::new(AtomicU64::new(0)),
            token: None,
        }
    }

    /// Receiver that observes every published [`FetchResult`].
    pub fn subscribe(&self) -> watch::Receiver<FetchResult> {
        self.state_tx.subscribe()
    }

    /// Latest published result.
    pub fn current(&self) -> FetchResult {
        self.state_tx.borrow().clone()
    }

    pub fn policy(&self) -> RankingPolicy {
        self.policy
    }

    /// Starts a new invocation for `username`, cancelling the previous one.
    ///
    /// Must be called from within a tokio runtime. The returned handle
    /// resolves once the invocation has finished or been cancelled; it can be
    /// dropped freely.
    pub fn load(&mut self, username: Username) -> JoinHandle<()> {
        self.cancel();

        let token = CancellationToken::new();
        self.token = Some(token.clone());

        let live = self.live.clone();
        let mut invocation = 0;
        self.state_tx.send_modify(|state| {
            invocation = live.fetch_add(1, Ordering::SeqCst) + 1;
            *state = FetchResult::loading();
        });
        debug!("Invocation {} started for {}", invocation, username);

        let fetcher = self.fetcher.clone();
        let policy = self.policy;
        let limit = self.limit;
        let state_tx = self.state_tx.clone();

        tokio::spawn(async move {
            let Some(outcome) = fetcher
                .fetch_cancellable(&username, policy, limit, &token)
                .await
            else {
                debug!("Invocation {} discarded", invocation);
                return;
            };

            // The id check and the publish share the watch lock with `load`,
            // so a newer invocation can never be overwritten by this one.
            let published = state_tx.send_if_modified(|state| {
                if token.is_cancelled() || live.load(Ordering::SeqCst) != invocation {
                    return false;
                }
                state.complete(outcome)
            });

            if !published {
                debug!("Invocation {} finished after being superseded", invocation);
            }
        })
    }

    /// Cancels the live invocation, if any, without publishing a result.
    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }
}

impl Drop for RepoPanel {
    fn drop(&mut self) {
        self.cancel();
    }
}
