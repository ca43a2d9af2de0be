//! Branch store - in-memory cache of reservable branches
//!
//! `BranchStore` is an explicit context object: build one at the application
//! root, wrap it in `Arc` and hand it to whoever needs it. Every operation is
//! a single round trip; failures never escape and are reported through
//! [`BranchStore::error`].

use std::sync::atomic::{AtomicU64, Ordering};

use shared::models::{Branch, BranchUpdate};
use tokio::sync::RwLock;

use crate::api::BranchApi;
use crate::error::{ClientResult, StoreError};
use crate::{ClientConfig, NetworkHttpClient};

/// Result of [`BranchStore::update_branch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Remote write succeeded and the cached branch was patched
    Applied,
    /// Remote write succeeded but the branch is not in the cache
    NotCached,
    /// Remote write failed; cache untouched
    Failed,
}

#[derive(Debug, Default)]
struct StoreState {
    branches: Vec<Branch>,
    error: Option<StoreError>,
    /// Sequence of the newest fetch whose response was applied
    applied_fetch: u64,
}

/// In-memory branch cache layered over a [`BranchApi`]
#[derive(Debug)]
pub struct BranchStore<A: BranchApi = NetworkHttpClient> {
    api: A,
    state: RwLock<StoreState>,
    fetch_seq: AtomicU64,
}

impl BranchStore<NetworkHttpClient> {
    /// Build a store talking to the network API described by `config`
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }
}

impl<A: BranchApi> BranchStore<A> {
    /// Create an empty store
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(StoreState::default()),
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Underlying API client
    pub fn api(&self) -> &A {
        &self.api
    }

    // ========== Actions ==========

    /// Reload all branches, keeping only those that accept reservations.
    ///
    /// On failure the cached list is left as is and the fetch error is set.
    /// A response is dropped if a fetch issued later has already been applied.
    pub async fn fetch_branches(&self) {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.api.list_branches().await;

        let mut state = self.state.write().await;
        if seq < state.applied_fetch {
            tracing::debug!(seq, applied = state.applied_fetch, "Discarding stale branch fetch");
            return;
        }
        state.applied_fetch = seq;

        match result {
            Ok(all) => {
                let total = all.len();
                state.branches = all
                    .into_iter()
                    .filter(|b| b.accepts_reservations)
                    .collect();
                state.error = None;
                tracing::debug!(total, kept = state.branches.len(), "Branches fetched");
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching branches");
                state.error = Some(StoreError::FetchFailed);
            }
        }
    }

    /// Send a partial update, then patch the cached branch on success.
    pub async fn update_branch(&self, branch_id: &str, update: &BranchUpdate) -> UpdateOutcome {
        let result = self.api.update_branch(branch_id, update).await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                let outcome = match state.branches.iter_mut().find(|b| b.id == branch_id) {
                    Some(branch) => {
                        update.apply_to(branch);
                        UpdateOutcome::Applied
                    }
                    None => {
                        tracing::warn!(
                            branch_id,
                            "Updated branch is not cached, skipping local merge"
                        );
                        UpdateOutcome::NotCached
                    }
                };
                state.error = None;
                outcome
            }
            Err(e) => {
                tracing::error!(branch_id, error = %e, "Error updating branch");
                state.error = Some(StoreError::UpdateFailed);
                UpdateOutcome::Failed
            }
        }
    }

    pub async fn enable_reservation(&self, branch_id: &str) -> UpdateOutcome {
        self.update_branch(branch_id, &BranchUpdate::enable_reservations())
            .await
    }

    pub async fn disable_reservation(&self, branch_id: &str) -> UpdateOutcome {
        self.update_branch(branch_id, &BranchUpdate::disable_reservations())
            .await
    }

    // ========== Getters ==========

    /// Snapshot of the cached branches, in server order
    pub async fn branches(&self) -> Vec<Branch> {
        self.state.read().await.branches.clone()
    }

    /// First cached branch with the given id
    pub async fn branch_by_id(&self, id: &str) -> Option<Branch> {
        self.state
            .read()
            .await
            .branches
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// Error left by the last operation, if it failed
    pub async fn error(&self) -> Option<StoreError> {
        self.state.read().await.error
    }

    /// Message for [`Self::error`], ready to render
    pub async fn error_message(&self) -> Option<&'static str> {
        self.error().await.map(|e| e.message())
    }
}

/// Reservable tables across all sections of `branch`; 0 for `None`.
pub fn count_reservable_tables(branch: Option<&Branch>) -> usize {
    branch.map_or(0, Branch::reservable_table_count)
}
