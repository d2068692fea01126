//! Guarded draft execution.
//!
//! The coordinator owns the slot map and the last-result cache. A guarded
//! run claims the match's slot, loads the roster, allocates, records the
//! result, and frees the slot — the slot release happens on every exit
//! path because the hold is an RAII guard.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use teamdraft_engine::{allocate, compute_allocation_digest, digest_prefix};
use teamdraft_types::{DraftRecord, MatchDraftRequest, MatchId, Participant, Result, TeamAllocation};

use crate::slots::DraftSlots;

/// Serializes draft execution per match and caches the last completed draw.
///
/// Shared by reference across request handlers (typically behind an `Arc`).
/// The last-result cache has its own lock, so reading a previous draw never
/// touches — let alone blocks on — the slot map.
#[derive(Debug, Default)]
pub struct DraftCoordinator {
    slots: DraftSlots,
    last: Mutex<HashMap<MatchId, DraftRecord>>,
}

impl DraftCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one guarded draft for `request.match_id`.
    ///
    /// `load_roster` is invoked only after the slot is held, so the roster
    /// it returns cannot be raced by another draw of the same match. The
    /// engine re-filters to confirmed participants, so the loader may
    /// return the roster unfiltered.
    ///
    /// # Errors
    ///
    /// [`DraftError::DraftInProgress`] if another draw of this match is in
    /// flight; [`DraftError::InvalidTeamCount`] from the engine. The guard
    /// performs no retries; both errors surface directly.
    ///
    /// [`DraftError::DraftInProgress`]: teamdraft_types::DraftError::DraftInProgress
    /// [`DraftError::InvalidTeamCount`]: teamdraft_types::DraftError::InvalidTeamCount
    pub fn run_guarded<F>(&self, request: &MatchDraftRequest, load_roster: F) -> Result<TeamAllocation>
    where
        F: FnOnce() -> Vec<Participant>,
    {
        let _slot = self.slots.try_acquire(request.match_id)?;
        tracing::debug!(match_id = %request.match_id, "draft slot acquired");

        let roster = load_roster();
        let allocation = allocate(&roster, request.team_count, request.seed)?;

        let digest = compute_allocation_digest(&allocation);
        tracing::info!(
            match_id = %request.match_id,
            teams = allocation.team_count(),
            participants = allocation.member_count(),
            digest = %digest_prefix(&digest),
            "draft completed"
        );

        self.last_lock().insert(
            request.match_id,
            DraftRecord {
                match_id: request.match_id,
                allocation: allocation.clone(),
                seed: request.seed,
                digest,
                completed_at: Utc::now(),
            },
        );

        Ok(allocation)
    }

    /// The last completed draw for a match, if any. Never blocked by an
    /// in-flight draft.
    #[must_use]
    pub fn last_result(&self, match_id: MatchId) -> Option<DraftRecord> {
        self.last_lock().get(&match_id).cloned()
    }

    /// Whether a draft is currently running for `match_id`.
    #[must_use]
    pub fn is_in_flight(&self, match_id: MatchId) -> bool {
        self.slots.is_in_flight(match_id)
    }

    fn last_lock(&self) -> MutexGuard<'_, HashMap<MatchId, DraftRecord>> {
        self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
