//! Per-match in-flight slots.
//!
//! A keyed flag map with test-and-set acquisition, not a single global
//! lock: two simultaneous requests for the same match cannot both observe
//! "not in flight", and requests for different matches never contend.
//!
//! The map mutex is held only for the flag flip itself — never across
//! roster loading or allocation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use teamdraft_types::{DraftError, MatchId, Result};

/// Process-wide set of per-match in-flight flags.
///
/// Entries are created lazily on the first draft attempt for a match and
/// persist for the life of the process; only the flag is cleared when an
/// attempt completes.
#[derive(Debug, Default)]
pub struct DraftSlots {
    in_flight: Mutex<HashMap<MatchId, bool>>,
}

impl DraftSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<MatchId, bool>> {
        // A poisoning panic can only happen outside the critical section
        // (the flag flip cannot panic), so the map state is always usable.
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Atomically claim the slot for `match_id`.
    ///
    /// Returns an RAII guard that frees the slot on drop — on success, on
    /// error, and during unwinding alike.
    ///
    /// # Errors
    ///
    /// [`DraftError::DraftInProgress`] if the slot is already held. The
    /// request is rejected rather than queued; the caller decides whether
    /// and when to retry.
    pub fn try_acquire(&self, match_id: MatchId) -> Result<SlotGuard<'_>> {
        let mut map = self.lock();
        let flag = map.entry(match_id).or_insert(false);
        if *flag {
            return Err(DraftError::DraftInProgress(match_id));
        }
        *flag = true;
        Ok(SlotGuard {
            slots: self,
            match_id,
        })
    }

    /// Whether a draft is currently running for `match_id`.
    #[must_use]
    pub fn is_in_flight(&self, match_id: MatchId) -> bool {
        self.lock().get(&match_id).copied().unwrap_or(false)
    }

    /// Number of matches that have ever attempted a draft in this process.
    #[must_use]
    pub fn tracked_matches(&self) -> usize {
        self.lock().len()
    }
}

/// Exclusive hold on a match's draft slot. Dropping it frees the slot.
#[derive(Debug)]
pub struct SlotGuard<'a> {
    slots: &'a DraftSlots,
    match_id: MatchId,
}

impl SlotGuard<'_> {
    #[must_use]
    pub fn match_id(&self) -> MatchId {
        self.match_id
    }
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        let mut map = self.slots.lock();
        if let Some(flag) = map.get_mut(&self.match_id) {
            *flag = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_then_release() {
        let slots = DraftSlots::new();
        let id = MatchId::new();

        let guard = slots.try_acquire(id).unwrap();
        assert!(slots.is_in_flight(id));
        assert_eq!(guard.match_id(), id);

        drop(guard);
        assert!(!slots.is_in_flight(id));
    }

    #[test]
    fn second_acquire_fails_fast() {
        let slots = DraftSlots::new();
        let id = MatchId::new();

        let _held = slots.try_acquire(id).unwrap();
        let err = slots.try_acquire(id).unwrap_err();
        assert!(matches!(err, DraftError::DraftInProgress(m) if m == id));
    }

    #[test]
    fn reacquire_after_release() {
        let slots = DraftSlots::new();
        let id = MatchId::new();

        drop(slots.try_acquire(id).unwrap());
        assert!(slots.try_acquire(id).is_ok());
    }

    #[test]
    fn distinct_matches_do_not_contend() {
        let slots = DraftSlots::new();
        let a = MatchId::new();
        let b = MatchId::new();

        let _guard_a = slots.try_acquire(a).unwrap();
        let _guard_b = slots.try_acquire(b).unwrap();
        assert!(slots.is_in_flight(a));
        assert!(slots.is_in_flight(b));
    }

    #[test]
    fn entries_persist_after_release() {
        let slots = DraftSlots::new();
        let id = MatchId::new();

        drop(slots.try_acquire(id).unwrap());
        assert_eq!(slots.tracked_matches(), 1);
        assert!(!slots.is_in_flight(id));
    }

    #[test]
    fn unknown_match_is_not_in_flight() {
        let slots = DraftSlots::new();
        assert!(!slots.is_in_flight(MatchId::new()));
        assert_eq!(slots.tracked_matches(), 0);
    }
}
