//! # teamdraft-guard
//!
//! **Draft execution guard**: at most one allocation computation runs at a
//! time per match, and the last completed draw stays readable.
//!
//! Two rapid re-draw requests for the same match must not interleave — each
//! would load a roster and hand a result downstream, and the loser of the
//! race could persist a draw computed from a stale roster. The guard gives
//! each match an exclusive execution slot:
//!
//! - a second request while a slot is held fails fast with
//!   [`DraftError::DraftInProgress`] (no queueing — re-draws are
//!   operator-initiated and retried, not silently delayed)
//! - the slot is released on every exit path, including panics, so a failed
//!   draw never locks a match out
//! - distinct matches never contend with each other
//!
//! [`DraftError::DraftInProgress`]: teamdraft_types::DraftError::DraftInProgress

pub mod coordinator;
pub mod slots;

pub use coordinator::DraftCoordinator;
pub use slots::{DraftSlots, SlotGuard};
