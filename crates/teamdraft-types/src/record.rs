//! Record of the last completed draft for a match.
//!
//! Kept by the execution guard so callers that lost the draw race (or just
//! reloaded the page) can re-read the most recent result without triggering
//! a new draw.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{MatchId, TeamAllocation};

/// The last successfully completed draft for a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    /// The match this draw belongs to.
    pub match_id: MatchId,
    /// The allocation that was produced.
    pub allocation: TeamAllocation,
    /// The seed used, if the request supplied one.
    pub seed: Option<u64>,
    /// SHA-256 fingerprint of the allocation (labels + members, in order).
    pub digest: [u8; 32],
    /// When this draw completed.
    pub completed_at: DateTime<Utc>,
}
