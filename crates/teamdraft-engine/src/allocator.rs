//! Pure draft allocation.
//!
//! The core function: takes a roster and a team count, produces a
//! [`TeamAllocation`]. This is the **only** computation the engine exposes —
//! no side effects, no shared state.
//!
//! ```text
//! allocate(&roster, team_count, seed) -> TeamAllocation
//! ```

use teamdraft_types::constants::team_label;
use teamdraft_types::{DraftError, Participant, Result, Team, TeamAllocation};

use crate::shuffle::shuffled;

/// Partition confirmed participants into `team_count` balanced teams.
///
/// ## Algorithm
///
/// 1. Re-filter to confirmed participants (safe on an unfiltered roster)
/// 2. Shuffle — seeded draws are deterministic, unseeded draws are not
/// 3. Round-robin stripe: permuted position `i` goes to team `i % team_count`
/// 4. Label teams "Team 1".."Team N"; members keep arrival order
///
/// An empty eligible roster yields `team_count` empty teams — an organizer
/// may draft before anyone confirms, and the result must still have a
/// well-formed shape for display. A `team_count` above the roster size
/// leaves trailing teams empty.
///
/// ## Errors
///
/// [`DraftError::InvalidTeamCount`] when `team_count <= 0`. Roster content
/// never causes a failure.
pub fn allocate(
    participants: &[Participant],
    team_count: i32,
    seed: Option<u64>,
) -> Result<TeamAllocation> {
    let slots = match usize::try_from(team_count) {
        Ok(n) if n > 0 => n,
        _ => return Err(DraftError::InvalidTeamCount(team_count)),
    };

    let eligible: Vec<Participant> = participants
        .iter()
        .filter(|p| p.confirmed)
        .cloned()
        .collect();

    let mut teams: Vec<Team> = (0..slots)
        .map(|i| Team {
            label: team_label(i),
            members: Vec::new(),
        })
        .collect();

    for (i, participant) in shuffled(&eligible, seed).into_iter().enumerate() {
        teams[i % slots].members.push(participant.display_name);
    }

    Ok(TeamAllocation { teams })
}
