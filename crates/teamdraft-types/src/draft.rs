//! Draft request and allocation types.
//!
//! A [`MatchDraftRequest`] is ephemeral — built per invocation by the
//! boundary layer, never persisted. A [`TeamAllocation`] is the engine's
//! output: N labeled teams whose member lists union to exactly the set of
//! confirmed participants that went in.

use serde::{Deserialize, Serialize};

use crate::MatchId;
use crate::constants::DEFAULT_TEAM_COUNT;

/// A single draft invocation for one match.
///
/// `team_count` is carried as the boundary layer received it (an untrusted
/// integer); the engine validates it and rejects anything non-positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDraftRequest {
    /// The match being drafted.
    pub match_id: MatchId,
    /// Requested number of teams. Must be >= 1; larger than the roster is
    /// fine (trailing teams stay empty).
    pub team_count: i32,
    /// Optional randomness seed. Same seed + same roster order produces the
    /// same allocation.
    pub seed: Option<u64>,
}

impl MatchDraftRequest {
    /// A request with the default team count (2) and ambient randomness.
    #[must_use]
    pub fn new(match_id: MatchId) -> Self {
        Self {
            match_id,
            team_count: DEFAULT_TEAM_COUNT,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_team_count(mut self, team_count: i32) -> Self {
        self.team_count = team_count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One labeled team within an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// "Team 1", "Team 2", ... in assignment order.
    pub label: String,
    /// Display names in round-robin arrival order.
    pub members: Vec<String>,
}

impl Team {
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [{}]", self.label, self.members.join(", "))
    }
}

/// The result of a successful draft: an ordered sequence of teams.
///
/// Ownership transfers to the caller, who may persist or discard it. Two
/// allocations compare equal iff every team label and every member list
/// (including order) matches — which is what makes seed determinism directly
/// assertable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAllocation {
    pub teams: Vec<Team>,
}

impl TeamAllocation {
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Total members across all teams.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.teams.iter().map(Team::size).sum()
    }

    /// Team sizes in team order.
    #[must_use]
    pub fn team_sizes(&self) -> Vec<usize> {
        self.teams.iter().map(Team::size).collect()
    }

    /// Largest team size minus smallest team size. Always <= 1 for an
    /// allocation produced by the engine.
    #[must_use]
    pub fn size_spread(&self) -> usize {
        let max = self.teams.iter().map(Team::size).max().unwrap_or(0);
        let min = self.teams.iter().map(Team::size).min().unwrap_or(0);
        max - min
    }

    /// Look up a team by label.
    #[must_use]
    pub fn team(&self, label: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.label == label)
    }

    /// All member names across teams, in team order then arrival order.
    #[must_use]
    pub fn all_members(&self) -> Vec<&str> {
        self.teams
            .iter()
            .flat_map(|t| t.members.iter().map(String::as_str))
            .collect()
    }
}

impl std::fmt::Display for TeamAllocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, team) in self.teams.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{team}")?;
        }
        Ok(())
    }
}
