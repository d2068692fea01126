//! # teamdraft-types
//!
//! Shared types, errors, and constants for the **TeamDraft** allocation engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MatchId`], [`ParticipantId`]
//! - **Roster model**: [`Participant`]
//! - **Draft model**: [`MatchDraftRequest`], [`Team`], [`TeamAllocation`]
//! - **Draft record**: [`DraftRecord`] (last completed draw per match)
//! - **Errors**: [`DraftError`] with `TD_ERR_` prefix codes
//! - **Constants**: default team count and label prefix

pub mod constants;
pub mod draft;
pub mod error;
pub mod ids;
pub mod participant;
pub mod record;

// Re-export all primary types at crate root for ergonomic imports:
//   use teamdraft_types::{Participant, TeamAllocation, DraftError, ...};

pub use draft::*;
pub use error::*;
pub use ids::*;
pub use participant::*;
pub use record::*;

// Constants are accessed via `teamdraft_types::constants::FOO`
// (not re-exported to avoid name collisions).
