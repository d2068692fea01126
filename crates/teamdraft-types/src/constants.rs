//! System-wide constants for the TeamDraft allocation engine.

/// Default number of teams when the caller doesn't specify one.
pub const DEFAULT_TEAM_COUNT: i32 = 2;

/// Prefix for generated team labels ("Team 1", "Team 2", ...).
pub const TEAM_LABEL_PREFIX: &str = "Team";

/// Build the label for the 0-indexed team slot.
#[must_use]
pub fn team_label(index: usize) -> String {
    format!("{TEAM_LABEL_PREFIX} {}", index + 1)
}
