//! Error types for the TeamDraft core.
//!
//! All errors use the `TD_ERR_` prefix convention for easy grepping in logs.
//! Only two kinds originate in the core:
//! - 1xx: validation errors (caller must correct the request)
//! - 2xx: contention errors (retryable once the in-flight draw completes)

use thiserror::Error;

use crate::MatchId;

/// Central error enum for all TeamDraft operations.
#[derive(Debug, Error)]
pub enum DraftError {
    /// The requested team count was zero or negative. No allocation was
    /// attempted. Not retryable without caller correction.
    #[error("TD_ERR_100: invalid team count: {0} (must be >= 1)")]
    InvalidTeamCount(i32),

    /// A draft is already in flight for this match. Retryable after the
    /// in-flight draw completes; retry policy belongs to the caller.
    #[error("TD_ERR_200: draft already in progress for match {0}")]
    DraftInProgress(MatchId),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, DraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_team_count_display() {
        let err = DraftError::InvalidTeamCount(-3);
        let msg = format!("{err}");
        assert!(msg.starts_with("TD_ERR_100"), "Got: {msg}");
        assert!(msg.contains("-3"));
    }

    #[test]
    fn draft_in_progress_display() {
        let id = MatchId::new();
        let err = DraftError::DraftInProgress(id);
        let msg = format!("{err}");
        assert!(msg.starts_with("TD_ERR_200"), "Got: {msg}");
        assert!(msg.contains(&id.to_string()));
    }

    #[test]
    fn all_errors_have_td_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(DraftError::InvalidTeamCount(0)),
            Box::new(DraftError::DraftInProgress(MatchId::new())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(msg.starts_with("TD_ERR_"), "Error missing prefix: {msg}");
        }
    }
}
