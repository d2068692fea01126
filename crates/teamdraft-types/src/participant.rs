//! Participant (roster) types.
//!
//! A participant is a person attached to a match. Only participants with
//! `confirmed == true` are eligible for a draft; the engine re-filters
//! defensively even if the caller already did.

use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// A person associated with a match, confirmed or not.
///
/// Created and owned by the roster layer; the allocation engine treats it
/// as read-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique within a match.
    pub id: ParticipantId,
    /// Name shown in team listings. Not required to be unique.
    pub display_name: String,
    /// Whether the participant confirmed attendance.
    pub confirmed: bool,
}

impl Participant {
    /// A confirmed participant with a fresh ID.
    #[must_use]
    pub fn confirmed(display_name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            display_name: display_name.into(),
            confirmed: true,
        }
    }

    /// An invited participant who has not confirmed attendance.
    #[must_use]
    pub fn unconfirmed(display_name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            display_name: display_name.into(),
            confirmed: false,
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.confirmed { "confirmed" } else { "invited" };
        write!(f, "{} ({state})", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_constructor() {
        let p = Participant::confirmed("Ana");
        assert!(p.confirmed);
        assert_eq!(p.display_name, "Ana");
    }

    #[test]
    fn unconfirmed_constructor() {
        let p = Participant::unconfirmed("Bruno");
        assert!(!p.confirmed);
    }

    #[test]
    fn display_includes_state() {
        let p = Participant::confirmed("Ana");
        assert_eq!(format!("{p}"), "Ana (confirmed)");
        let q = Participant::unconfirmed("Bruno");
        assert_eq!(format!("{q}"), "Bruno (invited)");
    }

    #[test]
    fn serde_roundtrip() {
        let p = Participant::confirmed("Carla");
        let json = serde_json::to_string(&p).unwrap();
        let back: Participant = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
