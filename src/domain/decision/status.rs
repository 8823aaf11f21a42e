//! DecisionStatus enum for tracking the frame -> seal -> retrospect lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest lifecycle stage a decision has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    #[default]
    Framed,
    Sealed,
    Retrospected,
}

impl DecisionStatus {
    /// Derives the status implied by which lifecycle dates are present.
    pub fn from_dates(has_sealed_date: bool, has_retrospective_date: bool) -> Self {
        match (has_sealed_date, has_retrospective_date) {
            (_, true) => DecisionStatus::Retrospected,
            (true, false) => DecisionStatus::Sealed,
            (false, false) => DecisionStatus::Framed,
        }
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Framed -> Sealed
    /// - Sealed -> Retrospected
    pub fn can_transition_to(&self, target: &DecisionStatus) -> bool {
        use DecisionStatus::*;
        matches!((self, target), (Framed, Sealed) | (Sealed, Retrospected))
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionStatus::Framed => "framed",
            DecisionStatus::Sealed => "sealed",
            DecisionStatus::Retrospected => "retrospected",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_framed() {
        assert_eq!(DecisionStatus::default(), DecisionStatus::Framed);
    }

    #[test]
    fn from_dates_picks_highest_stage() {
        assert_eq!(DecisionStatus::from_dates(false, false), DecisionStatus::Framed);
        assert_eq!(DecisionStatus::from_dates(true, false), DecisionStatus::Sealed);
        assert_eq!(DecisionStatus::from_dates(true, true), DecisionStatus::Retrospected);
    }

    #[test]
    fn only_forward_single_steps_are_allowed() {
        use DecisionStatus::*;
        assert!(Framed.can_transition_to(&Sealed));
        assert!(Sealed.can_transition_to(&Retrospected));
        assert!(!Framed.can_transition_to(&Retrospected));
        assert!(!Retrospected.can_transition_to(&Sealed));
        assert!(!Sealed.can_transition_to(&Sealed));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DecisionStatus::Retrospected).unwrap(),
            "\"retrospected\""
        );
    }
}
