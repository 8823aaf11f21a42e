//! Decision record - the journaled entity every aggregate is computed from.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{DecisionStatus, OutcomeType};
use crate::domain::foundation::{DecisionId, Timestamp, ValidationError};

const MAX_CONFIDENCE: u8 = 100;
const MAX_SCALE: u8 = 10;

/// A single journaled decision.
///
/// Created at framing time, then sealed, then retrospected. Lifecycle
/// transitions consume the record and return the advanced one; the
/// analytics never mutate a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: DecisionId,
    pub title: String,
    /// Framing date.
    pub date: Timestamp,
    #[serde(default)]
    pub sealed_date: Option<Timestamp>,
    #[serde(default)]
    pub retrospective_date: Option<Timestamp>,
    #[serde(default)]
    pub outcome: OutcomeType,
    /// 0-100, recorded at framing.
    pub initial_confidence: u8,
    /// 0-100, recorded at retrospective. Absent means unchanged.
    #[serde(default)]
    pub final_confidence: Option<f64>,
    /// 0-10
    pub stress_level: u8,
    /// 0-10, intuition signal independent of confidence.
    pub gut_feeling: u8,
    pub tags: Vec<String>,
    pub status: DecisionStatus,
}

impl Decision {
    /// Frames a new decision.
    pub fn frame(
        id: DecisionId,
        title: impl Into<String>,
        date: Timestamp,
        initial_confidence: u8,
        stress_level: u8,
        gut_feeling: u8,
        tags: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let decision = Self {
            id,
            title: title.into(),
            date,
            sealed_date: None,
            retrospective_date: None,
            outcome: OutcomeType::default(),
            initial_confidence,
            final_confidence: None,
            stress_level,
            gut_feeling,
            tags,
            status: DecisionStatus::Framed,
        };
        decision.validate()?;
        Ok(decision)
    }

    /// Seals a framed decision, locking in the expectation.
    pub fn seal(mut self, at: Timestamp) -> Result<Self, ValidationError> {
        self.ensure_transition(DecisionStatus::Sealed)?;
        self.sealed_date = Some(at);
        self.status = DecisionStatus::Sealed;
        Ok(self)
    }

    /// Records the hindsight outcome of a sealed decision.
    pub fn retrospect(
        mut self,
        at: Timestamp,
        outcome: OutcomeType,
        final_confidence: Option<f64>,
    ) -> Result<Self, ValidationError> {
        self.ensure_transition(DecisionStatus::Retrospected)?;
        if let Some(conf) = final_confidence {
            validate_final_confidence(conf)?;
        }
        self.retrospective_date = Some(at);
        self.outcome = outcome;
        self.final_confidence = final_confidence;
        self.status = DecisionStatus::Retrospected;
        Ok(self)
    }

    fn ensure_transition(&self, target: DecisionStatus) -> Result<(), ValidationError> {
        if !self.status.can_transition_to(&target) {
            return Err(ValidationError::inconsistent(
                self.id.as_str(),
                format!("cannot move from {} to {}", self.status, target),
            ));
        }
        Ok(())
    }

    /// Checks the record against the lifecycle and range invariants.
    ///
    /// Data suppliers call this at the ingestion boundary so that corrupt
    /// records never reach the aggregates.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        if self.tags.is_empty() || self.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(ValidationError::empty_field("tags"));
        }
        for (i, tag) in self.tags.iter().enumerate() {
            if self.tags[..i].contains(tag) {
                return Err(ValidationError::inconsistent(
                    self.id.as_str(),
                    format!("duplicate tag '{}'", tag),
                ));
            }
        }
        if self.retrospective_date.is_some() && self.sealed_date.is_none() {
            return Err(ValidationError::inconsistent(
                self.id.as_str(),
                "retrospective date set without a sealed date",
            ));
        }
        let implied = DecisionStatus::from_dates(
            self.sealed_date.is_some(),
            self.retrospective_date.is_some(),
        );
        if self.status != implied {
            return Err(ValidationError::inconsistent(
                self.id.as_str(),
                format!("status is {} but dates imply {}", self.status, implied),
            ));
        }
        check_range("initialConfidence", self.initial_confidence, MAX_CONFIDENCE)?;
        check_range("stressLevel", self.stress_level, MAX_SCALE)?;
        check_range("gutFeeling", self.gut_feeling, MAX_SCALE)?;
        if let Some(conf) = self.final_confidence {
            validate_final_confidence(conf)?;
        }
        Ok(())
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed_date.is_some()
    }

    pub fn is_retrospected(&self) -> bool {
        self.retrospective_date.is_some()
    }

    /// The outcome, but only once hindsight has been recorded.
    pub fn settled_outcome(&self) -> Option<OutcomeType> {
        self.is_retrospected().then_some(self.outcome)
    }

    /// True for a retrospected decision judged the right call.
    pub fn is_right_call(&self) -> bool {
        self.settled_outcome() == Some(OutcomeType::RightCall)
    }

    /// Final confidence, falling back to the initial confidence.
    pub fn final_confidence(&self) -> f64 {
        self.final_confidence
            .unwrap_or_else(|| f64::from(self.initial_confidence))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// First tag, used as the decision's headline topic.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Number of distinct tags this decision shares with `other`.
    pub fn shared_tag_count(&self, other: &Decision) -> usize {
        let mut seen = HashSet::new();
        self.tags
            .iter()
            .filter(|t| seen.insert(t.as_str()) && other.has_tag(t))
            .count()
    }

    /// Days from framing to sealing.
    pub fn days_to_seal(&self) -> Option<f64> {
        self.sealed_date.map(|sealed| sealed.days_since(&self.date))
    }

    /// Days from sealing to retrospective.
    pub fn days_to_retrospect(&self) -> Option<f64> {
        match (self.sealed_date, self.retrospective_date) {
            (Some(sealed), Some(retro)) => Some(retro.days_since(&sealed)),
            _ => None,
        }
    }
}

/// Validates every record and rejects duplicate identifiers.
pub fn validate_all(decisions: &[Decision]) -> Result<(), ValidationError> {
    let mut ids = HashSet::new();
    for decision in decisions {
        decision.validate()?;
        if !ids.insert(decision.id.as_str()) {
            return Err(ValidationError::inconsistent(
                decision.id.as_str(),
                "identifier appears more than once",
            ));
        }
    }
    Ok(())
}

fn check_range(field: &str, value: u8, max: u8) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::out_of_range(
            field,
            0,
            i32::from(max),
            i32::from(value),
        ));
    }
    Ok(())
}

fn validate_final_confidence(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(0.0..=f64::from(MAX_CONFIDENCE)).contains(&value) {
        return Err(ValidationError::out_of_range(
            "finalConfidence",
            0,
            i32::from(MAX_CONFIDENCE),
            value as i32,
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;
