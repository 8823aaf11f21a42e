//! Test builders for decision records.

use crate::domain::decision::{Decision, OutcomeType};
use crate::domain::foundation::{DecisionId, Timestamp};

pub(crate) fn day(y: i32, m: u32, d: u32) -> Timestamp {
    Timestamp::from_ymd(y, m, d).unwrap()
}

/// Fluent builder that goes through the real lifecycle transitions.
pub(crate) struct DecisionFixture {
    id: String,
    date: Timestamp,
    confidence: u8,
    stress: u8,
    gut: u8,
    tags: Vec<String>,
    sealed: Option<Timestamp>,
    retro: Option<(Timestamp, OutcomeType)>,
}

impl DecisionFixture {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            date: day(2024, 1, 1),
            confidence: 60,
            stress: 5,
            gut: 5,
            tags: vec!["General".to_string()],
            sealed: None,
            retro: None,
        }
    }

    pub(crate) fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub(crate) fn framed_on(mut self, date: Timestamp) -> Self {
        self.date = date;
        self
    }

    pub(crate) fn confidence(mut self, confidence: u8) -> Self {
        self.confidence = confidence;
        self
    }

    pub(crate) fn gut(mut self, gut: u8) -> Self {
        self.gut = gut;
        self
    }

    pub(crate) fn stress(mut self, stress: u8) -> Self {
        self.stress = stress;
        self
    }

    pub(crate) fn sealed_on(mut self, date: Timestamp) -> Self {
        self.sealed = Some(date);
        self
    }

    /// Seals on the framing date (if not sealed yet) and retrospects a day later.
    pub(crate) fn outcome(mut self, outcome: OutcomeType) -> Self {
        let sealed = *self.sealed.get_or_insert(self.date);
        self.retro = Some((sealed.plus_days(1), outcome));
        self
    }

    pub(crate) fn retrospected_on(mut self, date: Timestamp, outcome: OutcomeType) -> Self {
        self.sealed.get_or_insert(self.date);
        self.retro = Some((date, outcome));
        self
    }

    pub(crate) fn build(self) -> Decision {
        let mut decision = Decision::frame(
            DecisionId::new(self.id).unwrap(),
            "Fixture decision",
            self.date,
            self.confidence,
            self.stress,
            self.gut,
            self.tags,
        )
        .unwrap();
        if let Some(sealed) = self.sealed {
            decision = decision.seal(sealed).unwrap();
        }
        if let Some((at, outcome)) = self.retro {
            decision = decision.retrospect(at, outcome, None).unwrap();
        }
        decision
    }
}

/// `n` retrospected decisions tagged `tag`, ids `{tag}-{i}`, with the given outcomes.
pub(crate) fn tagged_with_outcomes(tag: &str, outcomes: &[OutcomeType]) -> Vec<Decision> {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| {
            DecisionFixture::new(&format!("{}-{}", tag, i))
                .tags(&[tag])
                .outcome(*outcome)
                .build()
        })
        .collect()
}
