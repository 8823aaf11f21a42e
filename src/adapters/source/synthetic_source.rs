//! Synthetic Decision Source
//!
//! Generates a plausible decision journal over the 90 days before an
//! anchor instant. With a fixed seed and anchor the output is identical
//! across runs.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::domain::decision::{Decision, OutcomeType};
use crate::domain::foundation::{DecisionId, Timestamp, ValidationError};
use crate::ports::{DecisionSource, SourceError};

/// Tags drawn for generated decisions.
pub const TAG_POOL: [&str; 7] = [
    "Strategy",
    "Hiring",
    "Product",
    "Engineering",
    "Marketing",
    "Finance",
    "Personal",
];

const DAY_MS: i64 = 86_400_000;
const HISTORY_DAYS: i64 = 90;
const MAX_DAYS_TO_SEAL: i64 = 7;
const MAX_DAYS_TO_RETROSPECT: i64 = 30;
const SEAL_PROBABILITY: f64 = 0.8;
const RETROSPECT_PROBABILITY: f64 = 0.7;

/// Seedable generator of decision journals
#[derive(Debug, Clone)]
pub struct SyntheticDecisionSource {
    count: usize,
    seed: Option<u64>,
    anchor: Option<Timestamp>,
}

impl SyntheticDecisionSource {
    /// Generator producing `count` decisions per load, freshly randomised.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            anchor: None,
        }
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fixes "now"; otherwise each load uses the current time.
    pub fn anchored_at(mut self, now: Timestamp) -> Self {
        self.anchor = Some(now);
        self
    }

    /// Generates the journal, sorted by framing date.
    pub fn generate(&self) -> Result<Vec<Decision>, ValidationError> {
        let now = self.anchor.unwrap_or_else(Timestamp::now);
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut decisions = (0..self.count)
            .map(|i| generate_one(&mut rng, i, now))
            .collect::<Result<Vec<_>, _>>()?;
        decisions.sort_by_key(|d| d.date);
        Ok(decisions)
    }
}

fn generate_one(rng: &mut StdRng, index: usize, now: Timestamp) -> Result<Decision, ValidationError> {
    let framed = now
        .plus_millis(-rng.gen_range(0..HISTORY_DAYS * DAY_MS))
        .start_of_day();
    let sealed = rng
        .gen_bool(SEAL_PROBABILITY)
        .then(|| framed.plus_millis(rng.gen_range(0..=MAX_DAYS_TO_SEAL * DAY_MS)).start_of_day());
    let retrospected = match sealed {
        Some(sealed) if rng.gen_bool(RETROSPECT_PROBABILITY) => {
            let at = sealed
                .plus_millis(rng.gen_range(0..=MAX_DAYS_TO_RETROSPECT * DAY_MS))
                .start_of_day();
            let outcome = OutcomeType::ALL[rng.gen_range(0..OutcomeType::ALL.len())];
            Some((at, outcome))
        }
        _ => None,
    };

    let initial_confidence: u8 = rng.gen_range(50..90);
    let final_confidence = retrospected.map(|(_, outcome)| {
        let initial = f64::from(initial_confidence);
        match outcome {
            OutcomeType::RightCall => (initial + rng.gen_range(0.0..20.0)).min(100.0),
            OutcomeType::WrongCall => (initial - rng.gen_range(0.0..30.0)).max(0.0),
            OutcomeType::Unclear => initial,
        }
    });
    let stress_level: u8 = rng.gen_range(0..10);
    let gut_feeling: u8 = rng.gen_range(0..10);

    let mut tags: Vec<String> = Vec::with_capacity(2);
    for _ in 0..rng.gen_range(1..=2) {
        let tag = TAG_POOL[rng.gen_range(0..TAG_POOL.len())];
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    let title = format!("Decision #{}: {} Initiative", index + 1, tags[0]);
    let mut decision = Decision::frame(
        DecisionId::new(format!("dec-{}", index))?,
        title,
        framed,
        initial_confidence,
        stress_level,
        gut_feeling,
        tags,
    )?;
    if let Some(at) = sealed {
        decision = decision.seal(at)?;
    }
    if let Some((at, outcome)) = retrospected {
        decision = decision.retrospect(at, outcome, final_confidence)?;
    }
    Ok(decision)
}

#[async_trait]
impl DecisionSource for SyntheticDecisionSource {
    async fn load_decisions(&self) -> Result<Vec<Decision>, SourceError> {
        let decisions = self.generate()?;
        debug!(count = decisions.len(), seed = ?self.seed, "Generated synthetic decisions");
        Ok(decisions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::{validate_all, DecisionStatus};

    fn anchor() -> Timestamp {
        Timestamp::parse("2024-06-30T12:00:00Z").unwrap()
    }

    fn seeded(count: usize, seed: u64) -> Vec<Decision> {
        SyntheticDecisionSource::new(count)
            .with_seed(seed)
            .anchored_at(anchor())
            .generate()
            .unwrap()
    }

    #[test]
    fn generates_requested_count() {
        assert_eq!(seeded(50, 1).len(), 50);
        assert!(seeded(0, 1).is_empty());
    }

    #[test]
    fn same_seed_and_anchor_reproduce_output() {
        assert_eq!(seeded(40, 42), seeded(40, 42));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(seeded(40, 1), seeded(40, 2));
    }

    #[test]
    fn output_satisfies_record_invariants() {
        let decisions = seeded(200, 7);
        validate_all(&decisions).unwrap();

        for d in &decisions {
            assert!((50..90).contains(&d.initial_confidence));
            assert!(d.stress_level < 10);
            assert!(d.gut_feeling < 10);
            assert!(!d.tags.is_empty() && d.tags.len() <= 2);
            assert!(d.tags.iter().all(|t| TAG_POOL.contains(&t.as_str())));
            if d.status != DecisionStatus::Retrospected {
                assert_eq!(d.outcome, OutcomeType::Unclear);
            }
        }
    }

    #[test]
    fn dates_fall_within_history_window_and_order() {
        let decisions = seeded(100, 3);
        let earliest = anchor().minus_days(HISTORY_DAYS + 1);

        for d in &decisions {
            assert!(!d.date.is_before(&earliest));
            assert!(!anchor().is_before(&d.date));
            if let Some(days) = d.days_to_seal() {
                assert!((0.0..=7.0).contains(&days));
            }
            if let Some(days) = d.days_to_retrospect() {
                assert!((0.0..=30.0).contains(&days));
            }
        }
        assert!(decisions.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn titles_and_ids_follow_index() {
        let decisions = seeded(10, 5);
        let first = decisions.iter().find(|d| d.id.as_str() == "dec-0").unwrap();
        assert_eq!(
            first.title,
            format!("Decision #1: {} Initiative", first.tags[0])
        );
    }

    #[test]
    fn final_confidence_drifts_with_outcome() {
        for d in seeded(200, 11) {
            let initial = f64::from(d.initial_confidence);
            match d.settled_outcome() {
                Some(OutcomeType::RightCall) => assert!(d.final_confidence() >= initial),
                Some(OutcomeType::WrongCall) => assert!(d.final_confidence() <= initial),
                _ => assert_eq!(d.final_confidence(), initial),
            }
        }
    }

    #[tokio::test]
    async fn loads_through_the_port() {
        let source = SyntheticDecisionSource::new(5).with_seed(9).anchored_at(anchor());
        let decisions = source.load_decisions().await.unwrap();
        assert_eq!(decisions.len(), 5);
    }
}
