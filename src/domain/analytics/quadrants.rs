//! Conviction Quadrants - logic (confidence) versus gut, with win rates.

use serde::{Deserialize, Serialize};

use crate::domain::decision::Decision;
use crate::domain::foundation::Percentage;

/// Initial confidence at or above this counts as high logic.
pub const HIGH_LOGIC_THRESHOLD: u8 = 65;

/// Gut feeling at or above this counts as high gut.
pub const HIGH_GUT_THRESHOLD: u8 = 6;

/// One of the four logic/gut combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    /// High logic, high gut.
    Full,
    /// High logic, low gut.
    Data,
    /// Low logic, high gut.
    Intuition,
    /// Low logic, low gut.
    Gamble,
}

impl Quadrant {
    pub fn classify(decision: &Decision) -> Self {
        let high_logic = decision.initial_confidence >= HIGH_LOGIC_THRESHOLD;
        let high_gut = decision.gut_feeling >= HIGH_GUT_THRESHOLD;
        match (high_logic, high_gut) {
            (true, true) => Quadrant::Full,
            (true, false) => Quadrant::Data,
            (false, true) => Quadrant::Intuition,
            (false, false) => Quadrant::Gamble,
        }
    }
}

/// Totals for one quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantStats {
    pub total: usize,
    pub wins: usize,
    /// 0 when the quadrant is empty; see [`QuadrantStats::has_data`].
    pub win_rate: Percentage,
}

impl QuadrantStats {
    /// False for an empty bucket, which is shown as "—" rather than 0%.
    pub fn has_data(&self) -> bool {
        self.total > 0
    }

    fn record(&mut self, win: bool) {
        self.total += 1;
        if win {
            self.wins += 1;
        }
        self.win_rate = Percentage::ratio(self.wins, self.total);
    }
}

/// All four buckets. Every decision lands in exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvictionQuadrants {
    pub full: QuadrantStats,
    pub data: QuadrantStats,
    pub intuition: QuadrantStats,
    pub gamble: QuadrantStats,
}

impl ConvictionQuadrants {
    pub fn get(&self, quadrant: Quadrant) -> &QuadrantStats {
        match quadrant {
            Quadrant::Full => &self.full,
            Quadrant::Data => &self.data,
            Quadrant::Intuition => &self.intuition,
            Quadrant::Gamble => &self.gamble,
        }
    }

    fn get_mut(&mut self, quadrant: Quadrant) -> &mut QuadrantStats {
        match quadrant {
            Quadrant::Full => &mut self.full,
            Quadrant::Data => &mut self.data,
            Quadrant::Intuition => &mut self.intuition,
            Quadrant::Gamble => &mut self.gamble,
        }
    }

    /// Sum of all bucket totals.
    pub fn total(&self) -> usize {
        self.full.total + self.data.total + self.intuition.total + self.gamble.total
    }
}

/// Buckets decisions by conviction; wins are retrospected right calls.
pub fn conviction_quadrants(decisions: &[Decision]) -> ConvictionQuadrants {
    let mut quadrants = ConvictionQuadrants::default();
    for decision in decisions {
        quadrants
            .get_mut(Quadrant::classify(decision))
            .record(decision.is_right_call());
    }
    quadrants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::fixtures::DecisionFixture;
    use crate::domain::decision::OutcomeType::{RightCall, WrongCall};

    #[test]
    fn high_confidence_high_gut_is_full() {
        let decision = DecisionFixture::new("1").confidence(70).gut(8).build();
        assert_eq!(Quadrant::classify(&decision), Quadrant::Full);
    }

    #[test]
    fn high_confidence_low_gut_is_data() {
        let decision = DecisionFixture::new("1").confidence(70).gut(3).build();
        assert_eq!(Quadrant::classify(&decision), Quadrant::Data);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let at_edge = DecisionFixture::new("1").confidence(65).gut(6).build();
        let below = DecisionFixture::new("2").confidence(64).gut(5).build();
        let gut_only = DecisionFixture::new("3").confidence(64).gut(6).build();

        assert_eq!(Quadrant::classify(&at_edge), Quadrant::Full);
        assert_eq!(Quadrant::classify(&below), Quadrant::Gamble);
        assert_eq!(Quadrant::classify(&gut_only), Quadrant::Intuition);
    }

    #[test]
    fn win_rates_per_bucket() {
        let decisions = vec![
            DecisionFixture::new("1").confidence(80).gut(9).outcome(RightCall).build(),
            DecisionFixture::new("2").confidence(80).gut(9).outcome(WrongCall).build(),
            DecisionFixture::new("3").confidence(80).gut(9).outcome(RightCall).build(),
            DecisionFixture::new("4").confidence(30).gut(2).outcome(WrongCall).build(),
        ];

        let quadrants = conviction_quadrants(&decisions);
        assert_eq!(quadrants.full.total, 3);
        assert_eq!(quadrants.full.wins, 2);
        assert_eq!(quadrants.full.win_rate.value(), 67);
        assert_eq!(quadrants.gamble.win_rate, Percentage::ZERO);
        assert!(quadrants.gamble.has_data());
        assert!(!quadrants.data.has_data());
        assert_eq!(quadrants.total(), decisions.len());
    }

    #[test]
    fn empty_bucket_has_zero_rate() {
        let quadrants = conviction_quadrants(&[]);
        for quadrant in [Quadrant::Full, Quadrant::Data, Quadrant::Intuition, Quadrant::Gamble] {
            let stats = quadrants.get(quadrant);
            assert_eq!(stats.win_rate, Percentage::ZERO);
            assert!(!stats.has_data());
        }
    }

    #[test]
    fn serializes_bucket_names() {
        let json = serde_json::to_value(conviction_quadrants(&[])).unwrap();
        for key in ["full", "data", "intuition", "gamble"] {
            assert_eq!(json[key]["winRate"], 0);
        }
    }
}
