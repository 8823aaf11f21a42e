//! Success rates grouped by tag, confidence band or stress band.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::tally::OrderedTally;
use crate::domain::decision::Decision;
use crate::domain::foundation::{Percentage, ValidationError};

/// Bars shown in the success-rate chart.
pub const MAX_BARS: usize = 7;

/// How decisions are bucketed for the success-rate chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    #[default]
    Tag,
    Confidence,
    Stress,
}

impl Grouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grouping::Tag => "tag",
            Grouping::Confidence => "confidence",
            Grouping::Stress => "stress",
        }
    }

    /// Bucket labels for one decision. Tag grouping yields every tag.
    fn buckets<'a>(&self, decision: &'a Decision) -> Vec<&'a str> {
        match self {
            Grouping::Tag => decision.tags.iter().map(String::as_str).collect(),
            Grouping::Confidence => vec![confidence_band(decision.initial_confidence)],
            Grouping::Stress => vec![stress_band(decision.stress_level)],
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Grouping {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag" => Ok(Grouping::Tag),
            "confidence" => Ok(Grouping::Confidence),
            "stress" => Ok(Grouping::Stress),
            other => Err(ValidationError::invalid_format(
                "grouping",
                format!("expected tag, confidence or stress, got '{}'", other),
            )),
        }
    }
}

fn confidence_band(confidence: u8) -> &'static str {
    if confidence > 70 {
        "High (>70%)"
    } else if confidence < 40 {
        "Low (<40%)"
    } else {
        "Medium (40-70%)"
    }
}

fn stress_band(stress: u8) -> &'static str {
    if stress > 7 {
        "High (8-10)"
    } else if stress < 4 {
        "Low (0-3)"
    } else {
        "Medium (4-7)"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessRateBar {
    pub name: String,
    pub rate: Percentage,
    pub count: usize,
}

#[derive(Default)]
struct BarCounts {
    total: usize,
    right: usize,
}

/// Highest success rates first, at most [`MAX_BARS`] bars.
///
/// Equal rates keep first-seen order. Successes are retrospected right calls.
pub fn success_rates(decisions: &[Decision], grouping: Grouping) -> Vec<SuccessRateBar> {
    let mut tally: OrderedTally<BarCounts> = OrderedTally::new();
    for decision in decisions {
        let right = decision.is_right_call();
        for bucket in grouping.buckets(decision) {
            let counts = tally.entry(bucket);
            counts.total += 1;
            if right {
                counts.right += 1;
            }
        }
    }

    let mut bars: Vec<SuccessRateBar> = tally
        .iter()
        .map(|(name, c)| SuccessRateBar {
            name: name.to_string(),
            rate: Percentage::ratio(c.right, c.total),
            count: c.total,
        })
        .collect();

    bars.sort_by(|a, b| b.rate.cmp(&a.rate));
    bars.truncate(MAX_BARS);
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::fixtures::{tagged_with_outcomes, DecisionFixture};
    use crate::domain::decision::OutcomeType::{RightCall, WrongCall};

    #[test]
    fn tag_bars_sorted_by_rate() {
        let mut decisions = tagged_with_outcomes("Finance", &[WrongCall, RightCall]);
        decisions.extend(tagged_with_outcomes("Hiring", &[RightCall, RightCall, WrongCall]));

        let bars = success_rates(&decisions, Grouping::Tag);
        assert_eq!(bars[0].name, "Hiring");
        assert_eq!(bars[0].rate.value(), 67);
        assert_eq!(bars[0].count, 3);
        assert_eq!(bars[1].name, "Finance");
        assert_eq!(bars[1].rate.value(), 50);
    }

    #[test]
    fn confidence_bands_use_strict_bounds() {
        let decisions = vec![
            DecisionFixture::new("1").confidence(71).outcome(RightCall).build(),
            DecisionFixture::new("2").confidence(70).build(),
            DecisionFixture::new("3").confidence(40).build(),
            DecisionFixture::new("4").confidence(39).build(),
        ];

        let bars = success_rates(&decisions, Grouping::Confidence);
        let names: Vec<&str> = bars.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["High (>70%)", "Medium (40-70%)", "Low (<40%)"]);
        assert_eq!(bars[1].count, 2);
    }

    #[test]
    fn stress_bands_use_strict_bounds() {
        let decisions = vec![
            DecisionFixture::new("1").stress(8).build(),
            DecisionFixture::new("2").stress(7).build(),
            DecisionFixture::new("3").stress(4).build(),
            DecisionFixture::new("4").stress(3).build(),
        ];

        let bars = success_rates(&decisions, Grouping::Stress);
        // All rates are zero, so first-seen order is preserved.
        let names: Vec<&str> = bars.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["High (8-10)", "Medium (4-7)", "Low (0-3)"]);
        assert_eq!(bars[1].count, 2);
    }

    #[test]
    fn caps_the_number_of_bars() {
        let decisions: Vec<Decision> = (0..10)
            .map(|i| {
                let tag = format!("T{}", i);
                DecisionFixture::new(&i.to_string()).tags(&[tag.as_str()]).build()
            })
            .collect();

        let bars = success_rates(&decisions, Grouping::Tag);
        assert_eq!(bars.len(), MAX_BARS);
        assert_eq!(bars[0].name, "T0");
    }

    #[test]
    fn parses_grouping_names() {
        assert_eq!("stress".parse::<Grouping>().unwrap(), Grouping::Stress);
        assert!("mood".parse::<Grouping>().is_err());
        assert_eq!(Grouping::default(), Grouping::Tag);
    }

    #[test]
    fn empty_input_gives_no_bars() {
        assert!(success_rates(&[], Grouping::Confidence).is_empty());
    }
}
