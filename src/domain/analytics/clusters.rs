//! Tag Clusters - per-tag volume, success and conviction with a verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tally::OrderedTally;
use crate::domain::decision::Decision;
use crate::domain::foundation::{round_half_up, Percentage};

/// Clusters shown on the dashboard.
pub const MAX_CLUSTERS: usize = 6;

/// Qualitative archetype of a tag, by volume and success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Mastery")]
    Mastery,
    #[serde(rename = "Trouble Spot")]
    TroubleSpot,
    #[serde(rename = "Hidden Gem")]
    HiddenGem,
    #[serde(rename = "Risky")]
    Risky,
    #[serde(rename = "Routine")]
    Routine,
    #[serde(rename = "Developing")]
    Developing,
}

impl Verdict {
    /// Applies the verdict rules in priority order; the first match wins.
    pub fn classify(count: usize, success_rate: Percentage) -> Self {
        let rate = success_rate.value();
        if count > 8 && rate > 75 {
            Verdict::Mastery
        } else if count > 8 && rate < 40 {
            Verdict::TroubleSpot
        } else if rate > 80 {
            Verdict::HiddenGem
        } else if rate < 40 {
            Verdict::Risky
        } else if count > 10 {
            Verdict::Routine
        } else {
            Verdict::Developing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Mastery => "Mastery",
            Verdict::TroubleSpot => "Trouble Spot",
            Verdict::HiddenGem => "Hidden Gem",
            Verdict::Risky => "Risky",
            Verdict::Routine => "Routine",
            Verdict::Developing => "Developing",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Average-confidence band of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConvictionLevel {
    High,
    Medium,
    Low,
}

impl ConvictionLevel {
    pub fn from_confidence(avg_confidence: u8) -> Self {
        if avg_confidence > 80 {
            ConvictionLevel::High
        } else if avg_confidence > 50 {
            ConvictionLevel::Medium
        } else {
            ConvictionLevel::Low
        }
    }
}

/// Short coaching hint attached to a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterInsight {
    StrongIntuition,
    ReviewFailures,
    KeepTracking,
}

impl ClusterInsight {
    pub fn from_success_rate(success_rate: Percentage) -> Self {
        let rate = success_rate.value();
        if rate >= 80 {
            ClusterInsight::StrongIntuition
        } else if rate <= 40 {
            ClusterInsight::ReviewFailures
        } else {
            ClusterInsight::KeepTracking
        }
    }
}

/// Aggregate for a single tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCluster {
    pub name: String,
    pub count: usize,
    pub success_rate: Percentage,
    /// Rounded mean of initial confidence, 0-100.
    pub avg_confidence: u8,
    pub verdict: Verdict,
    pub conviction: ConvictionLevel,
    pub insight: ClusterInsight,
}

#[derive(Debug, Default)]
struct ClusterAccumulator {
    total: usize,
    right: usize,
    confidence_sum: u64,
}

/// Top [`MAX_CLUSTERS`] tags by occurrence count, descending.
///
/// Equal counts keep first-seen order. An empty input gives an empty list,
/// which callers present as a "no data" state.
pub fn tag_clusters(decisions: &[Decision]) -> Vec<TagCluster> {
    let mut tally: OrderedTally<ClusterAccumulator> = OrderedTally::new();
    for decision in decisions {
        for tag in &decision.tags {
            let acc = tally.entry(tag);
            acc.total += 1;
            acc.confidence_sum += u64::from(decision.initial_confidence);
            if decision.is_right_call() {
                acc.right += 1;
            }
        }
    }

    let mut clusters: Vec<TagCluster> = tally
        .into_entries()
        .into_iter()
        .map(|(name, acc)| {
            let success_rate = Percentage::ratio(acc.right, acc.total);
            let avg_confidence =
                round_half_up(acc.confidence_sum as f64 / acc.total as f64).min(100.0) as u8;
            TagCluster {
                name,
                count: acc.total,
                success_rate,
                avg_confidence,
                verdict: Verdict::classify(acc.total, success_rate),
                conviction: ConvictionLevel::from_confidence(avg_confidence),
                insight: ClusterInsight::from_success_rate(success_rate),
            }
        })
        .collect();

    clusters.sort_by(|a, b| b.count.cmp(&a.count));
    clusters.truncate(MAX_CLUSTERS);
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::fixtures::{tagged_with_outcomes, DecisionFixture};
    use crate::domain::decision::OutcomeType::{RightCall, Unclear, WrongCall};

    fn pct(value: u8) -> Percentage {
        Percentage::new(value)
    }

    #[test]
    fn hiring_cluster_scenario() {
        let decisions =
            tagged_with_outcomes("Hiring", &[RightCall, RightCall, WrongCall, Unclear]);

        let clusters = tag_clusters(&decisions);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].name, "Hiring");
        assert_eq!(clusters[0].count, 4);
        assert_eq!(clusters[0].success_rate.value(), 50);
    }

    #[test]
    fn verdict_priority_prefers_mastery_over_hidden_gem() {
        assert_eq!(Verdict::classify(9, pct(80)), Verdict::Mastery);
        assert_eq!(Verdict::classify(8, pct(81)), Verdict::HiddenGem);
    }

    #[test]
    fn verdict_covers_every_rule() {
        assert_eq!(Verdict::classify(9, pct(39)), Verdict::TroubleSpot);
        assert_eq!(Verdict::classify(3, pct(39)), Verdict::Risky);
        assert_eq!(Verdict::classify(11, pct(60)), Verdict::Routine);
        assert_eq!(Verdict::classify(5, pct(60)), Verdict::Developing);
        // Boundaries are strict.
        assert_eq!(Verdict::classify(9, pct(75)), Verdict::Developing);
        assert_eq!(Verdict::classify(4, pct(40)), Verdict::Developing);
        assert_eq!(Verdict::classify(10, pct(50)), Verdict::Developing);
    }

    #[test]
    fn verdict_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Verdict::TroubleSpot).unwrap(),
            "\"Trouble Spot\""
        );
    }

    #[test]
    fn keeps_top_six_by_count_with_stable_ties() {
        let mut decisions = Vec::new();
        let tags = ["A", "B", "C", "D", "E", "F", "G"];
        for (i, tag) in tags.iter().enumerate() {
            // A-F tie at one occurrence each; G leads with three.
            let repeats = if *tag == "G" { 3 } else { 1 };
            for r in 0..repeats {
                decisions.push(
                    DecisionFixture::new(&format!("{}-{}", i, r))
                        .tags(&[*tag])
                        .build(),
                );
            }
        }

        let names: Vec<String> = tag_clusters(&decisions).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["G", "A", "B", "C", "D", "E"]);
    }

    #[test]
    fn average_confidence_is_rounded_mean() {
        let decisions = vec![
            DecisionFixture::new("1").tags(&["Product"]).confidence(60).build(),
            DecisionFixture::new("2").tags(&["Product"]).confidence(65).build(),
        ];

        let cluster = &tag_clusters(&decisions)[0];
        assert_eq!(cluster.avg_confidence, 63);
        assert_eq!(cluster.conviction, ConvictionLevel::Medium);
    }

    #[test]
    fn multi_tag_decision_counts_toward_each_tag() {
        let decisions = vec![DecisionFixture::new("1")
            .tags(&["Product", "Engineering"])
            .outcome(RightCall)
            .build()];

        let clusters = tag_clusters(&decisions);
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| c.count == 1 && c.success_rate.value() == 100));
        assert!(clusters.iter().all(|c| c.insight == ClusterInsight::StrongIntuition));
    }

    #[test]
    fn empty_input_gives_no_clusters() {
        assert!(tag_clusters(&[]).is_empty());
    }

    #[test]
    fn conviction_and_insight_bands() {
        assert_eq!(ConvictionLevel::from_confidence(81), ConvictionLevel::High);
        assert_eq!(ConvictionLevel::from_confidence(80), ConvictionLevel::Medium);
        assert_eq!(ConvictionLevel::from_confidence(50), ConvictionLevel::Low);
        assert_eq!(ClusterInsight::from_success_rate(pct(40)), ClusterInsight::ReviewFailures);
        assert_eq!(ClusterInsight::from_success_rate(pct(41)), ClusterInsight::KeepTracking);
    }

    #[test]
    fn serializes_cluster_with_wire_names() {
        let clusters = tag_clusters(&tagged_with_outcomes("Hiring", &[RightCall]));
        let json = serde_json::to_value(&clusters[0]).unwrap();
        assert_eq!(json["successRate"], 100);
        assert_eq!(json["avgConfidence"], 60);
        assert_eq!(json["verdict"], "Hidden Gem");
    }
}
