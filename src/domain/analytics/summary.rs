//! Summary Statistics - scalar KPIs over a decision set.

use serde::{Deserialize, Serialize};

use super::tally::OrderedTally;
use crate::domain::decision::Decision;
use crate::domain::foundation::{round_half_up, Percentage};

/// Placeholder name when no tag qualifies.
pub const NO_PATH: &str = "-";

/// Tags need strictly more occurrences than this to be ranked by success.
pub const MIN_OCCURRENCES_FOR_SUCCESS: usize = 2;

/// A tag with its success rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRate {
    pub name: String,
    pub rate: Percentage,
}

impl Default for PathRate {
    fn default() -> Self {
        Self {
            name: NO_PATH.to_string(),
            rate: Percentage::ZERO,
        }
    }
}

/// A tag with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCount {
    pub name: String,
    pub count: usize,
}

impl Default for PathCount {
    fn default() -> Self {
        Self {
            name: NO_PATH.to_string(),
            count: 0,
        }
    }
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_decisions: usize,
    pub sealed_count: usize,
    pub seal_rate: Percentage,
    pub retrospect_count: usize,
    pub completion_rate: Percentage,
    /// Mean framing -> sealing time in days, one decimal.
    pub avg_days_to_seal: f64,
    /// Mean sealing -> retrospective time in days, one decimal.
    pub avg_days_to_retrospect: f64,
    pub most_common_path: String,
    pub most_successful_path: PathRate,
    pub path_with_most_decisions: PathCount,
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self::compute(&[])
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct TagOutcomes {
    total: usize,
    success: usize,
}

impl SummaryStats {
    /// Computes all KPIs in one pass over the decisions plus one over tags.
    ///
    /// # Edge Cases
    /// - Empty input: every count and rate is 0, paths are `-`
    /// - No tag with more than two occurrences: `mostSuccessfulPath` is `{-, 0}`
    pub fn compute(decisions: &[Decision]) -> Self {
        let total_decisions = decisions.len();
        let seal_days: Vec<f64> = decisions.iter().filter_map(Decision::days_to_seal).collect();
        let retro_days: Vec<f64> = decisions
            .iter()
            .filter_map(Decision::days_to_retrospect)
            .collect();
        let sealed_count = decisions.iter().filter(|d| d.is_sealed()).count();
        let retrospect_count = decisions.iter().filter(|d| d.is_retrospected()).count();

        let mut tags: OrderedTally<TagOutcomes> = OrderedTally::new();
        for decision in decisions {
            for tag in &decision.tags {
                let entry = tags.entry(tag);
                entry.total += 1;
                if decision.is_right_call() {
                    entry.success += 1;
                }
            }
        }

        let mut path_with_most_decisions = PathCount::default();
        let mut most_successful_path = PathRate::default();
        let mut best_rate = -1.0_f64;
        for (tag, outcomes) in tags.iter() {
            if outcomes.total > path_with_most_decisions.count {
                path_with_most_decisions = PathCount {
                    name: tag.to_string(),
                    count: outcomes.total,
                };
            }
            let rate = outcomes.success as f64 / outcomes.total as f64;
            if outcomes.total > MIN_OCCURRENCES_FOR_SUCCESS && rate > best_rate {
                best_rate = rate;
                most_successful_path = PathRate {
                    name: tag.to_string(),
                    rate: Percentage::ratio(outcomes.success, outcomes.total),
                };
            }
        }

        Self {
            total_decisions,
            sealed_count,
            seal_rate: Percentage::ratio(sealed_count, total_decisions),
            retrospect_count,
            completion_rate: Percentage::ratio(retrospect_count, total_decisions),
            avg_days_to_seal: mean_days(&seal_days),
            avg_days_to_retrospect: mean_days(&retro_days),
            most_common_path: path_with_most_decisions.name.clone(),
            most_successful_path,
            path_with_most_decisions,
        }
    }
}

/// Mean rounded to one decimal place; 0 for an empty slice.
fn mean_days(days: &[f64]) -> f64 {
    if days.is_empty() {
        return 0.0;
    }
    let mean = days.iter().sum::<f64>() / days.len() as f64;
    round_half_up(mean * 10.0) / 10.0
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
