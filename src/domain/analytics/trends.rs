//! Monthly Trends - outcome mix per framing month.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::decision::{Decision, OutcomeType};
use crate::domain::foundation::Percentage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// `YYYY-MM`, UTC.
    pub year_month: String,
    pub total: usize,
    pub right: usize,
    pub wrong: usize,
    pub unclear: usize,
    pub success_rate: Percentage,
}

#[derive(Default)]
struct MonthCounts {
    total: usize,
    right: usize,
    wrong: usize,
    unclear: usize,
}

/// One point per month that has decisions, ascending by month.
///
/// Counts the stored outcome whatever the status, so a framed decision
/// lands in `unclear`.
pub fn monthly_trends(decisions: &[Decision]) -> Vec<MonthlyTrendPoint> {
    let mut months: BTreeMap<String, MonthCounts> = BTreeMap::new();
    for decision in decisions {
        let counts = months.entry(decision.date.year_month()).or_default();
        counts.total += 1;
        match decision.outcome {
            OutcomeType::RightCall => counts.right += 1,
            OutcomeType::WrongCall => counts.wrong += 1,
            OutcomeType::Unclear => counts.unclear += 1,
        }
    }

    months
        .into_iter()
        .map(|(year_month, c)| MonthlyTrendPoint {
            year_month,
            total: c.total,
            right: c.right,
            wrong: c.wrong,
            unclear: c.unclear,
            success_rate: Percentage::ratio(c.right, c.total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::fixtures::{day, DecisionFixture};
    use crate::domain::decision::OutcomeType::{RightCall, WrongCall};

    #[test]
    fn groups_by_month_in_ascending_order() {
        let decisions = vec![
            DecisionFixture::new("1").framed_on(day(2024, 3, 5)).outcome(RightCall).build(),
            DecisionFixture::new("2").framed_on(day(2024, 1, 20)).outcome(WrongCall).build(),
            DecisionFixture::new("3").framed_on(day(2024, 3, 28)).build(),
            DecisionFixture::new("4").framed_on(day(2023, 12, 31)).outcome(RightCall).build(),
        ];

        let trends = monthly_trends(&decisions);
        let months: Vec<&str> = trends.iter().map(|p| p.year_month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);

        let march = &trends[2];
        assert_eq!(march.total, 2);
        assert_eq!(march.right, 1);
        assert_eq!(march.unclear, 1);
        assert_eq!(march.success_rate.value(), 50);
    }

    #[test]
    fn counts_raw_outcome_regardless_of_status() {
        let mut sealed = DecisionFixture::new("1").sealed_on(day(2024, 1, 2)).build();
        sealed.outcome = RightCall;

        let trends = monthly_trends(&[sealed]);
        assert_eq!(trends[0].right, 1);
        assert_eq!(trends[0].success_rate, Percentage::HUNDRED);
    }

    #[test]
    fn outcome_counts_sum_to_total() {
        let decisions = vec![
            DecisionFixture::new("1").outcome(RightCall).build(),
            DecisionFixture::new("2").outcome(WrongCall).build(),
            DecisionFixture::new("3").build(),
        ];

        for point in monthly_trends(&decisions) {
            assert_eq!(point.right + point.wrong + point.unclear, point.total);
        }
    }

    #[test]
    fn empty_input_gives_no_points() {
        assert!(monthly_trends(&[]).is_empty());
    }

    #[test]
    fn serializes_year_month_key() {
        let trends = monthly_trends(&[DecisionFixture::new("1").build()]);
        let json = serde_json::to_value(&trends[0]).unwrap();
        assert_eq!(json["yearMonth"], "2024-01");
        assert_eq!(json["successRate"], 0);
    }
}
