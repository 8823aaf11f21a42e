//! Filter Evaluator - narrows a decision list by time range, outcome and tags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::decision::{Decision, OutcomeType};
use crate::domain::foundation::{Timestamp, ValidationError};

/// How far back from "now" the framing date may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
}

impl TimeRange {
    /// Window length in days, `None` for all time.
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeRange::All => None,
            TimeRange::Last7Days => Some(7),
            TimeRange::Last30Days => Some(30),
            TimeRange::Last90Days => Some(90),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::All => "all",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Last90Days => "90d",
        }
    }
}

impl FromStr for TimeRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TimeRange::All),
            "7d" => Ok(TimeRange::Last7Days),
            "30d" => Ok(TimeRange::Last30Days),
            "90d" => Ok(TimeRange::Last90Days),
            other => Err(ValidationError::invalid_format(
                "timeRange",
                format!("'{}' is not one of all, 7d, 30d, 90d", other),
            )),
        }
    }
}

/// Outcome predicate: everything, or one stored outcome value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutcomeFilter {
    #[default]
    All,
    Only(OutcomeType),
}

impl OutcomeFilter {
    /// Compares against the raw stored outcome, not the settled one.
    pub fn matches(&self, outcome: OutcomeType) -> bool {
        match self {
            OutcomeFilter::All => true,
            OutcomeFilter::Only(wanted) => *wanted == outcome,
        }
    }
}

impl fmt::Display for OutcomeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeFilter::All => write!(f, "all"),
            OutcomeFilter::Only(outcome) => write!(f, "{}", outcome.as_str()),
        }
    }
}

impl FromStr for OutcomeFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(OutcomeFilter::All);
        }
        s.parse().map(OutcomeFilter::Only)
    }
}

impl TryFrom<String> for OutcomeFilter {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutcomeFilter> for String {
    fn from(filter: OutcomeFilter) -> Self {
        filter.to_string()
    }
}

/// Filter selection supplied by the caller. The default is the identity filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub time_range: TimeRange,
    #[serde(default)]
    pub outcome: OutcomeFilter,
    /// Keep decisions carrying any of these tags. Empty keeps everything.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FilterCriteria {
    /// True when every predicate is at its "all" setting.
    pub fn is_identity(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of active predicates; each selected tag counts once.
    pub fn active_count(&self) -> usize {
        usize::from(self.time_range != TimeRange::All)
            + usize::from(self.outcome != OutcomeFilter::All)
            + self.tags.len()
    }

    /// Evaluates all three predicates (ANDed) for one decision.
    pub fn matches(&self, decision: &Decision, now: Timestamp) -> bool {
        if let Some(days) = self.time_range.days() {
            if decision.date < now.minus_days(days) {
                return false;
            }
        }
        if !self.outcome.matches(decision.outcome) {
            return false;
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|t| decision.has_tag(t)) {
            return false;
        }
        true
    }

    /// Returns the matching decisions in input order.
    pub fn apply(&self, decisions: &[Decision], now: Timestamp) -> Vec<Decision> {
        decisions
            .iter()
            .filter(|d| self.matches(d, now))
            .cloned()
            .collect()
    }
}

/// Distinct tags across all decisions, sorted ascending.
pub fn available_tags(decisions: &[Decision]) -> Vec<String> {
    decisions
        .iter()
        .flat_map(|d| d.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
