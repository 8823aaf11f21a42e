//! Key Insights - headline callouts derived from the summary.

use serde::{Deserialize, Serialize};

use super::summary::{PathCount, PathRate, SummaryStats};
use crate::domain::foundation::Percentage;

/// Seal rate the workflow aims for.
pub const SEAL_RATE_TARGET: u8 = 80;

/// Completion rate below which follow-through needs attention.
pub const COMPLETION_ATTENTION_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowHealth {
    Healthy,
    Warning,
    Critical,
}

impl WorkflowHealth {
    /// Healthy at target, warning within 80% of target, critical below.
    pub fn assess(seal_rate: Percentage, target: u8) -> Self {
        let rate = u32::from(seal_rate.value());
        let target = u32::from(target);
        if rate >= target {
            WorkflowHealth::Healthy
        } else if rate * 10 >= target * 8 {
            WorkflowHealth::Warning
        } else {
            WorkflowHealth::Critical
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowInsight {
    pub seal_rate: Percentage,
    pub target: u8,
    pub health: WorkflowHealth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusArea {
    pub completion_rate: Percentage,
    pub needs_attention: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInsights {
    pub best_path: PathRate,
    pub most_frequent: PathCount,
    pub workflow_health: WorkflowInsight,
    pub focus_area: FocusArea,
}

impl KeyInsights {
    pub fn from_stats(stats: &SummaryStats) -> Self {
        Self {
            best_path: stats.most_successful_path.clone(),
            most_frequent: stats.path_with_most_decisions.clone(),
            workflow_health: WorkflowInsight {
                seal_rate: stats.seal_rate,
                target: SEAL_RATE_TARGET,
                health: WorkflowHealth::assess(stats.seal_rate, SEAL_RATE_TARGET),
            },
            focus_area: FocusArea {
                completion_rate: stats.completion_rate,
                needs_attention: stats.completion_rate.value() < COMPLETION_ATTENTION_THRESHOLD,
            },
        }
    }
}
