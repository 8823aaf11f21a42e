//! Lifecycle Flow - the frame -> seal -> retrospect funnel and its Sankey graph.

use serde::{Deserialize, Serialize};

use super::summary::SummaryStats;
use crate::domain::decision::{Decision, DecisionStatus, OutcomeType};
use crate::domain::foundation::Percentage;

/// Funnel stages in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunnelStageKind {
    Frame,
    Seal,
    Retrospect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: FunnelStageKind,
    pub count: usize,
}

/// Frame/Seal/Retrospect counts with conversion rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowFunnel {
    pub stages: Vec<FunnelStage>,
    /// Sealed out of framed.
    pub seal_rate: Percentage,
    /// Retrospected out of sealed.
    pub retrospect_rate: Percentage,
    pub avg_days_to_seal: f64,
    pub avg_days_to_retrospect: f64,
}

impl FlowFunnel {
    /// Repackages the summary counts and adds the retrospect-of-sealed rate.
    pub fn from_stats(stats: &SummaryStats) -> Self {
        Self {
            stages: vec![
                FunnelStage {
                    stage: FunnelStageKind::Frame,
                    count: stats.total_decisions,
                },
                FunnelStage {
                    stage: FunnelStageKind::Seal,
                    count: stats.sealed_count,
                },
                FunnelStage {
                    stage: FunnelStageKind::Retrospect,
                    count: stats.retrospect_count,
                },
            ],
            seal_rate: stats.seal_rate,
            retrospect_rate: Percentage::ratio(stats.retrospect_count, stats.sealed_count),
            avg_days_to_seal: stats.avg_days_to_seal,
            avg_days_to_retrospect: stats.avg_days_to_retrospect,
        }
    }

    pub fn count(&self, stage: FunnelStageKind) -> usize {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.count)
            .unwrap_or(0)
    }
}

/// Sankey node names, indexed by [`FlowLink::source`] / [`FlowLink::target`].
pub const FLOW_NODE_NAMES: [&str; 8] = [
    "Framed",
    "Sealed",
    "Dropped (Frame)",
    "Retrospected",
    "Dropped (Seal)",
    "Right Call",
    "Wrong Call",
    "Unclear",
];

const FRAMED: usize = 0;
const SEALED: usize = 1;
const DROPPED_FRAME: usize = 2;
const RETROSPECTED: usize = 3;
const DROPPED_SEAL: usize = 4;
const RIGHT_CALL: usize = 5;
const WRONG_CALL: usize = 6;
const UNCLEAR: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: usize,
}

/// Sankey graph of the lifecycle, ending in the three outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowData {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl FlowData {
    /// Sum of link values entering `node`.
    pub fn inflow(&self, node: usize) -> usize {
        self.links.iter().filter(|l| l.target == node).map(|l| l.value).sum()
    }

    /// Sum of link values leaving `node`.
    pub fn outflow(&self, node: usize) -> usize {
        self.links.iter().filter(|l| l.source == node).map(|l| l.value).sum()
    }
}

/// Builds the Sankey graph.
///
/// Stage counts come from `status`. Outcome links only count retrospected
/// decisions, so each intermediate node's outflow equals its inflow.
pub fn flow_graph(decisions: &[Decision]) -> FlowData {
    let framed = decisions.len();
    let sealed = decisions
        .iter()
        .filter(|d| d.status != DecisionStatus::Framed)
        .count();
    let retrospected = decisions
        .iter()
        .filter(|d| d.status == DecisionStatus::Retrospected)
        .count();
    let settled = |outcome: OutcomeType| {
        decisions
            .iter()
            .filter(|d| d.settled_outcome() == Some(outcome))
            .count()
    };

    let link = |source, target, value| FlowLink {
        source,
        target,
        value,
    };

    FlowData {
        nodes: FLOW_NODE_NAMES
            .iter()
            .map(|name| FlowNode {
                name: name.to_string(),
            })
            .collect(),
        links: vec![
            link(FRAMED, SEALED, sealed),
            link(FRAMED, DROPPED_FRAME, framed - sealed),
            link(SEALED, RETROSPECTED, retrospected),
            link(SEALED, DROPPED_SEAL, sealed - retrospected),
            link(RETROSPECTED, RIGHT_CALL, settled(OutcomeType::RightCall)),
            link(RETROSPECTED, WRONG_CALL, settled(OutcomeType::WrongCall)),
            link(RETROSPECTED, UNCLEAR, settled(OutcomeType::Unclear)),
        ],
    }
}
