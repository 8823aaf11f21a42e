//! Analytics Module - Pure aggregations over journaled decisions.
//!
//! Every function here takes a slice of decisions and returns a typed,
//! serializable view. Nothing performs I/O or keeps state between calls,
//! so the engine is safe to call from any thread.
//!
//! # Components
//!
//! - `FilterCriteria` - time range, outcome and tag predicates
//! - `SummaryStats` - counts, rates, timing and headline tags
//! - `tag_clusters` - per-tag volume and success with a verdict
//! - `conviction_quadrants` - logic versus gut win rates
//! - `FlowFunnel` / `flow_graph` - lifecycle funnel and Sankey graph
//! - `similarity_network` - decisions linked by shared tags
//! - `monthly_trends` - outcome mix per framing month
//! - `success_rates` - rate bars by tag, confidence or stress
//! - `PathFinderReport` / `PathFinderData` - composite views
//!
//! # Tie Breaks
//!
//! Tag tallies keep first-seen order, so "first tag encountered wins"
//! holds for every ranking.

mod clusters;
mod filter;
mod flow;
mod insights;
mod network;
mod quadrants;
mod report;
mod success_rates;
mod summary;
mod tally;
mod trends;

#[cfg(test)]
pub(crate) mod fixtures;

pub use clusters::{
    tag_clusters, ClusterInsight, ConvictionLevel, TagCluster, Verdict, MAX_CLUSTERS,
};
pub use filter::{available_tags, FilterCriteria, OutcomeFilter, TimeRange};
pub use flow::{
    flow_graph, FlowData, FlowFunnel, FlowLink, FlowNode, FunnelStage, FunnelStageKind,
    FLOW_NODE_NAMES,
};
pub use insights::{
    FocusArea, KeyInsights, WorkflowHealth, WorkflowInsight, COMPLETION_ATTENTION_THRESHOLD,
    SEAL_RATE_TARGET,
};
pub use network::{similarity_network, NetworkLink, NetworkNode, SimilarityNetwork};
pub use quadrants::{
    conviction_quadrants, ConvictionQuadrants, Quadrant, QuadrantStats, HIGH_GUT_THRESHOLD,
    HIGH_LOGIC_THRESHOLD,
};
pub use report::{PathFinderData, PathFinderReport};
pub use success_rates::{success_rates, Grouping, SuccessRateBar, MAX_BARS};
pub use summary::{PathCount, PathRate, SummaryStats, MIN_OCCURRENCES_FOR_SUCCESS, NO_PATH};
pub use trends::{monthly_trends, MonthlyTrendPoint};
