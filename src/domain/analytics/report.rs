//! Composite views handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::clusters::{tag_clusters, TagCluster};
use super::filter::{available_tags, FilterCriteria};
use super::flow::{flow_graph, FlowData, FlowFunnel};
use super::insights::KeyInsights;
use super::network::{similarity_network, SimilarityNetwork};
use super::quadrants::{conviction_quadrants, ConvictionQuadrants};
use super::summary::SummaryStats;
use super::trends::{monthly_trends, MonthlyTrendPoint};
use crate::domain::decision::Decision;
use crate::domain::foundation::Timestamp;

/// Every dashboard aggregate for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathFinderReport {
    pub criteria: FilterCriteria,
    pub filtered_count: usize,
    pub active_filter_count: usize,
    /// Tags across the unfiltered input, for the filter picker.
    pub available_tags: Vec<String>,
    pub summary: SummaryStats,
    pub insights: KeyInsights,
    pub clusters: Vec<TagCluster>,
    pub quadrants: ConvictionQuadrants,
    pub funnel: FlowFunnel,
    pub flow: FlowData,
    pub network: SimilarityNetwork,
    pub trends: Vec<MonthlyTrendPoint>,
}

impl PathFinderReport {
    /// Filters `decisions` and runs every aggregator over what remains.
    pub fn build(decisions: &[Decision], criteria: &FilterCriteria, now: Timestamp) -> Self {
        let filtered = criteria.apply(decisions, now);
        let summary = SummaryStats::compute(&filtered);

        Self {
            criteria: criteria.clone(),
            filtered_count: filtered.len(),
            active_filter_count: criteria.active_count(),
            available_tags: available_tags(decisions),
            insights: KeyInsights::from_stats(&summary),
            clusters: tag_clusters(&filtered),
            quadrants: conviction_quadrants(&filtered),
            funnel: FlowFunnel::from_stats(&summary),
            flow: flow_graph(&filtered),
            network: similarity_network(&filtered),
            trends: monthly_trends(&filtered),
            summary,
        }
    }
}

/// The upstream bundle: records plus the precomputed graphs and KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathFinderData {
    pub decisions: Vec<Decision>,
    pub network_data: SimilarityNetwork,
    pub flow_data: FlowData,
    pub stats: SummaryStats,
}

impl PathFinderData {
    pub fn from_decisions(decisions: Vec<Decision>) -> Self {
        Self {
            network_data: similarity_network(&decisions),
            flow_data: flow_graph(&decisions),
            stats: SummaryStats::compute(&decisions),
            decisions,
        }
    }
}
