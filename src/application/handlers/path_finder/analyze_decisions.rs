//! AnalyzeDecisionsHandler - Query handler for the filtered dashboard report.

use std::sync::Arc;

use tracing::info;

use super::load_validated;
use crate::domain::analytics::{FilterCriteria, PathFinderReport};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::DecisionSource;

/// Query for a dashboard report.
#[derive(Debug, Clone)]
pub struct AnalyzeDecisionsQuery {
    pub criteria: FilterCriteria,
    /// Reference instant for the time-range window.
    pub now: Timestamp,
}

pub struct AnalyzeDecisionsHandler {
    source: Arc<dyn DecisionSource>,
}

impl AnalyzeDecisionsHandler {
    pub fn new(source: Arc<dyn DecisionSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: AnalyzeDecisionsQuery) -> Result<PathFinderReport, DomainError> {
        let decisions = load_validated(self.source.as_ref()).await?;
        let report = PathFinderReport::build(&decisions, &query.criteria, query.now);

        info!(
            total = decisions.len(),
            filtered = report.filtered_count,
            active_filters = report.active_filter_count,
            "Built path finder report"
        );

        Ok(report)
    }
}
