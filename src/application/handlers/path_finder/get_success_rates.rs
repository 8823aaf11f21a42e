//! GetSuccessRatesHandler - Query handler for the success-rate bar chart.

use std::sync::Arc;

use tracing::debug;

use super::load_validated;
use crate::domain::analytics::{success_rates, FilterCriteria, Grouping, SuccessRateBar};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::DecisionSource;

/// Query for success-rate bars over a filtered view.
#[derive(Debug, Clone)]
pub struct GetSuccessRatesQuery {
    pub grouping: Grouping,
    pub criteria: FilterCriteria,
    pub now: Timestamp,
}

pub struct GetSuccessRatesHandler {
    source: Arc<dyn DecisionSource>,
}

impl GetSuccessRatesHandler {
    pub fn new(source: Arc<dyn DecisionSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: GetSuccessRatesQuery) -> Result<Vec<SuccessRateBar>, DomainError> {
        let decisions = load_validated(self.source.as_ref()).await?;
        let filtered = query.criteria.apply(&decisions, query.now);
        let bars = success_rates(&filtered, query.grouping);

        debug!(grouping = %query.grouping, bars = bars.len(), "Computed success rates");
        Ok(bars)
    }
}
