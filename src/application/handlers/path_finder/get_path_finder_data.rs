//! GetPathFinderDataHandler - Query handler for the upstream data bundle.
//!
//! Returns every decision together with the similarity network, the
//! Sankey flow and the summary statistics over the full journal.

use std::sync::Arc;

use tracing::info;

use super::load_validated;
use crate::domain::analytics::PathFinderData;
use crate::domain::foundation::DomainError;
use crate::ports::DecisionSource;

pub struct GetPathFinderDataHandler {
    source: Arc<dyn DecisionSource>,
}

impl GetPathFinderDataHandler {
    pub fn new(source: Arc<dyn DecisionSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Result<PathFinderData, DomainError> {
        let decisions = load_validated(self.source.as_ref()).await?;
        let data = PathFinderData::from_decisions(decisions);

        info!(
            decisions = data.decisions.len(),
            links = data.network_data.links.len(),
            "Built path finder data"
        );

        Ok(data)
    }
}
