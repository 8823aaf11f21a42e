//! Path Finder query handlers.
//!
//! Each handler loads the journal through the `DecisionSource` port,
//! validates it, then hands it to the pure analytics engine.

mod analyze_decisions;
mod get_path_finder_data;
mod get_success_rates;

pub use analyze_decisions::{AnalyzeDecisionsHandler, AnalyzeDecisionsQuery};
pub use get_path_finder_data::GetPathFinderDataHandler;
pub use get_success_rates::{GetSuccessRatesHandler, GetSuccessRatesQuery};

use tracing::{debug, warn};

use crate::domain::decision::{validate_all, Decision};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::DecisionSource;

/// Loads the journal and rejects it whole if any record is invalid.
async fn load_validated(source: &dyn DecisionSource) -> Result<Vec<Decision>, DomainError> {
    let decisions = source.load_decisions().await.map_err(|err| {
        warn!(error = %err, "Failed to load decisions");
        DomainError::from(err)
    })?;

    validate_all(&decisions).map_err(|err| {
        warn!(error = %err, "Decision source returned invalid data");
        DomainError {
            code: ErrorCode::InvalidSourceData,
            ..DomainError::from(err)
        }
    })?;

    debug!(count = decisions.len(), "Loaded decisions");
    Ok(decisions)
}
