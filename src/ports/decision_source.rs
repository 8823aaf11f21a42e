use async_trait::async_trait;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Read-only port supplying the decision journal.
///
/// Implementations return records as stored; callers validate them with
/// [`crate::domain::decision::validate_all`] before aggregating.
#[async_trait]
pub trait DecisionSource: Send + Sync {
    /// Loads every decision in the journal.
    async fn load_decisions(&self) -> Result<Vec<Decision>, SourceError>;
}

/// Errors that can occur while loading decisions
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Decision source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed decision data: {0}")]
    Malformed(String),

    #[error("Invalid decision: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<SourceError> for DomainError {
    fn from(err: SourceError) -> Self {
        let code = match &err {
            SourceError::Unavailable(_) => ErrorCode::SourceUnavailable,
            SourceError::Malformed(_) | SourceError::Invalid(_) => ErrorCode::InvalidSourceData,
        };
        DomainError::new(code, err.to_string())
    }
}
