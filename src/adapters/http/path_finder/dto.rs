//! HTTP DTOs for Path Finder endpoints.
//!
//! The endpoints are read-only and the analytics view models already
//! serialize with their wire names, so responses use them directly.

use serde::{Deserialize, Serialize};

use crate::domain::analytics::{FilterCriteria, Grouping};
use crate::domain::foundation::{ErrorCode, ValidationError};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string shared by the report and success-rate endpoints.
///
/// Every field is optional; absent fields select "all".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathFinderParams {
    /// `all`, `7d`, `30d` or `90d`.
    pub time_range: Option<String>,
    /// `all`, `right_call`, `wrong_call` or `unclear`.
    pub outcome: Option<String>,
    /// Comma-separated tag names.
    pub tags: Option<String>,
    /// `tag`, `confidence` or `stress`; success-rate endpoint only.
    pub grouping: Option<String>,
}

impl PathFinderParams {
    pub fn criteria(&self) -> Result<FilterCriteria, ValidationError> {
        let mut criteria = FilterCriteria::default();
        if let Some(range) = non_blank(&self.time_range) {
            criteria.time_range = range.parse()?;
        }
        if let Some(outcome) = non_blank(&self.outcome) {
            criteria.outcome = outcome.parse()?;
        }
        if let Some(tags) = non_blank(&self.tags) {
            criteria.tags = tags
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(criteria)
    }

    pub fn grouping(&self) -> Result<Grouping, ValidationError> {
        match non_blank(&self.grouping) {
            Some(grouping) => grouping.parse(),
            None => Ok(Grouping::default()),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::{OutcomeFilter, TimeRange};
    use crate::domain::decision::OutcomeType;

    fn params(time_range: &str, outcome: &str, tags: &str) -> PathFinderParams {
        PathFinderParams {
            time_range: Some(time_range.to_string()),
            outcome: Some(outcome.to_string()),
            tags: Some(tags.to_string()),
            grouping: None,
        }
    }

    #[test]
    fn empty_params_are_the_identity_filter() {
        let criteria = PathFinderParams::default().criteria().unwrap();
        assert!(criteria.is_identity());
    }

    #[test]
    fn parses_all_filters() {
        let criteria = params("30d", "wrong_call", "Hiring, Product,,").criteria().unwrap();

        assert_eq!(criteria.time_range, TimeRange::Last30Days);
        assert_eq!(criteria.outcome, OutcomeFilter::Only(OutcomeType::WrongCall));
        assert_eq!(criteria.tags, vec!["Hiring", "Product"]);
        assert_eq!(criteria.active_count(), 4);
    }

    #[test]
    fn blank_values_mean_all() {
        let criteria = params(" ", "", "").criteria().unwrap();
        assert!(criteria.is_identity());
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(params("14d", "all", "").criteria().is_err());
        assert!(params("all", "maybe", "").criteria().is_err());
    }

    #[test]
    fn grouping_defaults_to_tag() {
        assert_eq!(PathFinderParams::default().grouping().unwrap(), Grouping::Tag);

        let params = PathFinderParams {
            grouping: Some("mood".to_string()),
            ..PathFinderParams::default()
        };
        assert!(params.grouping().is_err());
    }

    #[test]
    fn error_response_skips_empty_details() {
        let json = serde_json::to_value(ErrorResponse::bad_request("nope")).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("details").is_none());
    }
}
