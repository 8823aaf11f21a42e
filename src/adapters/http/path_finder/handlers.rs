//! HTTP handlers for Path Finder endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AnalyzeDecisionsHandler, AnalyzeDecisionsQuery, GetPathFinderDataHandler,
    GetSuccessRatesHandler, GetSuccessRatesQuery,
};
use crate::domain::analytics::{PathFinderData, PathFinderReport, SuccessRateBar};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, ValidationError};
use crate::ports::DecisionSource;

use super::dto::{ErrorResponse, PathFinderParams};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Path Finder API error that implements IntoResponse.
#[derive(Debug)]
pub enum PathFinderApiError {
    BadRequest(String),
    InvalidData {
        message: String,
        details: HashMap<String, String>,
    },
    Unavailable(String),
    Internal(String),
}

impl IntoResponse for PathFinderApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            PathFinderApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            PathFinderApiError::InvalidData { message, details } => {
                let mut error = ErrorResponse::new(ErrorCode::InvalidSourceData, message);
                if !details.is_empty() {
                    error = error.with_details(serde_json::Value::Object(
                        details
                            .into_iter()
                            .map(|(k, v)| (k, serde_json::Value::String(v)))
                            .collect(),
                    ));
                }
                (StatusCode::UNPROCESSABLE_ENTITY, error)
            }
            PathFinderApiError::Unavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(ErrorCode::SourceUnavailable, msg),
            ),
            PathFinderApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for PathFinderApiError {
    fn from(error: DomainError) -> Self {
        match error.code {
            ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => PathFinderApiError::BadRequest(error.message),
            ErrorCode::InvalidSourceData | ErrorCode::InvalidStateTransition => {
                PathFinderApiError::InvalidData {
                    message: error.message,
                    details: error.details,
                }
            }
            ErrorCode::SourceUnavailable => PathFinderApiError::Unavailable(error.message),
            ErrorCode::InternalError => PathFinderApiError::Internal(error.message),
        }
    }
}

impl From<ValidationError> for PathFinderApiError {
    fn from(error: ValidationError) -> Self {
        PathFinderApiError::BadRequest(error.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing Path Finder dependencies.
#[derive(Clone)]
pub struct PathFinderAppState {
    pub decision_source: Arc<dyn DecisionSource>,
}

impl PathFinderAppState {
    pub fn new(decision_source: Arc<dyn DecisionSource>) -> Self {
        Self { decision_source }
    }

    pub fn get_data_handler(&self) -> GetPathFinderDataHandler {
        GetPathFinderDataHandler::new(self.decision_source.clone())
    }

    pub fn analyze_handler(&self) -> AnalyzeDecisionsHandler {
        AnalyzeDecisionsHandler::new(self.decision_source.clone())
    }

    pub fn success_rates_handler(&self) -> GetSuccessRatesHandler {
        GetSuccessRatesHandler::new(self.decision_source.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/path-finder
///
/// Returns every decision with the network, flow and summary over the full journal.
pub async fn get_path_finder_data(
    State(state): State<PathFinderAppState>,
) -> Result<Json<PathFinderData>, PathFinderApiError> {
    let data = state.get_data_handler().handle().await?;
    Ok(Json(data))
}

/// GET /api/path-finder/report?timeRange=&outcome=&tags=
///
/// Returns every dashboard aggregate over the filtered view.
pub async fn get_report(
    State(state): State<PathFinderAppState>,
    Query(params): Query<PathFinderParams>,
) -> Result<Json<PathFinderReport>, PathFinderApiError> {
    let query = AnalyzeDecisionsQuery {
        criteria: params.criteria()?,
        now: Timestamp::now(),
    };

    let report = state.analyze_handler().handle(query).await?;
    Ok(Json(report))
}

/// GET /api/path-finder/success-rates?grouping=&timeRange=&outcome=&tags=
///
/// Returns success-rate bars for the chosen grouping.
pub async fn get_success_rates(
    State(state): State<PathFinderAppState>,
    Query(params): Query<PathFinderParams>,
) -> Result<Json<Vec<SuccessRateBar>>, PathFinderApiError> {
    let query = GetSuccessRatesQuery {
        grouping: params.grouping()?,
        criteria: params.criteria()?,
        now: Timestamp::now(),
    };

    let bars = state.success_rates_handler().handle(query).await?;
    Ok(Json(bars))
}
