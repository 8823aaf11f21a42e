//! Route configuration for Path Finder endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_path_finder_data, get_report, get_success_rates, PathFinderAppState};

/// Creates the Path Finder router.
///
/// Routes:
/// - `GET /api/path-finder` - Decisions with network, flow and summary
/// - `GET /api/path-finder/report` - Filtered dashboard report
/// - `GET /api/path-finder/success-rates` - Success-rate bars by grouping
pub fn path_finder_router() -> Router<PathFinderAppState> {
    Router::new()
        .route("/api/path-finder", get(get_path_finder_data))
        .route("/api/path-finder/report", get(get_report))
        .route("/api/path-finder/success-rates", get(get_success_rates))
}
