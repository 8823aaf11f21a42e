//! Path Finder HTTP adapter module.
//!
//! Provides the read-only REST endpoints behind the analytics dashboard.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, PathFinderParams};
pub use handlers::{PathFinderApiError, PathFinderAppState};
pub use routes::path_finder_router;
