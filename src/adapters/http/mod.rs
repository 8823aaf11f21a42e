//! HTTP adapters - REST API implementations.

pub mod path_finder;

pub use path_finder::{path_finder_router, PathFinderAppState};

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

/// Creates the application router with tracing, CORS and timeout layers.
pub fn create_router(state: PathFinderAppState, server: &ServerConfig) -> Router {
    path_finder_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .with_state(state)
}

/// Any origin when none are configured; otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(allowed)
}
