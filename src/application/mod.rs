//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Path Finder is read-only, so every handler is a query handler.

pub mod handlers;

pub use handlers::{
    AnalyzeDecisionsHandler, AnalyzeDecisionsQuery, GetPathFinderDataHandler,
    GetSuccessRatesHandler, GetSuccessRatesQuery,
};
