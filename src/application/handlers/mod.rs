//! Application handlers.
//!
//! Query handlers that orchestrate the decision source and the analytics engine.

pub mod path_finder;

pub use path_finder::{
    AnalyzeDecisionsHandler, AnalyzeDecisionsQuery, GetPathFinderDataHandler,
    GetSuccessRatesHandler, GetSuccessRatesQuery,
};
