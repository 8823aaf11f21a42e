//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `source` - Decision sources (synthetic generator, JSON file)
//! - `http` - Axum REST endpoints

pub mod http;
pub mod source;

pub use source::{JsonFileDecisionSource, SyntheticDecisionSource};
