//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `decision` - The journaled decision record and its lifecycle
//! - `analytics` - Pure aggregations behind the Path Finder dashboard

pub mod analytics;
pub mod decision;
pub mod foundation;
