//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionSource` - Supplies the journaled decisions the engine reads

mod decision_source;

pub use decision_source::{DecisionSource, SourceError};
