//! Decision Source Adapters
//!
//! Implementations of the DecisionSource port.
//!
//! ## Available Adapters
//!
//! - **SyntheticDecisionSource** - Seedable generator of realistic journals (demos, tests)
//! - **JsonFileDecisionSource** - Reads a JSON array of decisions from disk
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::source::{JsonFileDecisionSource, SyntheticDecisionSource};
//!
//! // Production: a journal exported to disk
//! let source = JsonFileDecisionSource::new("./data/decisions.json");
//!
//! // Demo: 50 generated decisions, reproducible
//! let source = SyntheticDecisionSource::new(50).with_seed(7);
//! ```

mod json_file_source;
mod synthetic_source;

pub use json_file_source::JsonFileDecisionSource;
pub use synthetic_source::{SyntheticDecisionSource, TAG_POOL};

use std::sync::Arc;

use crate::config::{SourceConfig, SourceKind, ValidationError};
use crate::ports::DecisionSource;

/// Builds the configured decision source.
pub fn source_from_config(config: &SourceConfig) -> Result<Arc<dyn DecisionSource>, ValidationError> {
    match config.kind {
        SourceKind::Synthetic => {
            let mut source = SyntheticDecisionSource::new(config.count);
            if let Some(seed) = config.seed {
                source = source.with_seed(seed);
            }
            Ok(Arc::new(source))
        }
        SourceKind::JsonFile => {
            let path = config
                .path
                .as_deref()
                .ok_or(ValidationError::MissingRequired("source.path"))?;
            Ok(Arc::new(JsonFileDecisionSource::new(path)))
        }
    }
}
