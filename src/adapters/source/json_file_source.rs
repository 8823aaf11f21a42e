//! JSON File Decision Source
//!
//! Reads a journal exported as a JSON array of decision records using the
//! camelCase wire format. The file is re-read on every load.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::decision::Decision;
use crate::ports::{DecisionSource, SourceError};

/// File-backed decision journal
#[derive(Debug, Clone)]
pub struct JsonFileDecisionSource {
    path: PathBuf,
}

impl JsonFileDecisionSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DecisionSource for JsonFileDecisionSource {
    async fn load_decisions(&self) -> Result<Vec<Decision>, SourceError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            SourceError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let decisions: Vec<Decision> = serde_json::from_str(&raw)
            .map_err(|e| SourceError::Malformed(format!("{}: {}", self.path.display(), e)))?;

        debug!(path = %self.path.display(), count = decisions.len(), "Read decisions from file");
        Ok(decisions)
    }
}
