//! Decision source configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound on generated decisions; the similarity network is quadratic.
pub const MAX_SYNTHETIC_COUNT: usize = 10_000;

/// Which adapter supplies decisions
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Synthetic,
    JsonFile,
}

/// Decision source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,

    /// Journal file, required for `json_file`
    pub path: Option<String>,

    /// Fixed seed for the synthetic generator
    pub seed: Option<u64>,

    /// Decisions generated per load
    #[serde(default = "default_count")]
    pub count: usize,
}

impl SourceConfig {
    /// Validate source configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.kind {
            SourceKind::JsonFile => {
                let has_path = self.path.as_deref().is_some_and(|p| !p.trim().is_empty());
                if !has_path {
                    return Err(ValidationError::MissingRequired("source.path"));
                }
            }
            SourceKind::Synthetic => {
                if self.count == 0 || self.count > MAX_SYNTHETIC_COUNT {
                    return Err(ValidationError::InvalidDecisionCount {
                        max: MAX_SYNTHETIC_COUNT,
                        actual: self.count,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            path: None,
            seed: None,
            count: default_count(),
        }
    }
}

fn default_count() -> usize {
    50
}
