//! Engine strategy configuration

use serde::Deserialize;

use crate::domain::feedback::{ScoringStrategy, ThemePolicy};

use super::error::ValidationError;

/// Strategy selection and input bounds for one analyzer instance
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Sentiment scoring strategy
    #[serde(default)]
    pub scoring: ScoringStrategy,

    /// Theme classification policy
    #[serde(default)]
    pub themes: ThemePolicy,

    /// Minimum accepted text length in characters, after sanitizing
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,

    /// Maximum accepted text length in characters, after sanitizing
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

impl EngineConfig {
    /// Word-counting scorer with unconditional themes.
    pub fn classic() -> Self {
        Self {
            scoring: ScoringStrategy::Discrete,
            themes: ThemePolicy::Unconditional,
            ..Default::default()
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_text_length == 0 || self.min_text_length > self.max_text_length {
            return Err(ValidationError::InvalidTextBounds);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringStrategy::default(),
            themes: ThemePolicy::default(),
            min_text_length: default_min_text_length(),
            max_text_length: default_max_text_length(),
        }
    }
}

fn default_min_text_length() -> usize {
    10
}

fn default_max_text_length() -> usize {
    2000
}

/// Deserialize helper for sections that default to [`EngineConfig::classic`].
pub(super) fn classic_engine() -> EngineConfig {
    EngineConfig::classic()
}
