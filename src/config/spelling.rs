//! Spelling suggestion configuration module.
//!
//! This module defines the settings that control approximate matching.

use super::{ConfigResult, Validate};
use crate::data_structures::trie::{TrieConfig, DEFAULT_MAX_DISTANCE, MAX_SUGGESTION_DISTANCE};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Spelling suggestion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingSettings {
    /// Maximum Levenshtein distance between the input and a suggested word
    pub max_distance: usize,
}

impl Default for SpellingSettings {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl Validate for SpellingSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_distance > MAX_SUGGESTION_DISTANCE {
            return Err(ConfigError::ValidationError(format!(
                "max_distance must be at most {MAX_SUGGESTION_DISTANCE}, got {}",
                self.max_distance
            )));
        }

        Ok(())
    }
}

impl SpellingSettings {
    /// Builds the trie configuration for these settings.
    ///
    /// The settings must have been validated first.
    pub fn trie_config(&self) -> TrieConfig {
        TrieConfig::new().with_max_distance(self.max_distance)
    }
}
