// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the dictionary trie.

/// Default edit-distance bound used by spelling suggestions.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Largest edit-distance bound accepted for spelling suggestions.
pub const MAX_SUGGESTION_DISTANCE: usize = 16;

/// Configuration for the dictionary trie.
///
/// Only spelling suggestion behaviour is tunable; the structural operations
/// have no knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieConfig {
    /// Maximum Levenshtein distance for a word to count as a spelling suggestion
    max_distance: usize,
}

impl TrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_distance: 2
    pub fn new() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Set the maximum edit distance for spelling suggestions.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        if max_distance > MAX_SUGGESTION_DISTANCE {
            panic!("Max distance must be at most {MAX_SUGGESTION_DISTANCE}");
        }
        self.max_distance = max_distance;
        self
    }

    /// Get the maximum edit distance for spelling suggestions
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
