//! Shared utilities for the trie dictionary.

pub mod levenshtein;

pub use levenshtein::{levenshtein_distance, levenshtein_distance_within};
