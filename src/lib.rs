//! Trie Dictionary Library
//!
//! This library contains an in-memory prefix-tree dictionary together with
//! the configuration and error types used by the `trie_dictionary` binary.
//!
//! # Architecture
//!
//! - [`data_structures::trie`] holds the dictionary itself: insertion, exact
//!   lookup, deletion with pruning, prefix auto-suggestion, enumeration,
//!   spelling suggestions and a structure dump.
//! - [`utils::levenshtein`] provides the edit distance used for spelling
//!   suggestions.
//! - [`config`] and [`error`] cover the ambient concerns of the binary.
//!
//! The dictionary is a plain single-threaded value; share it behind a single
//! lock if several threads need it.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod utils;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::trie::Trie;

/// Version information for the trie dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
