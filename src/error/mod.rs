//! Error module for the trie dictionary.
//!
//! Trie operations themselves are total and never fail; they report "already
//! present" or "not found" through booleans and empty results. The errors
//! here cover the edges of the crate: configuration loading and the
//! command-line front end.

use thiserror::Error;

pub mod config;

pub use config::ConfigError;

/// Result type alias used throughout the trie dictionary.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Core error enum for the trie dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors that may occur while reading words or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when rendering results as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
