//! Configuration error module.
//!
//! This module defines error types that may occur during configuration loading,
//! parsing, and validation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when parsing the configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error when serializing a configuration for output.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),
}
