//! Configuration module for the trie dictionary.
//!
//! This module provides a layered configuration system that starts from
//! built-in defaults, merges an optional file (TOML, YAML, JSON) and then
//! applies environment variable overrides. The result is validated before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod spelling;

pub use spelling::SpellingSettings;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TRIE_DICT";

/// Loads the dictionary configuration.
///
/// An explicit `config_path` must exist. Without one, the file at
/// [`DEFAULT_CONFIG_PATH`] is used when present and built-in defaults
/// otherwise. Environment overrides apply in both cases.
///
/// # Returns
///
/// * `Ok(DictionaryConfig)` if the configuration was loaded and validated
/// * `Err(ConfigError)` if there was an error loading the configuration
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<DictionaryConfig> {
    if let Some(path) = config_path {
        return ConfigLoader::new(Some(path), ENV_PREFIX).load();
    }

    match ConfigLoader::new(Some(DEFAULT_CONFIG_PATH), ENV_PREFIX).load() {
        Err(ConfigError::FileNotFound(_)) => {
            tracing::debug!(
                "Default configuration file not found at: {}",
                DEFAULT_CONFIG_PATH
            );
            ConfigLoader::default().load()
        }
        result => result,
    }
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the trie dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DictionaryConfig {
    /// Spelling suggestion configuration
    pub spelling: SpellingSettings,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.spelling.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl DictionaryConfig {
    /// Serializes the configuration as pretty-printed TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the trie dictionary.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// Environment variables use the loader's prefix and `__` between path
    /// segments, e.g. `TRIE_DICT__SPELLING__MAX_DISTANCE=1`.
    ///
    /// # Returns
    ///
    /// * `Ok(DictionaryConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<DictionaryConfig> {
        let mut builder = Config::builder();

        builder = builder.add_source(
            Config::try_from(&DictionaryConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let dictionary_config: DictionaryConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        dictionary_config.validate()?;

        tracing::debug!(?dictionary_config, "configuration loaded");
        Ok(dictionary_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(None::<PathBuf>, ENV_PREFIX)
    }
}
