//! Configuration module for ledger_suggest.
//!
//! Settings are layered: built-in defaults first, then an optional file (TOML,
//! YAML, JSON), then environment variables. The merged result is validated
//! before use. There is no process-wide configuration; the loaded value is
//! passed explicitly to whatever needs it.

use crate::data_structures::DEFAULT_SUGGESTION_LIMIT;
use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "LEDGER_SUGGEST";

/// Largest suggestion limit accepted from configuration.
pub const MAX_SUGGESTION_LIMIT: usize = 100;

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

/// Main configuration for ledger_suggest.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SuggestConfig {
    /// Suggestion dropdown configuration
    pub suggestion: SuggestionConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for SuggestConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.suggestion.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Suggestion dropdown configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions shown per keystroke
    pub limit: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl Validate for SuggestionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.limit == 0 || self.limit > MAX_SUGGESTION_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "suggestion.limit".to_string(),
                message: format!("must be between 1 and {MAX_SUGGESTION_LIMIT}"),
            });
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
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

/// Configuration loader for ledger_suggest.
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

    /// Loads the configuration from defaults, a file and environment variables.
    ///
    /// Environment variables use `__` between the prefix and each key segment,
    /// e.g. `LEDGER_SUGGEST__SUGGESTION__LIMIT=5`.
    ///
    /// # Returns
    ///
    /// * `Ok(SuggestConfig)` if the configuration was loaded and is valid
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<SuggestConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&SuggestConfig::default())
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

        let suggest_config: SuggestConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        suggest_config.validate()?;

        tracing::debug!(
            path = ?self.config_path,
            limit = suggest_config.suggestion.limit,
            "Configuration loaded"
        );

        Ok(suggest_config)
    }
}
