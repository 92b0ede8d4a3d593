//! Configuration management for micoo.
//!
//! Handles loading configuration from TOML files and resolving the paths it
//! names.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{MicooError, MicooResult};
use crate::APP_NAME;

/// Name of the project-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".micoo.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where cookbooks live
    pub repository: RepositoryConfig,

    /// Log file settings
    pub logging: LoggingConfig,
}

/// Cookbook repository settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Directory scanned (recursively) for cookbooks
    pub path: PathBuf,

    /// Suffix that marks a file as a cookbook; stripped to form its name
    pub file_extension: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Append-only log file
    pub file: PathBuf,

    /// Minimum level written to the log file (trace, debug, info, warn, error)
    pub level: String,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path wins. Otherwise `.micoo.toml` in the current
    /// directory, then the global config file, then defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(global_config) = Self::global_config_path() {
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Self::default().resolve().map_err(Into::into)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .resolve()
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Expand `~` and environment variables in paths and validate values.
    pub fn resolve(mut self) -> MicooResult<Self> {
        self.repository.path = expand_path(&self.repository.path)?;
        self.logging.file = expand_path(&self.logging.file)?;

        let ext = &self.repository.file_extension;
        if ext.is_empty() {
            return Err(MicooError::InvalidConfig(
                "repository.file_extension must not be empty".to_string(),
            ));
        }
        if ext.contains('/') || ext.contains('\\') {
            return Err(MicooError::InvalidConfig(format!(
                "repository.file_extension '{ext}' must not contain a path separator"
            )));
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(MicooError::InvalidConfig(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }

        Ok(self)
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_NAME))
    }

    /// Get the data directory path (repository checkout, log file).
    pub fn data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_NAME))
    }

    fn data_dir_or_local() -> PathBuf {
        Self::data_dir().unwrap_or_else(|| PathBuf::from(format!(".{APP_NAME}")))
    }
}

fn expand_path(path: &Path) -> MicooResult<PathBuf> {
    let Some(raw) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| MicooError::InvalidConfig(format!("cannot expand '{raw}': {e}")))
}

impl Default for Config {
    fn default() -> Self {
        Self { repository: RepositoryConfig::default(), logging: LoggingConfig::default() }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            path: Config::data_dir_or_local().join("mise-cookbooks"),
            file_extension: ".toml".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: Config::data_dir_or_local().join(format!("{APP_NAME}.log")),
            level: "info".to_string(),
        }
    }
}
