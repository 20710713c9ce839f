use serde::{Deserialize, Serialize};
use std::path::Path;

use knot_types::params::KnotParams;

use crate::error::CliError;

/// Name of the configuration file written by `knot init`.
pub const CONFIG_FILE_NAME: &str = "knot.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnotConfig {
    #[serde(default)]
    pub hash: KnotParams,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "text" or "json".
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl KnotConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path, e),
        })?;
        let config: KnotConfig = toml::from_str(&contents).map_err(|e| CliError::ConfigError {
            reason: format!("failed to parse config file '{}': {}", path, e),
        })?;
        config.hash.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Initialize a default configuration file in the given directory.
    pub fn init(dir: &str) -> Result<String, CliError> {
        let dir_path = Path::new(dir);
        if !dir_path.exists() {
            std::fs::create_dir_all(dir_path)?;
        }

        let config = KnotConfig::default();
        let toml_str = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
            reason: format!("failed to serialize default config: {}", e),
        })?;

        let config_path = dir_path.join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, toml_str)?;

        Ok(config_path.to_string_lossy().into_owned())
    }
}
