//! Configuration System
//!
//! Diagnostics-only configuration. Nothing here influences digests or naming;
//! it controls how the tool logs. Sources, lowest precedence first: built-in
//! defaults, an explicitly passed TOML file, then `HB__*` environment overrides.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `HB__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "HB";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashbrownsConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HashbrownsConfig {
    /// Validate values the deserializer cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        let logging = &self.logging;
        if !matches!(logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Invalid(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                logging.format
            )));
        }
        if !matches!(logging.output.as_str(), "stdout" | "stderr" | "file") {
            return Err(ConfigError::Invalid(format!(
                "logging.output must be 'stdout', 'stderr' or 'file', got '{}'",
                logging.output
            )));
        }
        if logging.output == "file" && logging.file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.file cannot be empty when output is 'file'".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults plus environment overrides
    pub fn load() -> Result<HashbrownsConfig, ConfigError> {
        Self::build(builder_with_defaults()?)
    }

    /// Load a specific TOML file, with environment overrides on top
    pub fn load_from_file(path: &Path) -> Result<HashbrownsConfig, ConfigError> {
        let builder = builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<HashbrownsConfig, ConfigError> {
        let config: HashbrownsConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

/// Create a Config builder with defaults applied
fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = LoggingConfig::default();
    Ok(Config::builder()
        .set_default("logging.level", defaults.level)?
        .set_default("logging.format", defaults.format)?
        .set_default("logging.output", defaults.output)?
        .set_default("logging.color", defaults.color)?)
}
