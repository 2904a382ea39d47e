//! CLI configuration
//!
//! The CLI reads the same TOML file as the processor. Keys it does not own
//! (`auto_assignment`, `adjusters`, ...) are ignored here and picked up by
//! [`ProcessorConfig::load`].

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use domain_claims::config::ENV_PREFIX;
use domain_claims::ProcessorConfig;
use serde::Deserialize;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Filter directive, e.g. `info` or `domain_claims=debug`
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl CliConfig {
    /// Loads configuration from an optional TOML file and the environment
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing or malformed
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Parses configuration from a TOML document
    pub fn from_toml_str(document: &str) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Loads both halves of the configuration from one optional file
pub fn load_all(path: Option<&Path>) -> anyhow::Result<(CliConfig, ProcessorConfig)> {
    let cli = CliConfig::load(path)?;
    let processor = ProcessorConfig::load(path)?;
    Ok((cli, processor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_shared_file_ignores_processor_keys() {
        let config = CliConfig::from_toml_str(
            r#"
            log_level = "domain_claims=debug"
            log_format = "json"
            auto_assignment = false
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "domain_claims=debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliConfig::from_toml_str(r#"log_format = "xml""#).is_err());
    }
}
