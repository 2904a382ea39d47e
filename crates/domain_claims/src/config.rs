//! Processor configuration
//!
//! Configuration is layered with the `config` crate: an optional TOML file,
//! then environment variables prefixed `CLAIMS` with `__` between nested
//! keys.
//!
//! ```toml
//! auto_assignment = true
//!
//! [fraud_thresholds]
//! time_to_report_days = 30
//! value_threshold = 50000
//! multiple_claims = 3
//!
//! [[adjusters]]
//! id = "ADJ001"
//! name = "John Smith"
//! specializations = ["AUTO", "HOME"]
//! states = ["CA", "NV", "AZ"]
//! ```
//!
//! ```bash
//! CLAIMS__AUTO_ASSIGNMENT=false
//! CLAIMS__FRAUD_THRESHOLDS__MULTIPLE_CLAIMS=5
//! ```

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::adjuster::{Adjuster, AdjusterRoster};
use crate::error::ClaimError;
use crate::fraud::FraudThresholds;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CLAIMS";

/// Claims processor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Assign an adjuster automatically when a claim is created
    pub auto_assignment: bool,
    /// Adjusters in tie-break order
    pub adjusters: Vec<Adjuster>,
    pub fraud_thresholds: FraudThresholds,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            auto_assignment: true,
            adjusters: Vec::new(),
            fraud_thresholds: FraudThresholds::default(),
        }
    }
}

impl ProcessorConfig {
    /// Loads configuration from an optional TOML file and the environment
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the file is missing or malformed, or a
    /// value has the wrong type
    pub fn load(path: Option<&Path>) -> Result<Self, ClaimError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ClaimError::Configuration(e.to_string()))
    }

    /// Parses configuration from a TOML document
    pub fn from_toml_str(document: &str) -> Result<Self, ClaimError> {
        Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ClaimError::Configuration(e.to_string()))
    }

    /// Builds the adjuster roster, rejecting duplicate ids
    pub fn roster(&self) -> Result<AdjusterRoster, ClaimError> {
        AdjusterRoster::new(self.adjusters.clone())
    }
}
