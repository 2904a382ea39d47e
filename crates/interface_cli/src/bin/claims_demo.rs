//! Claims core demo binary
//!
//! Runs a scripted quote and claim lifecycle and prints the results as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: no adjusters, auto-assignment on
//! cargo run --bin claims-demo
//!
//! # With a configuration file and JSON logs
//! CLAIMS__LOG_FORMAT=json cargo run --bin claims-demo -- claims.toml
//! ```
//!
//! # Environment Variables
//!
//! * `CLAIMS__LOG_LEVEL` - Filter directive (default: info)
//! * `CLAIMS__LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `CLAIMS__AUTO_ASSIGNMENT` - Assign adjusters on creation (default: true)
//! * `CLAIMS__FRAUD_THRESHOLDS__*` - Fraud signal limits
//! * `RUST_LOG` - Overrides the configured filter

use std::path::PathBuf;
use std::sync::Arc;

use core_kernel::{RandomIdGenerator, SystemClock};
use interface_cli::{config::load_all, init_tracing, run_demo};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let (cli_config, processor_config) = load_all(path.as_deref())?;

    init_tracing(&cli_config);
    tracing::info!(
        config_file = ?path,
        adjusters = processor_config.adjusters.len(),
        "Starting claims demo"
    );

    let report = run_demo(
        processor_config,
        Arc::new(SystemClock),
        Arc::new(RandomIdGenerator),
    )?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    tracing::info!("Claims demo complete");
    Ok(())
}
