//! Command-line interface for the claims core
//!
//! This crate wires configuration, logging and the domain crates together
//! for the `claims-demo` binary.
//!
//! # Architecture
//!
//! - **Config**: log settings layered from TOML and `CLAIMS__*` variables
//! - **Telemetry**: `tracing-subscriber` installation
//! - **Scenario**: a scripted quote and claim lifecycle producing a
//!   serializable report

pub mod config;
pub mod scenario;
pub mod telemetry;

pub use config::{CliConfig, LogFormat};
pub use scenario::{run_demo, DemoReport};
pub use telemetry::init_tracing;
