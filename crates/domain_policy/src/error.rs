//! Policy domain errors
//!
//! Rating itself never fails: unknown categories fall back to a neutral
//! multiplier. Errors only arise when loading alternate rating tables.

use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Rating table is structurally unusable
    #[error("Invalid rating table: {0}")]
    InvalidRatingTable(String),

    /// Rating table document could not be parsed
    #[error("Rating table parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
