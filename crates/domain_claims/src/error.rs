//! Claims domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::ClaimId;
use crate::status::ClaimStatus;

/// Errors returned by claim and processor operations
///
/// None of these abort processing: callers working through a queue of claims
/// can log the error and move on to the next one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Adjuster not found: {0}")]
    AdjusterNotFound(String),

    #[error("Invalid status code: {0}")]
    InvalidStatus(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: ClaimStatus, to: ClaimStatus },

    /// Settlement was requested before coverage was verified; the computed
    /// damage total is still reported
    #[error("Coverage not verified")]
    CoverageNotVerified { total_damages: Decimal },

    #[error("Configuration error: {0}")]
    Configuration(String),
}
