//! Claim status vocabulary and transition policy
//!
//! ```text
//! NEW -> ASSIGNED -> INVESTIGATING -> PENDING_INFO -> APPROVED / PARTIAL_APPROVED / DENIED -> CLOSED -> REOPENED
//! ```
//!
//! The diagram is the usual path, not a constraint. Which moves are legal is
//! decided by a [`TransitionPolicy`]; the default [`PermissiveTransitions`]
//! allows any status to follow any other, including moves out of `CLOSED`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Newly reported
    New,
    /// Assigned to an adjuster
    Assigned,
    /// Under investigation
    Investigating,
    /// Waiting on more information
    PendingInfo,
    /// Approved for payment
    Approved,
    /// Partially approved
    PartialApproved,
    /// Denied
    Denied,
    /// Closed
    Closed,
    /// Closed claim reopened
    Reopened,
}

impl ClaimStatus {
    /// Every status, in lifecycle order
    pub const ALL: [ClaimStatus; 9] = [
        ClaimStatus::New,
        ClaimStatus::Assigned,
        ClaimStatus::Investigating,
        ClaimStatus::PendingInfo,
        ClaimStatus::Approved,
        ClaimStatus::PartialApproved,
        ClaimStatus::Denied,
        ClaimStatus::Closed,
        ClaimStatus::Reopened,
    ];

    /// Returns the status code, e.g. `PENDING_INFO`
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::New => "NEW",
            ClaimStatus::Assigned => "ASSIGNED",
            ClaimStatus::Investigating => "INVESTIGATING",
            ClaimStatus::PendingInfo => "PENDING_INFO",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::PartialApproved => "PARTIAL_APPROVED",
            ClaimStatus::Denied => "DENIED",
            ClaimStatus::Closed => "CLOSED",
            ClaimStatus::Reopened => "REOPENED",
        }
    }

    /// Human-readable description of the status
    pub fn description(&self) -> &'static str {
        match self {
            ClaimStatus::New => "Newly reported claim",
            ClaimStatus::Assigned => "Assigned to adjuster",
            ClaimStatus::Investigating => "Under investigation",
            ClaimStatus::PendingInfo => "Pending additional information",
            ClaimStatus::Approved => "Claim approved for payment",
            ClaimStatus::PartialApproved => "Claim partially approved",
            ClaimStatus::Denied => "Claim denied",
            ClaimStatus::Closed => "Claim closed",
            ClaimStatus::Reopened => "Previously closed claim reopened",
        }
    }

    /// Returns true once a coverage decision has been reached
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            ClaimStatus::Approved
                | ClaimStatus::PartialApproved
                | ClaimStatus::Denied
                | ClaimStatus::Closed
        )
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == code)
            .ok_or_else(|| ClaimError::InvalidStatus(code.to_string()))
    }
}

/// Decides which status changes are allowed
pub trait TransitionPolicy: Send + Sync {
    /// Returns true if a claim in `from` may move to `to`
    fn permits(&self, from: ClaimStatus, to: ClaimStatus) -> bool;
}

/// Any status may follow any other
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveTransitions;

impl TransitionPolicy for PermissiveTransitions {
    fn permits(&self, _from: ClaimStatus, _to: ClaimStatus) -> bool {
        true
    }
}
