//! Prior claims recorded against a policy holder

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A claim from the holder's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// When the claim occurred
    pub date: DateTime<Utc>,
    /// Line of business, e.g. `AUTO`
    pub claim_type: String,
    /// Amount paid or claimed
    pub amount: Decimal,
    /// Outcome, e.g. `PAID`
    pub status: String,
}

impl ClaimRecord {
    pub fn new(
        date: DateTime<Utc>,
        claim_type: impl Into<String>,
        amount: Decimal,
        status: impl Into<String>,
    ) -> Self {
        Self {
            date,
            claim_type: claim_type.into(),
            amount,
            status: status.into(),
        }
    }

    /// Returns true if the claim happened on or after `cutoff`
    pub fn is_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.date >= cutoff
    }
}
