//! Risk factor components
//!
//! The holder's risk factor is a product of two independent multipliers:
//!
//! | Credit score | Multiplier |
//! |---|---|
//! | 750 and above | 0.85 |
//! | 650 - 749 | 0.95 |
//! | 600 - 649 | 1.00 |
//! | below 600 | 1.20 |
//!
//! and a recency surcharge of 10% per claim in the trailing three years,
//! uncapped. The 600 - 649 band carries no adjustment.

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lowest credit score accepted; lower inputs are clamped
pub const MIN_CREDIT_SCORE: u16 = 300;

/// Highest credit score accepted; higher inputs are clamped
pub const MAX_CREDIT_SCORE: u16 = 850;

/// Window of prior claims that count toward the surcharge
pub fn claims_lookback() -> Duration {
    Duration::days(3 * 365)
}

/// Surcharge per recent claim
pub const RECENT_CLAIM_SURCHARGE: Decimal = dec!(0.1);

/// Credit score bands used for rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditTier {
    /// 750 and above
    Excellent,
    /// 650 to 749
    Good,
    /// 600 to 649
    Fair,
    /// Below 600
    Poor,
}

impl CreditTier {
    /// Classifies a credit score
    pub fn for_score(score: u16) -> Self {
        if score >= 750 {
            CreditTier::Excellent
        } else if score >= 650 {
            CreditTier::Good
        } else if score < 600 {
            CreditTier::Poor
        } else {
            CreditTier::Fair
        }
    }

    /// Returns the risk multiplier for this tier
    pub fn multiplier(&self) -> Decimal {
        match self {
            CreditTier::Excellent => dec!(0.85),
            CreditTier::Good => dec!(0.95),
            CreditTier::Fair => Decimal::ONE,
            CreditTier::Poor => dec!(1.2),
        }
    }
}

/// Risk multiplier for a credit score
pub fn credit_multiplier(score: u16) -> Decimal {
    CreditTier::for_score(score).multiplier()
}

/// Risk multiplier for a number of recent claims
pub fn claims_multiplier(recent_claims: usize) -> Decimal {
    if recent_claims == 0 {
        return Decimal::ONE;
    }
    Decimal::ONE + RECENT_CLAIM_SURCHARGE * Decimal::from(recent_claims)
}
