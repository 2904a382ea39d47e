//! Settlement arithmetic

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a settlement calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Sum of all damage categories
    pub total_damages: Decimal,
    pub deductible_applied: Decimal,
    pub coverage_limit: Decimal,
    pub settlement_amount: Decimal,
    /// True when settlement plus deductible absorbs all damages
    pub fully_covered: bool,
}

/// Computes a settlement from itemized damages
///
/// The payout is the damages less the deductible, never below zero and
/// never above the coverage limit.
pub fn compute_settlement(
    damages: &BTreeMap<String, Decimal>,
    deductible: Decimal,
    coverage_limit: Decimal,
) -> SettlementResult {
    let total_damages: Decimal = damages.values().copied().sum();
    let settlement_amount = (total_damages - deductible)
        .max(Decimal::ZERO)
        .min(coverage_limit);

    SettlementResult {
        total_damages,
        deductible_applied: deductible,
        coverage_limit,
        settlement_amount,
        fully_covered: total_damages <= settlement_amount + deductible,
    }
}
