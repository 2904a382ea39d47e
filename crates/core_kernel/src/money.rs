//! Currency amounts over `rust_decimal`
//!
//! Amounts throughout the workspace are plain `Decimal` values in a single
//! implied currency (USD). This module holds the shared rounding and display
//! conventions so every domain rounds the same way.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places a currency amount is reported with
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents using banker's rounding (round half to even)
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointNearestEven,
    )
}

/// Formats an amount as `$1234.50`
pub fn format_currency(amount: Decimal) -> String {
    let mut cents = round_currency(amount);
    cents.rescale(CURRENCY_DECIMAL_PLACES);
    format!("${}", cents)
}
