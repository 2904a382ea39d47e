//! Loss valuation helpers
//!
//! Straight-line depreciation by item category, and a business interruption
//! estimate for commercial claims.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Depreciated value never drops below this share of the original value
pub const SALVAGE_FLOOR: Decimal = dec!(0.2);

/// Assumed profit margin on lost revenue
pub const PROFIT_MARGIN: Decimal = dec!(0.15);

/// Share of revenue going to fixed expenses when not specified
pub const DEFAULT_FIXED_EXPENSES_PCT: Decimal = dec!(0.3);

/// Annual depreciation rate for an item category
///
/// Unknown categories depreciate at the default 10% a year.
pub fn depreciation_rate(category: &str) -> Decimal {
    match category {
        "ELECTRONICS" => dec!(0.20),
        "FURNITURE" => dec!(0.10),
        "VEHICLE" => dec!(0.15),
        "CLOTHING" => dec!(0.25),
        "JEWELRY" => dec!(0.05),
        "BUILDING" => dec!(0.02),
        "TOOLS" => dec!(0.10),
        "APPLIANCES" => dec!(0.12),
        _ => dec!(0.10),
    }
}

/// Depreciated value of a claimed item
///
/// # Arguments
///
/// * `item_value` - Original value
/// * `age_years` - Age in years, fractions allowed
/// * `category` - Item category, e.g. `ELECTRONICS`
///
/// # Returns
///
/// Value after straight-line depreciation, floored at 20% of the original.
/// Unrounded; callers round with `round_currency` when presenting it.
pub fn calculate_depreciation(item_value: Decimal, age_years: Decimal, category: &str) -> Decimal {
    let depreciation = item_value * depreciation_rate(category) * age_years;
    let floor = item_value * SALVAGE_FLOOR;
    (item_value - depreciation).max(floor)
}

/// Estimated business interruption loss
///
/// Lost profit at a 15% margin plus the fixed expenses that keep accruing
/// while the business is down, on a 30-day month. The result is unrounded.
pub fn estimate_business_interruption(
    monthly_revenue: Decimal,
    downtime_days: u32,
    fixed_expenses_pct: Decimal,
) -> Decimal {
    let revenue_loss = monthly_revenue / dec!(30) * Decimal::from(downtime_days);
    let lost_profit = revenue_loss * PROFIT_MARGIN;
    let fixed_expenses = revenue_loss * fixed_expenses_pct;
    lost_profit + fixed_expenses
}
