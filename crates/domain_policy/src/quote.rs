//! Policy quotes

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::round_currency;

/// Days a quote stays valid after it is issued
pub const QUOTE_VALIDITY_DAYS: i64 = 30;

/// A premium quote ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyQuote {
    pub annual_premium: Decimal,
    /// Annual premium / 12, rounded to cents
    pub monthly_payment: Decimal,
    pub coverage_type: String,
    pub deductible: Decimal,
    /// Coverage limits by category
    pub policy_limits: BTreeMap<String, Decimal>,
    pub quote_date: NaiveDate,
    pub valid_until: NaiveDate,
}

impl PolicyQuote {
    /// Returns true if the quote can still be accepted on `date`
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date >= self.quote_date && date <= self.valid_until
    }
}

/// Formats a quote issued on `quote_date`
pub fn format_policy_quote(
    premium: Decimal,
    coverage_type: &str,
    deductible: Decimal,
    policy_limits: BTreeMap<String, Decimal>,
    quote_date: NaiveDate,
) -> PolicyQuote {
    PolicyQuote {
        annual_premium: premium,
        monthly_payment: round_currency(premium / Decimal::from(12)),
        coverage_type: coverage_type.to_string(),
        deductible,
        policy_limits,
        quote_date,
        valid_until: quote_date + Duration::days(QUOTE_VALIDITY_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_payment_rounded() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let quote = format_policy_quote(dec!(1000), "HO-3", dec!(1000), BTreeMap::new(), date);

        assert_eq!(quote.monthly_payment, dec!(83.33));
        assert_eq!(quote.valid_until, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    }

    #[test]
    fn test_validity_window_inclusive() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let quote = format_policy_quote(dec!(1200), "FULL", dec!(500), BTreeMap::new(), date);

        assert!(quote.is_valid_on(date));
        assert!(quote.is_valid_on(quote.valid_until));
        assert!(!quote.is_valid_on(quote.valid_until + Duration::days(1)));
    }
}
