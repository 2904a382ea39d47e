//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for credit scores inside the accepted range
pub fn credit_score_strategy() -> impl Strategy<Value = u16> {
    300u16..=850
}

/// Strategy for raw credit scores, including negative and above-range values
pub fn raw_credit_score_strategy() -> impl Strategy<Value = i32> {
    -1000i32..=2000
}

/// Strategy for property and vehicle ages in years
pub fn age_strategy() -> impl Strategy<Value = i64> {
    0i64..=120
}

/// Strategy for currency amounts in whole cents up to $1,000,000
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for itemized damages with up to five categories
pub fn damages_strategy() -> impl Strategy<Value = BTreeMap<String, Decimal>> {
    proptest::collection::btree_map("[a-z]{3,10}", amount_strategy(), 0..5)
}
