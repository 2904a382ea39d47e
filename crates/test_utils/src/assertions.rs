//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_claims::{Claim, ClaimStatus};
use rust_decimal::Decimal;

/// Asserts that two decimal values are equal within a tolerance
///
/// # Arguments
///
/// * `actual` - The computed value
/// * `expected` - The expected value
/// * `tolerance` - The allowed absolute difference
///
/// # Panics
///
/// Panics if the values differ by more than tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a claim's audit trail contains a note with exactly this text
pub fn assert_has_note(claim: &Claim, content: &str) {
    assert!(
        claim.notes().iter().any(|note| note.content == content),
        "Expected note {:?} on claim {}, found: {:#?}",
        content,
        claim.id(),
        claim.notes().iter().map(|n| n.content.as_str()).collect::<Vec<_>>()
    );
}

/// Asserts that no note on the claim starts with `prefix`
pub fn assert_no_note_starting_with(claim: &Claim, prefix: &str) {
    let found: Vec<&str> = claim
        .notes()
        .iter()
        .map(|n| n.content.as_str())
        .filter(|content| content.starts_with(prefix))
        .collect();
    assert!(
        found.is_empty(),
        "Expected no note starting with {:?} on claim {}, found: {:?}",
        prefix,
        claim.id(),
        found
    );
}

/// Asserts a claim's status
pub fn assert_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status(),
        expected,
        "Claim {} has status {}, expected {}",
        claim.id(),
        claim.status(),
        expected
    );
}
