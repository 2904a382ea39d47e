//! Policy Holder Tests
//!
//! This module contains tests for the policy holder entity:
//! - Derived age around birthdays
//! - Risk factor credit tiers, including the untiered 600 - 649 band
//! - Claim recency surcharge over the trailing three years
//! - Policy records
//!
//! # Test Organization
//!
//! - `age_tests` - Age derivation
//! - `risk_factor_tests` - Credit and claims multipliers
//! - `policy_record_tests` - add_policy behavior
//! - `property_tests` - Invariants over generated inputs

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use core_kernel::{Clock, FixedClock, IdGenerator, SequentialIdGenerator};
use domain_party::{ClaimRecord, CreditTier, PolicyHolder, PolicyRecordStatus};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::{
    credit_score_strategy, raw_credit_score_strategy, PolicyHolderBuilder, TemporalFixtures,
};

// ============================================================================
// AGE TESTS
// ============================================================================

mod age_tests {
    use super::*;

    /// Age is not incremented until the birthday has occurred
    #[test]
    fn test_age_before_birthday() {
        let holder = PolicyHolderBuilder::new()
            .date_of_birth(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap())
            .build();
        let now = Utc.with_ymd_and_hms(2024, 6, 14, 23, 0, 0).unwrap();

        assert_eq!(holder.age_at(now), 33);
    }

    /// Age increments on the birthday itself
    #[test]
    fn test_age_on_birthday() {
        let holder = PolicyHolderBuilder::new()
            .date_of_birth(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap())
            .build();
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

        assert_eq!(holder.age_at(now), 34);
    }

    /// The clock-based accessor agrees with the explicit one
    #[test]
    fn test_age_reads_clock() {
        let clock = FixedClock::at(TemporalFixtures::reference_now());
        let holder = PolicyHolderBuilder::new()
            .date_of_birth(NaiveDate::from_ymd_opt(1980, 5, 15).unwrap())
            .build();

        assert_eq!(holder.age(&clock), holder.age_at(clock.now()));
        assert_eq!(holder.age(&clock), 44);
    }
}

// ============================================================================
// RISK FACTOR TESTS
// ============================================================================

mod risk_factor_tests {
    use super::*;

    fn holder_with_score(score: i32) -> PolicyHolder {
        PolicyHolderBuilder::new().credit_score(score).build()
    }

    #[test]
    fn test_excellent_credit() {
        let now = TemporalFixtures::reference_now();
        assert_eq!(holder_with_score(750).risk_factor_at(now), dec!(0.85));
        assert_eq!(holder_with_score(850).risk_factor_at(now), dec!(0.85));
    }

    #[test]
    fn test_good_credit() {
        let now = TemporalFixtures::reference_now();
        assert_eq!(holder_with_score(650).risk_factor_at(now), dec!(0.95));
        assert_eq!(holder_with_score(749).risk_factor_at(now), dec!(0.95));
    }

    /// 600 - 649 carries no adjustment at all
    #[test]
    fn test_fair_credit_band_is_neutral() {
        let now = TemporalFixtures::reference_now();
        assert_eq!(holder_with_score(600).risk_factor_at(now), dec!(1.0));
        assert_eq!(holder_with_score(625).risk_factor_at(now), dec!(1.0));
        assert_eq!(holder_with_score(649).risk_factor_at(now), dec!(1.0));
    }

    #[test]
    fn test_poor_credit() {
        let now = TemporalFixtures::reference_now();
        assert_eq!(holder_with_score(599).risk_factor_at(now), dec!(1.2));
        assert_eq!(holder_with_score(300).risk_factor_at(now), dec!(1.2));
    }

    /// Out-of-range scores are clamped before tiering
    #[test]
    fn test_clamped_scores_tier_correctly() {
        let now = TemporalFixtures::reference_now();
        assert_eq!(holder_with_score(0).credit_score(), 300);
        assert_eq!(holder_with_score(0).risk_factor_at(now), dec!(1.2));
        assert_eq!(holder_with_score(999).risk_factor_at(now), dec!(0.85));
    }

    #[test]
    fn test_negative_score_clamps_to_floor() {
        let now = TemporalFixtures::reference_now();
        let holder = holder_with_score(-250);

        assert_eq!(holder.credit_score(), 300);
        assert_eq!(holder.risk_factor_at(now), dec!(1.2));
    }

    /// Each recent claim adds 10% on top of the credit multiplier
    #[test]
    fn test_recent_claims_surcharge() {
        let now = TemporalFixtures::reference_now();
        let holder = PolicyHolderBuilder::new()
            .credit_score(800)
            .claim_on(now - Duration::days(30))
            .claim_on(now - Duration::days(400))
            .build();

        assert_eq!(holder.recent_claim_count(now), 2);
        assert_eq!(holder.risk_factor_at(now), dec!(1.02));
    }

    /// Claims older than 3 x 365 days are ignored
    #[test]
    fn test_old_claims_ignored() {
        let now = TemporalFixtures::reference_now();
        let holder = PolicyHolderBuilder::new()
            .credit_score(620)
            .claim_on(now - Duration::days(3 * 365 + 1))
            .build();

        assert_eq!(holder.recent_claim_count(now), 0);
        assert_eq!(holder.risk_factor_at(now), dec!(1.0));
    }

    /// The factor floats with the reference instant
    #[test]
    fn test_risk_factor_changes_as_claims_age() {
        let now = TemporalFixtures::reference_now();
        let clock = FixedClock::at(now);
        let holder = PolicyHolderBuilder::new()
            .credit_score(620)
            .claim_on(now - Duration::days(3 * 365 - 10))
            .build();

        assert_eq!(holder.risk_factor(&clock), dec!(1.1));

        clock.advance(Duration::days(11));
        assert_eq!(holder.risk_factor(&clock), dec!(1.0));
    }

    /// Recorded claims are picked up without any cache invalidation
    #[test]
    fn test_recorded_claim_is_reflected_immediately() {
        let now = TemporalFixtures::reference_now();
        let mut holder = PolicyHolderBuilder::new().credit_score(700).build();
        assert_eq!(holder.risk_factor_at(now), dec!(0.95));

        holder.record_claim(ClaimRecord::new(now - Duration::days(1), "HOME", dec!(2500), "PAID"));

        assert_eq!(holder.risk_factor_at(now), dec!(1.045));
    }

    /// The surcharge is uncapped
    #[test]
    fn test_many_claims_uncapped() {
        let now = TemporalFixtures::reference_now();
        let mut builder = PolicyHolderBuilder::new().credit_score(620);
        for day in 1..=15 {
            builder = builder.claim_on(now - Duration::days(day));
        }

        assert_eq!(builder.build().risk_factor_at(now), dec!(2.5));
    }
}

// ============================================================================
// POLICY RECORD TESTS
// ============================================================================

mod policy_record_tests {
    use super::*;

    #[test]
    fn test_add_policy_creates_active_record() {
        let clock = FixedClock::at(TemporalFixtures::reference_now());
        let ids = SequentialIdGenerator::new();
        let mut holder = PolicyHolderBuilder::new().build();

        let id = holder.add_policy("HOME", serde_json::json!({"dwelling": 350000}), &clock, &ids);

        assert_eq!(holder.policies().len(), 1);
        let record = &holder.policies()[0];
        assert_eq!(record.id, id);
        assert_eq!(record.policy_type, "HOME");
        assert_eq!(record.status, PolicyRecordStatus::Active);
        assert_eq!(record.start_date, TemporalFixtures::reference_now());
        assert_eq!(record.details["dwelling"], 350000);
    }

    #[test]
    fn test_policy_ids_are_unique() {
        let clock = FixedClock::at(TemporalFixtures::reference_now());
        let ids = SequentialIdGenerator::new();
        let mut holder = PolicyHolderBuilder::new().build();

        let home = holder.add_policy("HOME", serde_json::Value::Null, &clock, &ids);
        let auto = holder.add_policy("AUTO", serde_json::Value::Null, &clock, &ids);

        assert_ne!(home, auto);
        assert_eq!(ids.issued(), 2);
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        /// Risk never increases as credit improves, apart from the flat band
        #[test]
        fn credit_multiplier_is_non_increasing(a in credit_score_strategy(), b in credit_score_strategy()) {
            let now = TemporalFixtures::reference_now();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_risk = PolicyHolderBuilder::new().credit_score(low).build().risk_factor_at(now);
            let high_risk = PolicyHolderBuilder::new().credit_score(high).build().risk_factor_at(now);

            prop_assert!(high_risk <= low_risk);
        }

        #[test]
        fn credit_multiplier_matches_tier(score in credit_score_strategy()) {
            let now = TemporalFixtures::reference_now();
            let expected = if score >= 750 {
                dec!(0.85)
            } else if score >= 650 {
                dec!(0.95)
            } else if score >= 600 {
                dec!(1.0)
            } else {
                dec!(1.2)
            };

            let holder = PolicyHolderBuilder::new().credit_score(score).build();
            prop_assert_eq!(holder.risk_factor_at(now), expected);
            prop_assert_eq!(CreditTier::for_score(holder.credit_score()).multiplier(), expected);
        }

        #[test]
        fn stored_score_always_in_range(score in raw_credit_score_strategy()) {
            let holder = PolicyHolderBuilder::new().credit_score(score).build();
            prop_assert!((300..=850).contains(&holder.credit_score()));
        }
    }
}
