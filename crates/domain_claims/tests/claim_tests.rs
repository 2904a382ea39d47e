//! Claim Entity Tests
//!
//! This module contains tests for the claim aggregate on its own:
//! - Audit trail and last_updated on every mutation
//! - Adjuster assignment and reassignment
//! - Coverage decisions
//! - Pluggable transition policy
//! - State compliance checks
//! - Structured snapshot
//!
//! # Test Organization
//!
//! - `lifecycle_tests` - Status, documents, notes, values
//! - `assignment_tests` - First assignment and reassignment
//! - `coverage_tests` - Coverage verified and denied
//! - `transition_policy_tests` - A stricter policy layered in
//! - `compliance_tests` - Regulatory deadlines and documentation
//! - `snapshot_tests` - Serialized view

use std::sync::Arc;

use chrono::Duration;
use core_kernel::DocumentId;
use domain_claims::{
    Claim, ClaimContext, ClaimError, ClaimStatus, TransitionPolicy, ValueKind, SYSTEM_ACTOR,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::{
    assert_has_note, assert_status, ClaimRequestBuilder, ClaimantFixtures, ContextFixtures,
    TemporalFixtures,
};

fn open_claim(ctx: &ClaimContext) -> Claim {
    Claim::open(ClaimRequestBuilder::new().build(), ctx)
}

fn add_documents(claim: &mut Claim, count: usize, ctx: &ClaimContext) -> Vec<DocumentId> {
    (0..count)
        .map(|i| claim.add_document(&format!("photo_{i}.jpg"), "PHOTO", "/storage/photos", "CLAIMANT", ctx))
        .collect()
}

// ============================================================================
// LIFECYCLE TESTS
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_new_claim_defaults() {
        let ctx = ContextFixtures::deterministic();
        let claim = open_claim(&ctx);

        assert_status(&claim, ClaimStatus::New);
        assert_eq!(claim.actual_value(), dec!(0));
        assert_eq!(claim.estimated_value(), dec!(12500));
        assert!(claim.assigned_adjuster().is_none());
        assert!(!claim.coverage_verified());
        assert!(claim.documents().is_empty());
        assert_has_note(&claim, "Claim created");
    }

    #[test]
    fn test_status_change_note() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);

        claim.update_status(ClaimStatus::PendingInfo, "ADJ001", &ctx).unwrap();

        assert_status(&claim, ClaimStatus::PendingInfo);
        let note = claim.notes().last().unwrap();
        assert_eq!(note.content, "Status changed from NEW to PENDING_INFO");
        assert_eq!(note.created_by, "ADJ001");
    }

    #[test]
    fn test_closed_claim_can_reopen() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);

        claim.update_status(ClaimStatus::Closed, "ADJ001", &ctx).unwrap();
        claim.update_status(ClaimStatus::Reopened, "ADJ001", &ctx).unwrap();
        claim.update_status(ClaimStatus::Investigating, "ADJ001", &ctx).unwrap();

        assert_status(&claim, ClaimStatus::Investigating);
    }

    #[test]
    fn test_document_added() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);

        let id = claim.add_document(
            "Plumber_Invoice.pdf",
            "INVOICE",
            "/storage/documents/plumber_invoice.pdf",
            "CLAIMANT",
            &ctx,
        );

        assert_eq!(claim.documents().len(), 1);
        let document = &claim.documents()[0];
        assert_eq!(document.id, id);
        assert_eq!(document.uploaded_by, "CLAIMANT");
        assert_eq!(document.upload_date, TemporalFixtures::reference_now());
        assert_has_note(&claim, "Document added: Plumber_Invoice.pdf (INVOICE)");
    }

    #[test]
    fn test_identifiers_unique() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);

        let first = claim.add_note("first", "ADJ001", &ctx);
        let second = claim.add_note("second", "ADJ001", &ctx);

        assert_ne!(first, second);
        let docs = add_documents(&mut claim, 2, &ctx);
        assert_ne!(docs[0], docs[1]);
    }

    #[test]
    fn test_mutations_bump_last_updated() {
        let clock = TemporalFixtures::fixed_clock();
        let ctx = ContextFixtures::with_clock(clock.clone());
        let mut claim = open_claim(&ctx);
        let created = claim.last_updated();

        clock.advance(Duration::hours(2));
        claim.update_value(dec!(15000), ValueKind::Estimated, "ADJ001", &ctx);

        assert_eq!(claim.last_updated(), created + Duration::hours(2));
        assert_eq!(claim.notes().last().unwrap().timestamp, claim.last_updated());
    }

    #[test]
    fn test_estimate_note() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);

        claim.update_value(dec!(14250.5), ValueKind::Estimated, "ADJ001", &ctx);

        assert_eq!(claim.estimated_value(), dec!(14250.5));
        assert_eq!(claim.actual_value(), dec!(0));
        assert_has_note(&claim, "Estimated value updated from $12500.00 to $14250.50");
    }

    #[test]
    fn test_time_since_reported() {
        let ctx = ContextFixtures::deterministic();
        let claim = open_claim(&ctx);

        assert_eq!(claim.time_since_reported(ctx.now()), Duration::days(1));
    }
}

// ============================================================================
// ASSIGNMENT TESTS
// ============================================================================

mod assignment_tests {
    use super::*;

    #[test]
    fn test_first_assignment_sets_assigned() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);

        claim.assign_adjuster("ADJ001", SYSTEM_ACTOR, &ctx).unwrap();

        assert_status(&claim, ClaimStatus::Assigned);
        assert_eq!(claim.assigned_adjuster(), Some("ADJ001"));
        let trail: Vec<&str> = claim.notes().iter().map(|n| n.content.as_str()).collect();
        assert_eq!(
            trail,
            vec![
                "Claim created",
                "Status changed from NEW to ASSIGNED",
                "Assigned to adjuster ADJ001",
            ]
        );
    }

    #[test]
    fn test_reassignment_keeps_status() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);
        claim.assign_adjuster("ADJ001", SYSTEM_ACTOR, &ctx).unwrap();
        claim.update_status(ClaimStatus::Investigating, "ADJ001", &ctx).unwrap();

        claim.assign_adjuster("ADJ003", "SUPERVISOR", &ctx).unwrap();

        assert_status(&claim, ClaimStatus::Investigating);
        assert_eq!(claim.assigned_adjuster(), Some("ADJ003"));
        assert_has_note(&claim, "Reassigned from adjuster ADJ001 to ADJ003");
    }
}

// ============================================================================
// COVERAGE TESTS
// ============================================================================

mod coverage_tests {
    use super::*;

    #[test]
    fn test_covered_keeps_status() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);

        claim
            .verify_coverage(true, "Policy covers internal plumbing", "UNDERWRITER", &ctx)
            .unwrap();

        assert!(claim.coverage_verified());
        assert_status(&claim, ClaimStatus::New);
        assert_has_note(&claim, "Coverage verified: Policy covers internal plumbing");
    }

    #[test]
    fn test_denied_coverage_denies_claim() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);

        claim
            .verify_coverage(false, "Flood exclusion", "UNDERWRITER", &ctx)
            .unwrap();

        assert!(claim.coverage_verified());
        assert_status(&claim, ClaimStatus::Denied);
        assert_has_note(&claim, "Status changed from NEW to DENIED");
        assert_has_note(&claim, "Coverage denied: Flood exclusion");
    }
}

// ============================================================================
// TRANSITION POLICY TESTS
// ============================================================================

mod transition_policy_tests {
    use super::*;

    /// Closed claims stay closed
    struct NoReopening;

    impl TransitionPolicy for NoReopening {
        fn permits(&self, from: ClaimStatus, _to: ClaimStatus) -> bool {
            from != ClaimStatus::Closed
        }
    }

    #[test]
    fn test_refused_transition_leaves_claim_untouched() {
        let ctx = ContextFixtures::deterministic().with_transitions(Arc::new(NoReopening));
        let mut claim = open_claim(&ctx);
        claim.update_status(ClaimStatus::Closed, "ADJ001", &ctx).unwrap();
        let notes_before = claim.notes().len();

        let result = claim.update_status(ClaimStatus::Reopened, "ADJ001", &ctx);

        assert_eq!(
            result,
            Err(ClaimError::InvalidStatusTransition {
                from: ClaimStatus::Closed,
                to: ClaimStatus::Reopened,
            })
        );
        assert_status(&claim, ClaimStatus::Closed);
        assert_eq!(claim.notes().len(), notes_before);
    }

    #[test]
    fn test_refused_first_assignment_does_not_assign() {
        let ctx = ContextFixtures::deterministic().with_transitions(Arc::new(NoReopening));
        let mut claim = open_claim(&ctx);
        claim.update_status(ClaimStatus::Closed, "ADJ001", &ctx).unwrap();

        assert!(claim.assign_adjuster("ADJ001", SYSTEM_ACTOR, &ctx).is_err());
        assert!(claim.assigned_adjuster().is_none());
    }
}

// ============================================================================
// COMPLIANCE TESTS
// ============================================================================

mod compliance_tests {
    use super::*;

    #[test]
    fn test_fresh_claim_missing_documents() {
        let ctx = ContextFixtures::deterministic();
        let claim = open_claim(&ctx);

        let status = claim.check_compliance_status(ctx.now());

        assert!(status.acknowledgment_compliant);
        assert!(status.decision_compliant);
        assert!(!status.documentation_compliant);
        assert!(!status.is_compliant);
        assert_eq!(status.days_since_reported, 1);
        assert_eq!(status.required_documents, 3);
        assert_eq!(status.required_acknowledgment_days, 15);
        assert_eq!(status.required_decision_days, 40);
        assert_eq!(status.state, "CA");
    }

    #[test]
    fn test_documented_claim_compliant() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);
        add_documents(&mut claim, 3, &ctx);

        let status = claim.check_compliance_status(ctx.now());

        assert!(status.is_compliant);
        assert_eq!(status.actual_documents, 3);
    }

    #[test]
    fn test_acknowledgment_deadline_inclusive() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);
        add_documents(&mut claim, 3, &ctx);
        let reported = claim.reported_date();

        assert!(claim.check_compliance_status(reported + Duration::days(15)).acknowledgment_compliant);
        assert!(!claim.check_compliance_status(reported + Duration::days(16)).acknowledgment_compliant);
    }

    #[test]
    fn test_leaving_new_satisfies_acknowledgment() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);
        claim.update_status(ClaimStatus::Assigned, "ADJ001", &ctx).unwrap();

        let late = claim.reported_date() + Duration::days(20);
        let status = claim.check_compliance_status(late);

        assert!(status.acknowledgment_compliant);
        assert!(status.decision_compliant);
    }

    #[test]
    fn test_decision_deadline() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);
        claim.update_status(ClaimStatus::Investigating, "ADJ001", &ctx).unwrap();
        let late = claim.reported_date() + Duration::days(41);

        assert!(!claim.check_compliance_status(late).decision_compliant);

        claim.update_status(ClaimStatus::Approved, "ADJ001", &ctx).unwrap();
        assert!(claim.check_compliance_status(late).decision_compliant);
    }

    #[test]
    fn test_medium_documentation_states() {
        let ctx = ContextFixtures::deterministic();
        let mut tx = Claim::open(ClaimRequestBuilder::new().state("TX").build(), &ctx);
        let mut other = Claim::open(
            ClaimRequestBuilder::new().claimant_info(ClaimantFixtures::stateless()).build(),
            &ctx,
        );
        add_documents(&mut tx, 2, &ctx);
        add_documents(&mut other, 2, &ctx);

        assert!(tx.check_compliance_status(ctx.now()).is_compliant);
        let status = other.check_compliance_status(ctx.now());
        assert!(status.is_compliant);
        assert_eq!(status.state, "DEFAULT");
    }

    #[test]
    fn test_ny_acknowledges_within_a_week() {
        let ctx = ContextFixtures::deterministic();
        let claim = Claim::open(ClaimRequestBuilder::new().state("NY").build(), &ctx);

        let status = claim.check_compliance_status(claim.reported_date() + Duration::days(8));

        assert!(!status.acknowledgment_compliant);
        assert_eq!(status.required_acknowledgment_days, 7);
    }

    proptest! {
        /// Checking twice at the same instant gives the same answer
        #[test]
        fn compliance_check_is_idempotent(days in 0i64..120, docs in 0usize..5) {
            let ctx = ContextFixtures::deterministic();
            let mut claim = open_claim(&ctx);
            add_documents(&mut claim, docs, &ctx);
            let at = claim.reported_date() + Duration::days(days);

            let first = claim.check_compliance_status(at);
            let second = claim.check_compliance_status(at);

            prop_assert_eq!(first, second);
        }
    }
}

// ============================================================================
// SNAPSHOT TESTS
// ============================================================================

mod snapshot_tests {
    use super::*;

    #[test]
    fn test_snapshot_carries_every_field() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);
        claim.assign_adjuster("ADJ001", SYSTEM_ACTOR, &ctx).unwrap();
        add_documents(&mut claim, 1, &ctx);

        let snapshot = claim.snapshot();

        assert_eq!(snapshot.claim_id, claim.id());
        assert_eq!(snapshot.status, ClaimStatus::Assigned);
        assert_eq!(snapshot.status_description, "Assigned to adjuster");
        assert_eq!(snapshot.assigned_adjuster.as_deref(), Some("ADJ001"));
        assert_eq!(snapshot.documents.len(), 1);
        assert_eq!(snapshot.notes.len(), claim.notes().len());
        assert_eq!(snapshot.state_code, "CA");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let ctx = ContextFixtures::deterministic();
        let mut claim = open_claim(&ctx);
        add_documents(&mut claim, 1, &ctx);

        let json = serde_json::to_value(claim.snapshot()).unwrap();

        assert_eq!(json["status"], "NEW");
        assert_eq!(json["status_description"], "Newly reported claim");
        assert_eq!(json["claimant_info"]["state"], "CA");
        assert_eq!(json["documents"][0]["type"], "PHOTO");
        assert!(json["reported_date"]
            .as_str()
            .unwrap()
            .starts_with("2024-05-31T09:00:00"));
        assert!(json["assigned_adjuster"].is_null());
    }
}
