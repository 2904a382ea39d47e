//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the claims
//! and rating domains. Everything here is deterministic: the reference
//! instant is fixed and identifiers come from a sequential generator.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{FixedClock, SequentialIdGenerator};
use domain_claims::{Adjuster, ClaimContext};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant every test treats as "now" (June 1, 2024 09:00 UTC)
    pub fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
            .single()
            .unwrap_or_default()
    }

    /// Incident time for a claim reported one day before the reference instant
    pub fn incident_date() -> DateTime<Utc> {
        Self::reported_date() - Duration::hours(25)
    }

    /// Report time one day before the reference instant
    pub fn reported_date() -> DateTime<Utc> {
        Self::reference_now() - Duration::days(1)
    }

    /// A clock frozen at the reference instant
    pub fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::at(Self::reference_now()))
    }
}

/// Fixture for claim contexts
pub struct ContextFixtures;

impl ContextFixtures {
    /// Context over the given clock with sequential identifiers
    pub fn with_clock(clock: Arc<FixedClock>) -> ClaimContext {
        ClaimContext::new(clock, Arc::new(SequentialIdGenerator::new()))
    }

    /// Context frozen at the reference instant
    pub fn deterministic() -> ClaimContext {
        Self::with_clock(TemporalFixtures::fixed_clock())
    }
}

/// Fixture for adjuster profiles
pub struct AdjusterFixtures;

impl AdjusterFixtures {
    /// Auto and home adjuster licensed in the West
    pub fn john_smith() -> Adjuster {
        Adjuster::new("ADJ001", "John Smith", &["AUTO", "HOME"], &["CA", "NV", "AZ"])
    }

    /// Commercial and liability adjuster
    pub fn sarah_johnson() -> Adjuster {
        Adjuster::new("ADJ002", "Sarah Johnson", &["COMMERCIAL", "LIABILITY"], &["CA", "OR", "WA"])
    }

    /// Home and flood adjuster licensed in the Southeast
    pub fn michael_brown() -> Adjuster {
        Adjuster::new("ADJ003", "Michael Brown", &["HOME", "FLOOD"], &["FL", "GA", "SC"])
    }

    /// Fraud investigator
    pub fn fraud_investigator() -> Adjuster {
        Adjuster::new("ADJ900", "Dana Reyes", &["fraud"], &["CA", "NY", "TX", "FL"])
    }

    /// The three line adjusters, in tie-break order
    pub fn roster() -> Vec<Adjuster> {
        vec![Self::john_smith(), Self::sarah_johnson(), Self::michael_brown()]
    }
}

/// Fixture for claimant details
pub struct ClaimantFixtures;

impl ClaimantFixtures {
    /// Claimant details for the given state
    pub fn in_state(state: &str) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("name".to_string(), "Robert Johnson".to_string()),
            ("phone".to_string(), "555-123-4567".to_string()),
            ("email".to_string(), "robert.johnson@example.com".to_string()),
            ("state".to_string(), state.to_string()),
        ])
    }

    /// A California claimant
    pub fn california() -> BTreeMap<String, String> {
        Self::in_state("CA")
    }

    /// Claimant details without a state
    pub fn stateless() -> BTreeMap<String, String> {
        let mut info = Self::california();
        info.remove("state");
        info
    }
}
