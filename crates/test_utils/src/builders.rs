//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use core_kernel::FixedClock;
use domain_claims::{Adjuster, ClaimRequest, ClaimsProcessor, FraudThresholds, ProcessorConfig};
use domain_party::{ClaimRecord, PolicyHolder};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{AdjusterFixtures, ClaimantFixtures, ContextFixtures, TemporalFixtures};

/// Builder for policy holders
pub struct PolicyHolderBuilder {
    name: String,
    address: String,
    date_of_birth: NaiveDate,
    credit_score: i32,
    claim_history: Vec<ClaimRecord>,
}

impl Default for PolicyHolderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyHolderBuilder {
    /// Creates a builder for a 44-year-old holder with good credit
    pub fn new() -> Self {
        Self {
            name: "John Doe".to_string(),
            address: "123 Main St, Sacramento, CA 95814".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 5, 15).unwrap_or_default(),
            credit_score: 720,
            claim_history: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    /// Raw score; out-of-range values are clamped by `PolicyHolder`
    pub fn credit_score(mut self, credit_score: impl Into<i32>) -> Self {
        self.credit_score = credit_score.into();
        self
    }

    /// Adds a paid $2,500 auto claim on the given date
    pub fn claim_on(mut self, date: DateTime<Utc>) -> Self {
        self.claim_history
            .push(ClaimRecord::new(date, "AUTO", dec!(2500), "PAID"));
        self
    }

    pub fn claim(mut self, record: ClaimRecord) -> Self {
        self.claim_history.push(record);
        self
    }

    pub fn build(self) -> PolicyHolder {
        PolicyHolder::new(self.name, self.address, self.date_of_birth, self.credit_score)
            .with_claim_history(self.claim_history)
    }
}

/// Builder for claim requests
///
/// Defaults to a $12,500 California home claim reported one day before the
/// reference instant, 25 hours after the incident.
pub struct ClaimRequestBuilder {
    request: ClaimRequest,
}

impl Default for ClaimRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: ClaimRequest {
                policy_number: "CA-23-123456-H".to_string(),
                claim_type: "HOME".to_string(),
                incident_date: TemporalFixtures::incident_date(),
                reported_date: TemporalFixtures::reported_date(),
                description: "Water damage due to broken pipe in upstairs bathroom".to_string(),
                claimant_info: ClaimantFixtures::california(),
                estimated_value: dec!(12500),
            },
        }
    }

    pub fn policy_number(mut self, policy_number: impl Into<String>) -> Self {
        self.request.policy_number = policy_number.into();
        self
    }

    pub fn claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.request.claim_type = claim_type.into();
        self
    }

    pub fn reported_date(mut self, reported_date: DateTime<Utc>) -> Self {
        self.request.reported_date = reported_date;
        self
    }

    pub fn incident_date(mut self, incident_date: DateTime<Utc>) -> Self {
        self.request.incident_date = incident_date;
        self
    }

    /// Moves the incident back so the report comes `days` days after it
    pub fn reported_days_after_incident(mut self, days: i64) -> Self {
        self.request.incident_date = self.request.reported_date - Duration::days(days);
        self
    }

    pub fn estimated_value(mut self, estimated_value: Decimal) -> Self {
        self.request.estimated_value = estimated_value;
        self
    }

    /// Sets the claimant's state
    pub fn state(mut self, state: &str) -> Self {
        self.request.claimant_info = ClaimantFixtures::in_state(state);
        self
    }

    pub fn claimant_info(mut self, claimant_info: BTreeMap<String, String>) -> Self {
        self.request.claimant_info = claimant_info;
        self
    }

    pub fn build(self) -> ClaimRequest {
        self.request
    }
}

/// Builder for claims processors on a fixed clock
pub struct ProcessorBuilder {
    config: ProcessorConfig,
    clock: Arc<FixedClock>,
}

impl Default for ProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorBuilder {
    /// Creates a builder with the standard roster and default thresholds
    pub fn new() -> Self {
        Self {
            config: ProcessorConfig {
                auto_assignment: true,
                adjusters: AdjusterFixtures::roster(),
                fraud_thresholds: FraudThresholds::default(),
            },
            clock: TemporalFixtures::fixed_clock(),
        }
    }

    pub fn adjusters(mut self, adjusters: Vec<Adjuster>) -> Self {
        self.config.adjusters = adjusters;
        self
    }

    pub fn adjuster(mut self, adjuster: Adjuster) -> Self {
        self.config.adjusters.push(adjuster);
        self
    }

    pub fn auto_assignment(mut self, enabled: bool) -> Self {
        self.config.auto_assignment = enabled;
        self
    }

    pub fn fraud_thresholds(mut self, thresholds: FraudThresholds) -> Self {
        self.config.fraud_thresholds = thresholds;
        self
    }

    /// Shares a clock the test can move
    pub fn clock(mut self, clock: Arc<FixedClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the processor
    ///
    /// # Panics
    ///
    /// Panics if the configured roster is invalid
    pub fn build(self) -> ClaimsProcessor {
        match ClaimsProcessor::new(self.config, ContextFixtures::with_clock(self.clock)) {
            Ok(processor) => processor,
            Err(error) => panic!("invalid test processor configuration: {error}"),
        }
    }
}
