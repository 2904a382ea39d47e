//! Policy holder entity
//!
//! A policy holder carries the personal and risk attributes used for rating:
//! date of birth, credit score and prior claims. The credit score is clamped
//! into the 300 - 850 range on every write.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{age_in_years, Clock, IdGenerator, PolicyRecordId};
use crate::claim_history::ClaimRecord;
use crate::risk::{claims_lookback, claims_multiplier, credit_multiplier, MAX_CREDIT_SCORE, MIN_CREDIT_SCORE};

/// Status of a policy written for the holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyRecordStatus {
    Active,
    Cancelled,
    Expired,
}

/// A policy associated with the holder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub id: PolicyRecordId,
    /// Line of business, e.g. `HOME`
    pub policy_type: String,
    /// Free-form, line-specific details
    pub details: serde_json::Value,
    pub start_date: DateTime<Utc>,
    pub status: PolicyRecordStatus,
}

/// A person holding one or more policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyHolder {
    pub name: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
    credit_score: u16,
    /// Prior claims, oldest first
    pub claim_history: Vec<ClaimRecord>,
    policies: Vec<PolicyRecord>,
}

impl PolicyHolder {
    /// Creates a holder with an empty claim history
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        date_of_birth: NaiveDate,
        credit_score: i32,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            date_of_birth,
            credit_score: clamp_credit_score(credit_score),
            claim_history: Vec::new(),
            policies: Vec::new(),
        }
    }

    /// Replaces the claim history
    pub fn with_claim_history(mut self, claim_history: Vec<ClaimRecord>) -> Self {
        self.claim_history = claim_history;
        self
    }

    /// Returns the credit score, always within 300 - 850
    pub fn credit_score(&self) -> u16 {
        self.credit_score
    }

    /// Updates the credit score, clamping it into range
    pub fn set_credit_score(&mut self, credit_score: i32) {
        self.credit_score = clamp_credit_score(credit_score);
    }

    /// Appends a prior claim
    pub fn record_claim(&mut self, record: ClaimRecord) {
        self.claim_history.push(record);
    }

    /// Returns the policies written for this holder
    pub fn policies(&self) -> &[PolicyRecord] {
        &self.policies
    }

    /// Age in whole years at the given instant
    pub fn age_at(&self, now: DateTime<Utc>) -> i32 {
        age_in_years(self.date_of_birth, now.date_naive())
    }

    /// Age in whole years according to the clock
    pub fn age(&self, clock: &dyn Clock) -> i32 {
        self.age_at(clock.now())
    }

    /// Number of prior claims dated within the lookback window ending at `now`
    pub fn recent_claim_count(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - claims_lookback();
        self.claim_history
            .iter()
            .filter(|claim| claim.is_since(cutoff))
            .count()
    }

    /// Multiplicative risk factor at the given instant
    ///
    /// Recomputed on every call from the current credit score and claim
    /// history, so two calls at different instants may disagree.
    pub fn risk_factor_at(&self, now: DateTime<Utc>) -> Decimal {
        credit_multiplier(self.credit_score) * claims_multiplier(self.recent_claim_count(now))
    }

    /// Multiplicative risk factor according to the clock
    pub fn risk_factor(&self, clock: &dyn Clock) -> Decimal {
        self.risk_factor_at(clock.now())
    }

    /// Records a new active policy for this holder
    ///
    /// # Returns
    ///
    /// The identifier of the new policy record
    pub fn add_policy(
        &mut self,
        policy_type: impl Into<String>,
        details: serde_json::Value,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> PolicyRecordId {
        let id = PolicyRecordId::issue(ids);
        let policy_type = policy_type.into();

        tracing::info!(policy_id = %id, policy_type = %policy_type, holder = %self.name, "Policy added");

        self.policies.push(PolicyRecord {
            id,
            policy_type,
            details,
            start_date: clock.now(),
            status: PolicyRecordStatus::Active,
        });
        id
    }
}

/// Clamps a raw score, negative values included, into the reportable range
fn clamp_credit_score(score: i32) -> u16 {
    let clamped = score.clamp(i32::from(MIN_CREDIT_SCORE), i32::from(MAX_CREDIT_SCORE));
    u16::try_from(clamped).unwrap_or(MIN_CREDIT_SCORE)
}
