//! Fraud signals raised when a claim is created
//!
//! Signals are informational. They add notes to the audit trail and, when
//! a policy has more claims than the threshold allows, escalate the claim to
//! investigation. They never block claim creation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{format_currency, whole_days_between};
use crate::claim::Claim;

/// Limits that trigger fraud signals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudThresholds {
    /// Reporting more than this many days after the incident is late
    pub time_to_report_days: i64,
    /// Estimates above this value are high value
    pub value_threshold: Decimal,
    /// Claims on one policy at which the pattern is noted; exceeding it
    /// escalates to investigation
    pub multiple_claims: usize,
}

impl Default for FraudThresholds {
    fn default() -> Self {
        Self {
            time_to_report_days: 30,
            value_threshold: dec!(50000),
            multiple_claims: 3,
        }
    }
}

/// A fraud indicator found on a claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FraudSignal {
    LateReport { days: i64 },
    HighValue { estimated_value: Decimal },
    MultipleClaims { count: usize, escalate: bool },
}

impl FraudSignal {
    /// Audit note text for the signal
    pub fn note(&self) -> String {
        match self {
            FraudSignal::LateReport { days } => {
                format!("Late reporting detected: {days} days after incident")
            }
            FraudSignal::HighValue { estimated_value } => {
                format!("High value claim detected: {}", format_currency(*estimated_value))
            }
            FraudSignal::MultipleClaims { count, .. } => {
                format!("Multiple claims detected for policy: {count} claims")
            }
        }
    }
}

/// Checks a claim for fraud indicators
///
/// # Arguments
///
/// * `claim` - The claim being created
/// * `policy_claim_count` - Claims on the same policy, including this one
/// * `thresholds` - Configured limits
///
/// # Returns
///
/// Signals in the order late report, high value, multiple claims
pub fn detect_signals(
    claim: &Claim,
    policy_claim_count: usize,
    thresholds: &FraudThresholds,
) -> Vec<FraudSignal> {
    let mut signals = Vec::new();

    let days = whole_days_between(claim.incident_date(), claim.reported_date());
    if days > thresholds.time_to_report_days {
        signals.push(FraudSignal::LateReport { days });
    }

    if claim.estimated_value() > thresholds.value_threshold {
        signals.push(FraudSignal::HighValue {
            estimated_value: claim.estimated_value(),
        });
    }

    if policy_claim_count >= thresholds.multiple_claims {
        signals.push(FraudSignal::MultipleClaims {
            count: policy_claim_count,
            escalate: policy_claim_count > thresholds.multiple_claims,
        });
    }

    signals
}
