//! State regulatory compliance
//!
//! Each state sets how many days an insurer has to acknowledge a claim and
//! to reach a decision, and how much documentation a claim file must carry.
//! States without a profile use the `DEFAULT` profile.
//!
//! | State | Acknowledge | Decide | Documentation |
//! |---|---|---|---|
//! | CA | 15 | 40 | high |
//! | NY | 7 | 30 | high |
//! | TX | 15 | 45 | medium |
//! | FL | 14 | 90 | high |
//! | DEFAULT | 15 | 45 | medium |

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// State code used when the claimant's state is unknown
pub const DEFAULT_STATE_CODE: &str = "DEFAULT";

/// Documentation tier required by a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentationLevel {
    High,
    Medium,
    Low,
}

impl DocumentationLevel {
    /// Minimum number of documents on file
    pub fn min_documents(&self) -> usize {
        match self {
            DocumentationLevel::High => 3,
            DocumentationLevel::Medium => 2,
            DocumentationLevel::Low => 1,
        }
    }
}

/// Regulatory deadlines for one state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRequirements {
    /// Days allowed to acknowledge a new claim
    pub time_to_acknowledge: i64,
    /// Days allowed to reach a decision
    pub time_to_decision: i64,
    pub documentation_level: DocumentationLevel,
}

impl StateRequirements {
    const fn new(time_to_acknowledge: i64, time_to_decision: i64, documentation_level: DocumentationLevel) -> Self {
        Self {
            time_to_acknowledge,
            time_to_decision,
            documentation_level,
        }
    }

    /// Returns the profile for a two-letter state code
    pub fn for_state(state_code: &str) -> Self {
        use DocumentationLevel::*;
        match state_code {
            "CA" => Self::new(15, 40, High),
            "NY" => Self::new(7, 30, High),
            "TX" => Self::new(15, 45, Medium),
            "FL" => Self::new(14, 90, High),
            _ => Self::new(15, 45, Medium),
        }
    }
}

/// Outcome of checking one claim against its state's requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    pub is_compliant: bool,
    pub acknowledgment_compliant: bool,
    pub decision_compliant: bool,
    pub documentation_compliant: bool,
    pub days_since_reported: i64,
    pub required_acknowledgment_days: i64,
    pub required_decision_days: i64,
    pub required_documents: usize,
    pub actual_documents: usize,
    pub state: String,
}

/// Compliance counts for all claims in one state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateComplianceSummary {
    pub total_claims: usize,
    pub compliant_claims: usize,
    pub non_compliant_claims: usize,
    /// Percentage of compliant claims, unrounded; 0 for an empty group
    pub compliance_rate: Decimal,
}

impl StateComplianceSummary {
    /// Counts one checked claim and refreshes the rate
    pub fn record(&mut self, is_compliant: bool) {
        self.total_claims += 1;
        if is_compliant {
            self.compliant_claims += 1;
        } else {
            self.non_compliant_claims += 1;
        }
        self.compliance_rate = compliance_rate(self.compliant_claims, self.total_claims);
    }
}

/// Compliance summaries keyed by state code
pub type ComplianceReport = BTreeMap<String, StateComplianceSummary>;

fn compliance_rate(compliant: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(compliant) / Decimal::from(total) * Decimal::ONE_HUNDRED
}
