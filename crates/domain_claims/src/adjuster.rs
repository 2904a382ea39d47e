//! Adjusters and the adjuster roster

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::claim::SYSTEM_ACTOR;
use crate::error::ClaimError;

/// Specialization that marks a fraud investigator
pub const FRAUD_SPECIALIZATION: &str = "fraud";

/// An adjuster profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjuster {
    pub id: String,
    pub name: String,
    /// Claim types handled, e.g. `AUTO`, `HOME`, or `fraud`
    #[serde(default)]
    pub specializations: Vec<String>,
    /// Two-letter state codes the adjuster is licensed in
    #[serde(default)]
    pub states: Vec<String>,
}

impl Adjuster {
    pub fn new(id: &str, name: &str, specializations: &[&str], states: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            specializations: specializations.iter().map(|s| s.to_string()).collect(),
            states: states.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Returns true if the adjuster lists `specialization`
    pub fn specializes_in(&self, specialization: &str) -> bool {
        self.specializations.iter().any(|s| s == specialization)
    }
}

/// Adjusters in configuration order
///
/// The order is significant: it breaks workload ties during auto-assignment
/// and picks the fraud investigator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjusterRoster {
    adjusters: Vec<Adjuster>,
}

impl AdjusterRoster {
    /// Creates a roster
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if two adjusters share an id or an adjuster
    /// uses the reserved `SYSTEM` id
    pub fn new(adjusters: Vec<Adjuster>) -> Result<Self, ClaimError> {
        let mut seen = HashSet::new();
        for adjuster in &adjusters {
            if adjuster.id == SYSTEM_ACTOR {
                return Err(ClaimError::Configuration(format!(
                    "adjuster id '{SYSTEM_ACTOR}' is reserved"
                )));
            }
            if !seen.insert(adjuster.id.as_str()) {
                return Err(ClaimError::Configuration(format!(
                    "duplicate adjuster id '{}'",
                    adjuster.id
                )));
            }
        }
        Ok(Self { adjusters })
    }

    pub fn get(&self, adjuster_id: &str) -> Option<&Adjuster> {
        self.adjusters.iter().find(|a| a.id == adjuster_id)
    }

    pub fn contains(&self, adjuster_id: &str) -> bool {
        self.get(adjuster_id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adjuster> {
        self.adjusters.iter()
    }

    pub fn len(&self) -> usize {
        self.adjusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjusters.is_empty()
    }

    /// Adjusters specialized in `claim_type`, in roster order
    pub fn specialists_for(&self, claim_type: &str) -> Vec<&Adjuster> {
        self.iter().filter(|a| a.specializes_in(claim_type)).collect()
    }

    /// First fraud investigator in roster order
    pub fn fraud_investigator(&self) -> Option<&Adjuster> {
        self.iter().find(|a| a.specializes_in(FRAUD_SPECIALIZATION))
    }
}
