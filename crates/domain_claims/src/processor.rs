//! Claims processing engine
//!
//! [`ClaimsProcessor`] owns every claim it creates and is the only way to
//! put a claim into the processor. Operations on an unknown claim or
//! adjuster return an error rather than panicking, so a caller working
//! through a queue can skip a bad id and carry on.
//!
//! # Claim creation
//!
//! 1. The claim is opened and stored.
//! 2. If auto-assignment is on, the least-loaded matching adjuster is
//!    assigned.
//! 3. Fraud signals are checked. Assignment comes first so that escalating
//!    to investigation reassigns rather than assigns.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use core_kernel::{ClaimId, DocumentId, NoteId};
use crate::adjuster::AdjusterRoster;
use crate::claim::{Claim, ClaimRequest, ValueKind, SYSTEM_ACTOR};
use crate::compliance::ComplianceReport;
use crate::config::ProcessorConfig;
use crate::context::ClaimContext;
use crate::error::ClaimError;
use crate::fraud::{detect_signals, FraudSignal, FraudThresholds};
use crate::settlement::{compute_settlement, SettlementResult};
use crate::status::ClaimStatus;

/// Orchestrates claims from creation to closure
#[derive(Debug)]
pub struct ClaimsProcessor {
    claims: Vec<Claim>,
    index: HashMap<ClaimId, usize>,
    adjusters: AdjusterRoster,
    auto_assignment: bool,
    fraud_thresholds: FraudThresholds,
    ctx: ClaimContext,
}

impl ClaimsProcessor {
    /// Creates a processor
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the adjuster list has duplicate ids
    pub fn new(config: ProcessorConfig, ctx: ClaimContext) -> Result<Self, ClaimError> {
        let adjusters = config.roster()?;
        tracing::info!(
            adjusters = adjusters.len(),
            auto_assignment = config.auto_assignment,
            "Claims processor initialized"
        );
        Ok(Self {
            claims: Vec::new(),
            index: HashMap::new(),
            adjusters,
            auto_assignment: config.auto_assignment,
            fraud_thresholds: config.fraud_thresholds,
            ctx,
        })
    }

    pub fn context(&self) -> &ClaimContext {
        &self.ctx
    }

    pub fn adjusters(&self) -> &AdjusterRoster {
        &self.adjusters
    }

    /// Creates and registers a claim
    ///
    /// Never fails: assignment and fraud checks only annotate the claim.
    pub fn create_claim(&mut self, request: ClaimRequest) -> &Claim {
        let claim = Claim::open(request, &self.ctx);
        let id = claim.id();
        let idx = self.claims.len();
        self.claims.push(claim);
        self.index.insert(id, idx);

        if self.auto_assignment {
            self.auto_assign_adjuster(idx);
        }
        self.validate_claim(idx);

        &self.claims[idx]
    }

    pub fn get_claim(&self, claim_id: ClaimId) -> Option<&Claim> {
        self.index.get(&claim_id).map(|&idx| &self.claims[idx])
    }

    /// All claims in creation order
    pub fn claims(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Sets a claim's status from a status code
    ///
    /// # Errors
    ///
    /// Returns `ClaimNotFound` for an unknown claim and `InvalidStatus` for
    /// a code outside the status vocabulary; neither changes any claim.
    pub fn update_claim_status(
        &mut self,
        claim_id: ClaimId,
        new_status: &str,
        updated_by: &str,
    ) -> Result<(), ClaimError> {
        let idx = self.position(claim_id)?;
        let status = new_status.parse::<ClaimStatus>().map_err(|e| {
            tracing::error!(%claim_id, status = new_status, "Invalid status code");
            e
        })?;
        self.claims[idx].update_status(status, updated_by, &self.ctx)
    }

    /// Assigns a claim to a configured adjuster or to `SYSTEM`
    pub fn assign_claim(
        &mut self,
        claim_id: ClaimId,
        adjuster_id: &str,
        updated_by: &str,
    ) -> Result<(), ClaimError> {
        let idx = self.position(claim_id)?;
        if adjuster_id != SYSTEM_ACTOR && !self.adjusters.contains(adjuster_id) {
            tracing::error!(adjuster_id, "Adjuster not found");
            return Err(ClaimError::AdjusterNotFound(adjuster_id.to_string()));
        }
        self.claims[idx].assign_adjuster(adjuster_id, updated_by, &self.ctx)
    }

    /// Attaches a document to a claim
    pub fn add_document(
        &mut self,
        claim_id: ClaimId,
        name: &str,
        document_type: &str,
        content_ref: &str,
        uploaded_by: &str,
    ) -> Result<DocumentId, ClaimError> {
        let idx = self.position(claim_id)?;
        Ok(self.claims[idx].add_document(name, document_type, content_ref, uploaded_by, &self.ctx))
    }

    /// Adds a free-text note to a claim
    pub fn add_note(
        &mut self,
        claim_id: ClaimId,
        content: &str,
        created_by: &str,
    ) -> Result<NoteId, ClaimError> {
        let idx = self.position(claim_id)?;
        Ok(self.claims[idx].add_note(content, created_by, &self.ctx))
    }

    /// Updates a claim's estimated or actual value
    pub fn update_claim_value(
        &mut self,
        claim_id: ClaimId,
        new_value: Decimal,
        kind: ValueKind,
        updated_by: &str,
    ) -> Result<(), ClaimError> {
        let idx = self.position(claim_id)?;
        self.claims[idx].update_value(new_value, kind, updated_by, &self.ctx);
        Ok(())
    }

    /// Records a coverage decision on a claim
    pub fn verify_coverage(
        &mut self,
        claim_id: ClaimId,
        is_covered: bool,
        reason: &str,
        verified_by: &str,
    ) -> Result<(), ClaimError> {
        let idx = self.position(claim_id)?;
        self.claims[idx].verify_coverage(is_covered, reason, verified_by, &self.ctx)
    }

    /// Calculates and records a claim settlement
    ///
    /// On success the settlement becomes the claim's actual value.
    ///
    /// # Arguments
    ///
    /// * `claim_id` - Claim to settle
    /// * `damages` - Damage amounts by category
    /// * `deductible` - Policy deductible
    /// * `coverage_limit` - Maximum payout
    ///
    /// # Errors
    ///
    /// Returns `CoverageNotVerified` carrying the damage total if coverage
    /// has not been verified yet; the claim is not changed.
    pub fn calculate_settlement(
        &mut self,
        claim_id: ClaimId,
        damages: &BTreeMap<String, Decimal>,
        deductible: Decimal,
        coverage_limit: Decimal,
    ) -> Result<SettlementResult, ClaimError> {
        let idx = self.position(claim_id)?;
        let result = compute_settlement(damages, deductible, coverage_limit);

        let claim = &mut self.claims[idx];
        if !claim.coverage_verified() {
            tracing::warn!(%claim_id, total_damages = %result.total_damages, "Settlement requested before coverage verification");
            return Err(ClaimError::CoverageNotVerified {
                total_damages: result.total_damages,
            });
        }

        claim.update_value(result.settlement_amount, ValueKind::Actual, SYSTEM_ACTOR, &self.ctx);
        Ok(result)
    }

    /// Moves a claim to investigation and hands it to a fraud investigator
    ///
    /// The claim is reassigned to the first adjuster specialized in `fraud`,
    /// if any is configured.
    pub fn flag_for_investigation(
        &mut self,
        claim_id: ClaimId,
        reason: &str,
        flagged_by: &str,
    ) -> Result<(), ClaimError> {
        let idx = self.position(claim_id)?;
        let investigator = self.adjusters.fraud_investigator().map(|a| a.id.clone());

        let claim = &mut self.claims[idx];
        claim.update_status(ClaimStatus::Investigating, flagged_by, &self.ctx)?;
        claim.add_note(format!("Flagged for investigation: {reason}"), flagged_by, &self.ctx);

        match investigator {
            Some(investigator) => claim.assign_adjuster(&investigator, SYSTEM_ACTOR, &self.ctx)?,
            None => tracing::warn!(%claim_id, "No fraud investigator configured"),
        }

        tracing::warn!(%claim_id, reason, "Claim flagged for investigation");
        Ok(())
    }

    /// Closes a claim with a resolution
    pub fn close_claim(
        &mut self,
        claim_id: ClaimId,
        resolution: &str,
        closed_by: &str,
    ) -> Result<(), ClaimError> {
        let idx = self.position(claim_id)?;
        let claim = &mut self.claims[idx];
        claim.update_status(ClaimStatus::Closed, closed_by, &self.ctx)?;
        claim.add_note(format!("Claim closed: {resolution}"), closed_by, &self.ctx);
        tracing::info!(%claim_id, resolution, "Claim closed");
        Ok(())
    }

    pub fn get_claims_by_status(&self, status: ClaimStatus) -> Vec<&Claim> {
        self.claims().filter(|c| c.status() == status).collect()
    }

    pub fn get_claims_by_adjuster(&self, adjuster_id: &str) -> Vec<&Claim> {
        self.claims()
            .filter(|c| c.assigned_adjuster() == Some(adjuster_id))
            .collect()
    }

    pub fn get_claims_by_policy(&self, policy_number: &str) -> Vec<&Claim> {
        self.claims()
            .filter(|c| c.policy_number() == policy_number)
            .collect()
    }

    /// Compliance counts per state as of the context clock
    pub fn get_compliance_report(&self) -> ComplianceReport {
        let now = self.ctx.now();
        let mut report = ComplianceReport::new();
        for claim in &self.claims {
            let status = claim.check_compliance_status(now);
            report
                .entry(claim.state_code().to_string())
                .or_default()
                .record(status.is_compliant);
        }
        report
    }

    fn position(&self, claim_id: ClaimId) -> Result<usize, ClaimError> {
        self.index.get(&claim_id).copied().ok_or_else(|| {
            tracing::error!(%claim_id, "Claim not found");
            ClaimError::ClaimNotFound(claim_id)
        })
    }

    fn workload(&self, adjuster_id: &str) -> usize {
        self.claims
            .iter()
            .filter(|c| c.assigned_adjuster() == Some(adjuster_id))
            .count()
    }

    /// Picks the least-loaded adjuster for the claim's type
    ///
    /// Falls back to the whole roster when nobody specializes in the type.
    /// Ties go to the adjuster listed first.
    fn auto_assign_adjuster(&mut self, idx: usize) {
        if self.adjusters.is_empty() {
            tracing::warn!("No adjusters available for assignment");
            return;
        }

        let claim_type = self.claims[idx].claim_type();
        let mut candidates = self.adjusters.specialists_for(claim_type);
        if candidates.is_empty() {
            tracing::warn!(claim_type, "No specialized adjusters found");
            candidates = self.adjusters.iter().collect();
        }

        let mut chosen: Option<(&str, usize)> = None;
        for adjuster in candidates {
            let load = self.workload(&adjuster.id);
            if chosen.map_or(true, |(_, best)| load < best) {
                chosen = Some((adjuster.id.as_str(), load));
            }
        }
        let Some((adjuster_id, _)) = chosen else {
            return;
        };
        let adjuster_id = adjuster_id.to_string();

        let claim = &mut self.claims[idx];
        match claim.assign_adjuster(&adjuster_id, SYSTEM_ACTOR, &self.ctx) {
            Ok(()) => tracing::info!(claim_id = %claim.id(), %adjuster_id, "Claim auto-assigned"),
            Err(error) => tracing::warn!(claim_id = %claim.id(), %error, "Auto-assignment skipped"),
        }
    }

    /// Records fraud signals and escalates repeated claims on one policy
    fn validate_claim(&mut self, idx: usize) {
        let claim = &self.claims[idx];
        let claim_id = claim.id();
        let policy_claims = self.get_claims_by_policy(claim.policy_number()).len();
        let signals = detect_signals(claim, policy_claims, &self.fraud_thresholds);

        let mut escalate = false;
        for signal in &signals {
            let note = signal.note();
            tracing::warn!(%claim_id, "{}", note);
            self.claims[idx].add_note(note, SYSTEM_ACTOR, &self.ctx);
            if let FraudSignal::MultipleClaims { escalate: true, .. } = signal {
                escalate = true;
            }
        }

        if escalate {
            let reason = format!("Excessive claims on policy: {policy_claims} in the past year");
            if let Err(error) = self.flag_for_investigation(claim_id, &reason, SYSTEM_ACTOR) {
                tracing::warn!(%claim_id, %error, "Escalation to investigation failed");
            }
        }
    }
}
