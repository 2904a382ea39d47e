//! Claim aggregate
//!
//! A claim carries its own audit trail: every mutating operation appends a
//! [`ClaimNote`] and moves `last_updated` to the time of the change.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{format_currency, whole_days_between, ClaimId, DocumentId, NoteId};
use crate::compliance::{ComplianceStatus, StateRequirements, DEFAULT_STATE_CODE};
use crate::context::ClaimContext;
use crate::document::{ClaimDocument, ClaimNote};
use crate::error::ClaimError;
use crate::status::ClaimStatus;

/// Actor recorded for changes made by the system itself
pub const SYSTEM_ACTOR: &str = "SYSTEM";

/// Everything needed to open a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub policy_number: String,
    /// Line of business, e.g. `AUTO`, `HOME`, `COMMERCIAL`
    pub claim_type: String,
    pub incident_date: DateTime<Utc>,
    pub reported_date: DateTime<Utc>,
    pub description: String,
    /// Claimant details; the `state` entry selects the compliance profile
    pub claimant_info: BTreeMap<String, String>,
    pub estimated_value: Decimal,
}

/// Which claim value an update applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Estimated,
    Actual,
}

impl ValueKind {
    fn label(&self) -> &'static str {
        match self {
            ValueKind::Estimated => "Estimated",
            ValueKind::Actual => "Actual",
        }
    }
}

/// A reported insurance claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    id: ClaimId,
    policy_number: String,
    claim_type: String,
    incident_date: DateTime<Utc>,
    reported_date: DateTime<Utc>,
    description: String,
    claimant_info: BTreeMap<String, String>,
    estimated_value: Decimal,
    actual_value: Decimal,
    status: ClaimStatus,
    assigned_adjuster: Option<String>,
    coverage_verified: bool,
    documents: Vec<ClaimDocument>,
    notes: Vec<ClaimNote>,
    state_code: String,
    last_updated: DateTime<Utc>,
}

impl Claim {
    /// Opens a new claim in `NEW` status
    ///
    /// The claim starts with a "Claim created" note by `SYSTEM`.
    pub fn open(request: ClaimRequest, ctx: &ClaimContext) -> Self {
        let state_code = request
            .claimant_info
            .get("state")
            .cloned()
            .unwrap_or_else(|| DEFAULT_STATE_CODE.to_string());

        let mut claim = Self {
            id: ClaimId::from_uuid(ctx.next_id()),
            policy_number: request.policy_number,
            claim_type: request.claim_type,
            incident_date: request.incident_date,
            reported_date: request.reported_date,
            description: request.description,
            claimant_info: request.claimant_info,
            estimated_value: request.estimated_value,
            actual_value: Decimal::ZERO,
            status: ClaimStatus::New,
            assigned_adjuster: None,
            coverage_verified: false,
            documents: Vec::new(),
            notes: Vec::new(),
            state_code,
            last_updated: request.reported_date,
        };
        claim.add_note("Claim created", SYSTEM_ACTOR, ctx);

        tracing::info!(
            claim_id = %claim.id,
            policy_number = %claim.policy_number,
            claim_type = %claim.claim_type,
            "New claim created"
        );
        claim
    }

    pub fn id(&self) -> ClaimId {
        self.id
    }

    pub fn policy_number(&self) -> &str {
        &self.policy_number
    }

    pub fn claim_type(&self) -> &str {
        &self.claim_type
    }

    pub fn incident_date(&self) -> DateTime<Utc> {
        self.incident_date
    }

    pub fn reported_date(&self) -> DateTime<Utc> {
        self.reported_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn claimant_info(&self) -> &BTreeMap<String, String> {
        &self.claimant_info
    }

    pub fn estimated_value(&self) -> Decimal {
        self.estimated_value
    }

    pub fn actual_value(&self) -> Decimal {
        self.actual_value
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn assigned_adjuster(&self) -> Option<&str> {
        self.assigned_adjuster.as_deref()
    }

    pub fn coverage_verified(&self) -> bool {
        self.coverage_verified
    }

    pub fn documents(&self) -> &[ClaimDocument] {
        &self.documents
    }

    /// Audit trail, oldest first
    pub fn notes(&self) -> &[ClaimNote] {
        &self.notes
    }

    /// Two-letter state code, or `DEFAULT` when the claimant gave none
    pub fn state_code(&self) -> &str {
        &self.state_code
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Moves the claim to a new status
    ///
    /// # Errors
    ///
    /// Returns `InvalidStatusTransition` if the context's transition policy
    /// refuses the move; the claim is left untouched.
    pub fn update_status(
        &mut self,
        new_status: ClaimStatus,
        updated_by: &str,
        ctx: &ClaimContext,
    ) -> Result<(), ClaimError> {
        let old_status = self.status;
        if !ctx.permits(old_status, new_status) {
            tracing::error!(
                claim_id = %self.id,
                from = %old_status,
                to = %new_status,
                "Status transition refused"
            );
            return Err(ClaimError::InvalidStatusTransition {
                from: old_status,
                to: new_status,
            });
        }

        self.status = new_status;
        self.last_updated = ctx.now();
        self.add_note(
            format!("Status changed from {old_status} to {new_status}"),
            updated_by,
            ctx,
        );
        tracing::info!(claim_id = %self.id, status = %new_status, "Claim status updated");
        Ok(())
    }

    /// Assigns or reassigns the claim to an adjuster
    ///
    /// A first assignment also moves the claim to `ASSIGNED`; a
    /// reassignment leaves the status alone.
    pub fn assign_adjuster(
        &mut self,
        adjuster_id: &str,
        updated_by: &str,
        ctx: &ClaimContext,
    ) -> Result<(), ClaimError> {
        let note = match self.assigned_adjuster.as_deref() {
            Some(previous) => format!("Reassigned from adjuster {previous} to {adjuster_id}"),
            None => {
                self.update_status(ClaimStatus::Assigned, updated_by, ctx)?;
                format!("Assigned to adjuster {adjuster_id}")
            }
        };

        self.assigned_adjuster = Some(adjuster_id.to_string());
        self.last_updated = ctx.now();
        tracing::info!(claim_id = %self.id, adjuster_id, "{}", note);
        self.add_note(note, updated_by, ctx);
        Ok(())
    }

    /// Attaches a document and returns its id
    pub fn add_document(
        &mut self,
        name: &str,
        document_type: &str,
        content_ref: &str,
        uploaded_by: &str,
        ctx: &ClaimContext,
    ) -> DocumentId {
        let document = ClaimDocument {
            id: DocumentId::from_uuid(ctx.next_id()),
            name: name.to_string(),
            document_type: document_type.to_string(),
            content_ref: content_ref.to_string(),
            uploaded_by: uploaded_by.to_string(),
            upload_date: ctx.now(),
        };
        let id = document.id;

        self.last_updated = document.upload_date;
        self.documents.push(document);
        self.add_note(
            format!("Document added: {name} ({document_type})"),
            uploaded_by,
            ctx,
        );
        tracing::info!(claim_id = %self.id, document_id = %id, "Document added to claim");
        id
    }

    /// Appends a note to the audit trail and returns its id
    pub fn add_note(
        &mut self,
        content: impl Into<String>,
        created_by: &str,
        ctx: &ClaimContext,
    ) -> NoteId {
        let note = ClaimNote {
            id: NoteId::from_uuid(ctx.next_id()),
            content: content.into(),
            created_by: created_by.to_string(),
            timestamp: ctx.now(),
        };
        let id = note.id;

        tracing::debug!(claim_id = %self.id, content = %note.content, "Note added to claim");
        self.last_updated = note.timestamp;
        self.notes.push(note);
        id
    }

    /// Replaces the estimated or actual value
    pub fn update_value(
        &mut self,
        new_value: Decimal,
        kind: ValueKind,
        updated_by: &str,
        ctx: &ClaimContext,
    ) {
        let slot = match kind {
            ValueKind::Estimated => &mut self.estimated_value,
            ValueKind::Actual => &mut self.actual_value,
        };
        let old_value = std::mem::replace(slot, new_value);

        let note = format!(
            "{} value updated from {} to {}",
            kind.label(),
            format_currency(old_value),
            format_currency(new_value)
        );
        self.last_updated = ctx.now();
        tracing::info!(claim_id = %self.id, "{}", note);
        self.add_note(note, updated_by, ctx);
    }

    /// Records the coverage decision
    ///
    /// Verification always counts as done; `is_covered` is its outcome. A
    /// claim found not covered is also moved to `DENIED`.
    pub fn verify_coverage(
        &mut self,
        is_covered: bool,
        reason: &str,
        verified_by: &str,
        ctx: &ClaimContext,
    ) -> Result<(), ClaimError> {
        let note = if is_covered {
            format!("Coverage verified: {reason}")
        } else {
            self.update_status(ClaimStatus::Denied, verified_by, ctx)?;
            format!("Coverage denied: {reason}")
        };

        self.coverage_verified = true;
        self.last_updated = ctx.now();
        tracing::info!(claim_id = %self.id, is_covered, "{}", note);
        self.add_note(note, verified_by, ctx);
        Ok(())
    }

    /// Time elapsed since the claim was reported
    pub fn time_since_reported(&self, now: DateTime<Utc>) -> Duration {
        now - self.reported_date
    }

    /// Checks the claim against its state's regulatory deadlines as of `now`
    ///
    /// Read-only: the same claim and instant always give the same result.
    pub fn check_compliance_status(&self, now: DateTime<Utc>) -> ComplianceStatus {
        let requirements = StateRequirements::for_state(&self.state_code);
        let days_since_reported = whole_days_between(self.reported_date, now);

        let acknowledgment_compliant = self.status != ClaimStatus::New
            || days_since_reported <= requirements.time_to_acknowledge;
        let decision_compliant =
            self.status.is_decision() || days_since_reported <= requirements.time_to_decision;

        let required_documents = requirements.documentation_level.min_documents();
        let documentation_compliant = self.documents.len() >= required_documents;

        ComplianceStatus {
            is_compliant: acknowledgment_compliant && decision_compliant && documentation_compliant,
            acknowledgment_compliant,
            decision_compliant,
            documentation_compliant,
            days_since_reported,
            required_acknowledgment_days: requirements.time_to_acknowledge,
            required_decision_days: requirements.time_to_decision,
            required_documents,
            actual_documents: self.documents.len(),
            state: self.state_code.clone(),
        }
    }

    /// Full structured export of the claim
    pub fn snapshot(&self) -> ClaimSnapshot {
        ClaimSnapshot {
            claim_id: self.id,
            policy_number: self.policy_number.clone(),
            claim_type: self.claim_type.clone(),
            incident_date: self.incident_date,
            reported_date: self.reported_date,
            description: self.description.clone(),
            claimant_info: self.claimant_info.clone(),
            estimated_value: self.estimated_value,
            actual_value: self.actual_value,
            status: self.status,
            status_description: self.status.description().to_string(),
            assigned_adjuster: self.assigned_adjuster.clone(),
            coverage_verified: self.coverage_verified,
            documents: self.documents.clone(),
            notes: self.notes.clone(),
            state_code: self.state_code.clone(),
            last_updated: self.last_updated,
        }
    }
}

/// Serializable view of a claim
///
/// Timestamps serialize as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSnapshot {
    pub claim_id: ClaimId,
    pub policy_number: String,
    pub claim_type: String,
    pub incident_date: DateTime<Utc>,
    pub reported_date: DateTime<Utc>,
    pub description: String,
    pub claimant_info: BTreeMap<String, String>,
    pub estimated_value: Decimal,
    pub actual_value: Decimal,
    pub status: ClaimStatus,
    pub status_description: String,
    pub assigned_adjuster: Option<String>,
    pub coverage_verified: bool,
    pub documents: Vec<ClaimDocument>,
    pub notes: Vec<ClaimNote>,
    pub state_code: String,
    pub last_updated: DateTime<Utc>,
}
