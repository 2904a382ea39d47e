//! Claims Management Domain
//!
//! This crate manages Property & Casualty claims from first report through
//! settlement and closure.
//!
//! # Claim Lifecycle
//!
//! ```text
//! NEW -> ASSIGNED -> INVESTIGATING -> APPROVED / DENIED -> CLOSED -> REOPENED
//! ```
//!
//! # Components
//!
//! - **Claim**: status, audit trail, documents, valuation, coverage and
//!   state compliance checks
//! - **ClaimsProcessor**: creation, adjuster workload balancing, fraud
//!   signals, settlement and reporting
//! - **Valuation**: depreciation and business interruption estimates

pub mod adjuster;
pub mod claim;
pub mod compliance;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod fraud;
pub mod processor;
pub mod settlement;
pub mod status;
pub mod valuation;

pub use adjuster::{Adjuster, AdjusterRoster, FRAUD_SPECIALIZATION};
pub use claim::{Claim, ClaimRequest, ClaimSnapshot, ValueKind, SYSTEM_ACTOR};
pub use compliance::{
    ComplianceReport, ComplianceStatus, DocumentationLevel, StateComplianceSummary,
    StateRequirements, DEFAULT_STATE_CODE,
};
pub use config::ProcessorConfig;
pub use context::ClaimContext;
pub use document::{ClaimDocument, ClaimNote};
pub use error::ClaimError;
pub use fraud::{detect_signals, FraudSignal, FraudThresholds};
pub use processor::ClaimsProcessor;
pub use settlement::{compute_settlement, SettlementResult};
pub use status::{ClaimStatus, PermissiveTransitions, TransitionPolicy};
pub use valuation::{
    calculate_depreciation, depreciation_rate, estimate_business_interruption,
    DEFAULT_FIXED_EXPENSES_PCT,
};
