//! Core Kernel - Foundational types and utilities for the claims core
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers for claims, documents, notes and policy records
//! - Ports for the current time and identifier generation, injectable for tests
//! - Calendar helpers for ages and elapsed whole days
//! - Currency rounding and formatting over `rust_decimal`

pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use identifiers::{ClaimId, DocumentId, NoteId, PolicyRecordId};
pub use money::{format_currency, round_currency};
pub use ports::{
    Clock, FixedClock, IdGenerator, RandomIdGenerator, SequentialIdGenerator, SystemClock,
};
pub use temporal::{age_in_years, whole_days_between};
