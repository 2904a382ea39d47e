//! Shared test support for the claims workspace
//!
//! Everything here runs on a fixed reference instant (2024-06-01 09:00 UTC)
//! and sequential identifiers unless a test asks otherwise.
//!
//! - `fixtures`: reference dates, contexts, the adjuster roster, claimants
//! - `builders`: policy holders, claim requests and processors with defaults
//! - `assertions`: decimal tolerance, audit notes and status checks
//! - `generators`: proptest strategies for scores, ages and amounts

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
