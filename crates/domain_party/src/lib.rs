//! Party Management Domain
//!
//! This crate models the policy holder: personal details, credit score,
//! prior claims and the policies written for them. The holder's risk factor
//! feeds premium rating in `domain_policy`.
//!
//! # Risk Factor
//!
//! ```text
//! risk = credit tier multiplier x (1 + 0.1 x claims in the trailing 3 years)
//! ```
//!
//! Both the holder's age and risk factor are derived on demand against a
//! reference instant and never cached.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use domain_party::PolicyHolder;
//! use rust_decimal_macros::dec;
//!
//! let holder = PolicyHolder::new(
//!     "John Doe",
//!     "123 Main St, Anytown, USA 12345",
//!     NaiveDate::from_ymd_opt(1980, 5, 15).unwrap(),
//!     720,
//! );
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
//! assert_eq!(holder.age_at(now), 44);
//! assert_eq!(holder.risk_factor_at(now), dec!(0.95));
//! ```

pub mod claim_history;
pub mod policy_holder;
pub mod risk;

pub use claim_history::ClaimRecord;
pub use policy_holder::{PolicyHolder, PolicyRecord, PolicyRecordStatus};
pub use risk::{claims_multiplier, credit_multiplier, CreditTier};
