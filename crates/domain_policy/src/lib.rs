//! Policy Rating Domain
//!
//! This crate prices Property & Casualty policies and hosts the
//! underwriting helpers that sit next to rating.
//!
//! # Components
//!
//! - **Rating tables**: read-only base rates and factor bands per line
//! - **Premium calculator**: HOME and AUTO premiums over the tables
//! - **Location risk**: ZIP code to rating category
//! - **Quotes**: annual premium to monthly payment with a 30 day window
//! - **Policy numbers**: `[state]-[year]-[id]-[line]` format check
//! - **Underwriting**: flood risk scoring
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{PremiumCalculator, RatingTables, get_location_risk};
//!
//! let calculator = PremiumCalculator::new(RatingTables::default(), clock);
//! let location = get_location_risk("90210");
//! let premium = calculator.calculate_home_premium(
//!     dec!(350000), 12, "MASONRY", location.as_str(), &holder,
//! );
//! let quote = calculator.quote(premium, "HO-3", dec!(1000), limits);
//! ```

pub mod error;
pub mod location;
pub mod policy_number;
pub mod premium;
pub mod quote;
pub mod rating_tables;
pub mod underwriting;

pub use error::PolicyError;
pub use location::{get_location_risk, LocationRisk};
pub use policy_number::validate_policy_number;
pub use premium::PremiumCalculator;
pub use quote::{format_policy_quote, PolicyQuote, QUOTE_VALIDITY_DAYS};
pub use rating_tables::{AgeBand, AgeBands, AutoRatingTable, HomeRatingTable, RatingTables};
pub use underwriting::{calculate_flood_risk_score, FloodRiskCategory, FloodRiskInput};
