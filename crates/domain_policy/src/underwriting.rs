//! Underwriting risk scores
//!
//! Flood risk is an additive score over four independent signals, used in
//! underwriting and claims assessment of flood-prone properties.
//!
//! | Signal | Points |
//! |---|---|
//! | Elevation < 10 ft / < 50 ft / < 100 ft | 40 / 20 / 10 |
//! | Distance to water < 0.1 mi / < 0.5 mi / < 1 mi | 30 / 20 / 10 |
//! | FEMA zone A, AE, AH, AO / B, X500 | 25 / 10 |
//! | Prior flood claims | 5 each, at most 20 |
//!
//! A score of 70 or more is `EXTREME`, 40 or more `HIGH`, 20 or more
//! `MODERATE`, anything lower `LOW`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const HIGH_RISK_ZONES: [&str; 4] = ["A", "AE", "AH", "AO"];
const MODERATE_RISK_ZONES: [&str; 2] = ["B", "X500"];
const PRIOR_CLAIM_POINTS: u32 = 5;
const PRIOR_CLAIM_CAP: u32 = 20;

/// Flood-relevant property characteristics
///
/// Missing values default to a benign property: 100 ft elevation, 10 miles
/// from water, zone `X`, no prior claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloodRiskInput {
    /// Elevation above sea level in feet
    pub elevation: Option<Decimal>,
    /// Distance to the nearest body of water in miles
    pub distance_to_water: Option<Decimal>,
    /// FEMA flood zone code
    pub flood_zone: Option<String>,
    /// Number of prior flood claims
    pub prior_claims: Option<u32>,
}

/// Flood risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloodRiskCategory {
    Low,
    Moderate,
    High,
    Extreme,
}

impl FloodRiskCategory {
    /// Classifies a flood risk score
    pub fn for_score(score: u32) -> Self {
        if score >= 70 {
            FloodRiskCategory::Extreme
        } else if score >= 40 {
            FloodRiskCategory::High
        } else if score >= 20 {
            FloodRiskCategory::Moderate
        } else {
            FloodRiskCategory::Low
        }
    }
}

/// Scores a property's flood risk
///
/// # Returns
///
/// The additive score and its category
pub fn calculate_flood_risk_score(property: &FloodRiskInput) -> (u32, FloodRiskCategory) {
    let elevation = property.elevation.unwrap_or(dec!(100));
    let distance = property.distance_to_water.unwrap_or(dec!(10));
    let flood_zone = property.flood_zone.as_deref().unwrap_or("X");
    let prior_claims = property.prior_claims.unwrap_or(0);

    let mut score = 0;

    score += if elevation < dec!(10) {
        40
    } else if elevation < dec!(50) {
        20
    } else if elevation < dec!(100) {
        10
    } else {
        0
    };

    score += if distance < dec!(0.1) {
        30
    } else if distance < dec!(0.5) {
        20
    } else if distance < dec!(1) {
        10
    } else {
        0
    };

    if HIGH_RISK_ZONES.contains(&flood_zone) {
        score += 25;
    } else if MODERATE_RISK_ZONES.contains(&flood_zone) {
        score += 10;
    }

    score += prior_claims
        .saturating_mul(PRIOR_CLAIM_POINTS)
        .min(PRIOR_CLAIM_CAP);

    (score, FloodRiskCategory::for_score(score))
}
