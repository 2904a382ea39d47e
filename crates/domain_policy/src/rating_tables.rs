//! Premium rating tables
//!
//! Rating tables are read-only configuration owned by a
//! [`PremiumCalculator`](crate::premium::PremiumCalculator). The `Default`
//! tables are the standard HOME and AUTO factors; alternate tables can be
//! loaded from JSON for testing or product variants.
//!
//! # Age bands
//!
//! Age-based factors are an ordered list of bands, each inclusive of its
//! upper bound. The first band whose bound is at or above the age applies,
//! so ages below the first band's nominal range fall into the first band.
//!
//! ```text
//! HOME property age   0-5 => 1.0   6-15 => 1.1   16-30 => 1.2   31+ => 1.3
//! AUTO vehicle age    0-2 => 1.3   3-5  => 1.0   6-10  => 0.9   11+ => 0.8
//! AUTO driver age   16-25 => 1.8  26-40 => 1.0  41-65  => 0.9   66+ => 1.1
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// One band of an age-banded factor table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBand {
    /// Display label, e.g. `6-15`
    pub label: String,
    /// Inclusive upper bound; `None` for the open-ended last band
    pub up_to: Option<i64>,
    /// Multiplier applied for ages in this band
    pub factor: Decimal,
}

impl AgeBand {
    pub fn bounded(label: &str, up_to: i64, factor: Decimal) -> Self {
        Self {
            label: label.to_string(),
            up_to: Some(up_to),
            factor,
        }
    }

    pub fn open(label: &str, factor: Decimal) -> Self {
        Self {
            label: label.to_string(),
            up_to: None,
            factor,
        }
    }

    fn covers(&self, age: i64) -> bool {
        self.up_to.map_or(true, |max| age <= max)
    }
}

/// Ordered age bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeBands(Vec<AgeBand>);

impl AgeBands {
    pub fn new(bands: Vec<AgeBand>) -> Self {
        Self(bands)
    }

    /// Returns the band covering `age`, if any
    pub fn band_for(&self, age: i64) -> Option<&AgeBand> {
        self.0.iter().find(|band| band.covers(age))
    }

    /// Returns the factor for `age`, or 1.0 when no band covers it
    pub fn factor_for(&self, age: i64) -> Decimal {
        self.band_for(age).map_or(Decimal::ONE, |band| band.factor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgeBand> {
        self.0.iter()
    }

    fn validate(&self, table: &str) -> Result<(), PolicyError> {
        let mut previous: Option<i64> = None;
        for (index, band) in self.0.iter().enumerate() {
            let is_last = index + 1 == self.0.len();
            match band.up_to {
                None if !is_last => {
                    return Err(PolicyError::InvalidRatingTable(format!(
                        "{table}: open-ended band '{}' must be last",
                        band.label
                    )));
                }
                Some(bound) => {
                    if previous.is_some_and(|prev| bound <= prev) {
                        return Err(PolicyError::InvalidRatingTable(format!(
                            "{table}: band '{}' is out of order",
                            band.label
                        )));
                    }
                    previous = Some(bound);
                }
                None => {}
            }
            if band.factor.is_sign_negative() {
                return Err(PolicyError::InvalidRatingTable(format!(
                    "{table}: band '{}' has a negative factor",
                    band.label
                )));
            }
        }
        Ok(())
    }
}

/// Factors for homeowner's policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRatingTable {
    pub base_rate: Decimal,
    pub age_factors: AgeBands,
    pub construction_types: BTreeMap<String, Decimal>,
    pub location_factors: BTreeMap<String, Decimal>,
}

impl HomeRatingTable {
    /// Factor for a construction type; unknown types are neutral
    pub fn construction_factor(&self, construction_type: &str) -> Decimal {
        self.construction_types
            .get(construction_type)
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Factor for a location risk category; unknown categories are neutral
    pub fn location_factor(&self, location_risk: &str) -> Decimal {
        self.location_factors
            .get(location_risk)
            .copied()
            .unwrap_or(Decimal::ONE)
    }
}

impl Default for HomeRatingTable {
    fn default() -> Self {
        Self {
            base_rate: dec!(500.0),
            age_factors: AgeBands::new(vec![
                AgeBand::bounded("0-5", 5, dec!(1.0)),
                AgeBand::bounded("6-15", 15, dec!(1.1)),
                AgeBand::bounded("16-30", 30, dec!(1.2)),
                AgeBand::open("31+", dec!(1.3)),
            ]),
            construction_types: BTreeMap::from([
                ("FRAME".to_string(), dec!(1.0)),
                ("MASONRY".to_string(), dec!(0.9)),
                ("FIRE_RESISTANT".to_string(), dec!(0.8)),
            ]),
            location_factors: BTreeMap::from([
                ("LOW_RISK".to_string(), dec!(0.8)),
                ("MEDIUM_RISK".to_string(), dec!(1.0)),
                ("HIGH_RISK".to_string(), dec!(1.5)),
                ("COASTAL".to_string(), dec!(1.7)),
            ]),
        }
    }
}

/// Factors for auto policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRatingTable {
    pub base_rate: Decimal,
    pub vehicle_age_factors: AgeBands,
    pub driver_age_factors: AgeBands,
    /// Fractional discount for certified safe drivers
    pub safe_driver_discount: Decimal,
    /// Fractional surcharge for drivers with recent accidents
    pub accident_surcharge: Decimal,
}

impl Default for AutoRatingTable {
    fn default() -> Self {
        Self {
            base_rate: dec!(800.0),
            vehicle_age_factors: AgeBands::new(vec![
                AgeBand::bounded("0-2", 2, dec!(1.3)),
                AgeBand::bounded("3-5", 5, dec!(1.0)),
                AgeBand::bounded("6-10", 10, dec!(0.9)),
                AgeBand::open("11+", dec!(0.8)),
            ]),
            driver_age_factors: AgeBands::new(vec![
                AgeBand::bounded("16-25", 25, dec!(1.8)),
                AgeBand::bounded("26-40", 40, dec!(1.0)),
                AgeBand::bounded("41-65", 65, dec!(0.9)),
                AgeBand::open("66+", dec!(1.1)),
            ]),
            safe_driver_discount: dec!(0.15),
            accident_surcharge: dec!(0.25),
        }
    }
}

/// Rating tables for every line of business
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingTables {
    pub home: HomeRatingTable,
    pub auto: AutoRatingTable,
}

impl RatingTables {
    /// Parses and validates tables from a JSON document
    ///
    /// # Errors
    ///
    /// Returns error if the document does not parse or an age band list is
    /// out of order, has an open band before the end, or a negative factor
    pub fn from_json(document: &str) -> Result<Self, PolicyError> {
        let tables: RatingTables = serde_json::from_str(document)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Checks the structural rules for every band list
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.home.age_factors.validate("home.age_factors")?;
        self.auto.vehicle_age_factors.validate("auto.vehicle_age_factors")?;
        self.auto.driver_age_factors.validate("auto.driver_age_factors")?;
        Ok(())
    }
}
