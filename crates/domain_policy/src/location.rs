//! Location risk categories
//!
//! ZIP codes map to a rating category by membership in three fixed sets.
//! Anything not listed, including malformed input, is `MEDIUM_RISK`.

use std::fmt;

use serde::{Deserialize, Serialize};

const COASTAL_ZIPS: [&str; 6] = ["33109", "33139", "90210", "90265", "92007", "33480"];
const HIGH_RISK_ZIPS: [&str; 5] = ["77001", "77002", "64101", "70112", "95833"];
const LOW_RISK_ZIPS: [&str; 5] = ["10001", "60601", "75201", "80202", "98101"];

/// Location risk category used by home rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationRisk {
    LowRisk,
    MediumRisk,
    HighRisk,
    Coastal,
}

impl LocationRisk {
    /// Returns the rating table key
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationRisk::LowRisk => "LOW_RISK",
            LocationRisk::MediumRisk => "MEDIUM_RISK",
            LocationRisk::HighRisk => "HIGH_RISK",
            LocationRisk::Coastal => "COASTAL",
        }
    }
}

impl fmt::Display for LocationRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determines the location risk category for a ZIP code
pub fn get_location_risk(zip_code: &str) -> LocationRisk {
    if COASTAL_ZIPS.contains(&zip_code) {
        LocationRisk::Coastal
    } else if HIGH_RISK_ZIPS.contains(&zip_code) {
        LocationRisk::HighRisk
    } else if LOW_RISK_ZIPS.contains(&zip_code) {
        LocationRisk::LowRisk
    } else {
        LocationRisk::MediumRisk
    }
}
