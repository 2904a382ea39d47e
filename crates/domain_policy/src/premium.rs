//! Premium calculation for HOME and AUTO lines
//!
//! Both calculations are a straight multiplicative chain over the rating
//! tables, finished with the policy holder's risk factor and rounded to
//! cents once at the end. Inputs are not validated: negative values flow
//! through the arithmetic and unknown categories rate as 1.0.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{round_currency, Clock, SystemClock};
use domain_party::PolicyHolder;
use crate::quote::{format_policy_quote, PolicyQuote};
use crate::rating_tables::RatingTables;

/// Home values are rated per this many dollars
const HOME_VALUE_UNIT: Decimal = dec!(100000);
const HOME_VALUE_FACTOR: Decimal = dec!(0.9);

/// Vehicle values are rated per this many dollars
const AUTO_VALUE_UNIT: Decimal = dec!(20000);
const AUTO_VALUE_FACTOR: Decimal = dec!(0.8);

/// Prices HOME and AUTO policies
///
/// The calculator owns its rating tables and the clock used to derive the
/// holder's age and risk factor.
///
/// # Example
///
/// ```rust,ignore
/// let calculator = PremiumCalculator::new(RatingTables::default(), clock);
/// let premium = calculator.calculate_home_premium(
///     dec!(350000), 12, "MASONRY", LocationRisk::MediumRisk.as_str(), &holder,
/// );
/// ```
#[derive(Clone)]
pub struct PremiumCalculator {
    tables: RatingTables,
    clock: Arc<dyn Clock>,
}

impl PremiumCalculator {
    /// Creates a calculator over the given tables and clock
    pub fn new(tables: RatingTables, clock: Arc<dyn Clock>) -> Self {
        Self { tables, clock }
    }

    /// Returns the rating tables in use
    pub fn tables(&self) -> &RatingTables {
        &self.tables
    }

    /// Calculates the annual premium for a homeowner's policy
    ///
    /// # Arguments
    ///
    /// * `property_value` - Current market value of the property
    /// * `property_age` - Age of the property in years
    /// * `construction_type` - Construction key, e.g. `FRAME`, `MASONRY`
    /// * `location_risk` - Location key, e.g. `COASTAL`
    /// * `policy_holder` - The insured
    ///
    /// # Returns
    ///
    /// Annual premium rounded to cents
    pub fn calculate_home_premium(
        &self,
        property_value: Decimal,
        property_age: i64,
        construction_type: &str,
        location_risk: &str,
        policy_holder: &PolicyHolder,
    ) -> Decimal {
        let table = &self.tables.home;

        let value_factor = property_value / HOME_VALUE_UNIT * HOME_VALUE_FACTOR;
        let age_factor = table.age_factors.factor_for(property_age);
        let construction_factor = table.construction_factor(construction_type);
        let location_factor = table.location_factor(location_risk);
        let risk_factor = policy_holder.risk_factor(self.clock.as_ref());

        let premium = table.base_rate
            * value_factor
            * age_factor
            * construction_factor
            * location_factor
            * risk_factor;

        tracing::debug!(
            %property_value,
            property_age,
            construction_type,
            location_risk,
            %age_factor,
            %risk_factor,
            %premium,
            "Home premium calculated"
        );

        round_currency(premium)
    }

    /// Calculates the annual premium for an auto policy
    ///
    /// # Arguments
    ///
    /// * `vehicle_value` - Current market value of the vehicle
    /// * `vehicle_age` - Age of the vehicle in years
    /// * `is_safe_driver` - Driver holds a safe driver certification
    /// * `has_accidents` - Driver had accidents in the past 3 years
    /// * `policy_holder` - The insured, whose age selects the driver band
    ///
    /// The safe driver discount and accident surcharge are independent and
    /// may both apply.
    ///
    /// # Returns
    ///
    /// Annual premium rounded to cents
    pub fn calculate_auto_premium(
        &self,
        vehicle_value: Decimal,
        vehicle_age: i64,
        is_safe_driver: bool,
        has_accidents: bool,
        policy_holder: &PolicyHolder,
    ) -> Decimal {
        let table = &self.tables.auto;
        let now = self.clock.now();

        let mut premium = table.base_rate * (vehicle_value / AUTO_VALUE_UNIT * AUTO_VALUE_FACTOR);
        premium *= table.vehicle_age_factors.factor_for(vehicle_age);

        let driver_age = policy_holder.age_at(now);
        premium *= table.driver_age_factors.factor_for(i64::from(driver_age));

        if is_safe_driver {
            premium *= Decimal::ONE - table.safe_driver_discount;
        }
        if has_accidents {
            premium *= Decimal::ONE + table.accident_surcharge;
        }

        let risk_factor = policy_holder.risk_factor_at(now);
        premium *= risk_factor;

        tracing::debug!(
            %vehicle_value,
            vehicle_age,
            driver_age,
            is_safe_driver,
            has_accidents,
            %risk_factor,
            %premium,
            "Auto premium calculated"
        );

        round_currency(premium)
    }

    /// Formats a quote dated today according to the calculator's clock
    pub fn quote(
        &self,
        premium: Decimal,
        coverage_type: &str,
        deductible: Decimal,
        policy_limits: BTreeMap<String, Decimal>,
    ) -> PolicyQuote {
        format_policy_quote(
            premium,
            coverage_type,
            deductible,
            policy_limits,
            self.clock.now().date_naive(),
        )
    }
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::new(RatingTables::default(), Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for PremiumCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PremiumCalculator")
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}
