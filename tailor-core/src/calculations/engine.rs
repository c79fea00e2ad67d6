//! The pricing engine for the tailoring order workflow.
//!
//! All monetary derivation rules live here: unit-price lookup, order totals,
//! the 50% down-payment rule, remaining balance, order-record pricing, and
//! total-amount validation. The engine owns an injected [`PriceTable`] and a
//! [`PricingConfig`], and every computation method is total — malformed input
//! falls back to a documented default instead of failing, so a pricing
//! display stays usable while form data is transiently malformed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tailor_core::{GarmentType, PricingEngine};
//!
//! let engine = PricingEngine::default();
//!
//! let total = engine.order_total(GarmentType::Pants, 3);
//! assert_eq!(total, dec!(1950.00));
//!
//! let down = engine.down_payment(total);
//! assert_eq!(down, dec!(975.00));
//! assert_eq!(engine.remaining_balance(total, down), dec!(975.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{
    format_currency, normalize_quantity, parse_amount, round_half_up,
};
use crate::calculations::validation::{PricingValidation, VALIDATION_TOLERANCE};
use crate::models::{GarmentType, OrderPricing, OrderRecord, PriceTable};

/// Errors that can occur when constructing a [`PricingEngine`] with a
/// non-default configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingConfigError {
    /// The down-payment rate must be between 0 and 1.
    #[error("down payment rate must be between 0 and 1, got {0}")]
    InvalidDownPaymentRate(Decimal),
}

/// Configuration parameters for pricing derivations.
///
/// `Default` carries the shop's standard rules: a 50% down payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fraction of the total amount required upfront.
    pub down_payment_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            down_payment_rate: Decimal::new(50, 2),
        }
    }
}

impl PricingConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`PricingConfigError`] if `down_payment_rate` is outside [0, 1].
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        if self.down_payment_rate < Decimal::ZERO || self.down_payment_rate > Decimal::ONE {
            return Err(PricingConfigError::InvalidDownPaymentRate(
                self.down_payment_rate,
            ));
        }
        Ok(())
    }
}

/// Stateless pricing calculator over an immutable price table.
///
/// Construction is the only fallible surface; once built, every method
/// returns a value for every input.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    table: PriceTable,
    config: PricingConfig,
}

impl PricingEngine {
    /// Creates an engine over `table` with the standard 50% down-payment rule.
    pub fn new(table: PriceTable) -> Self {
        Self {
            table,
            config: PricingConfig::default(),
        }
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingConfigError`] if the configuration is invalid.
    pub fn with_config(
        table: PriceTable,
        config: PricingConfig,
    ) -> Result<Self, PricingConfigError> {
        config.validate()?;
        Ok(Self { table, config })
    }

    /// Unit price for a garment type.
    pub fn unit_price(
        &self,
        garment: GarmentType,
    ) -> Decimal {
        self.table.price(garment)
    }

    /// Unit price for a garment-type string from form input.
    ///
    /// Unrecognized or empty input resolves to the OTHERS price, never an
    /// error.
    pub fn unit_price_for(
        &self,
        garment: &str,
    ) -> Decimal {
        self.unit_price(GarmentType::from_input(garment))
    }

    /// Total order amount: unit price × quantity.
    ///
    /// A quantity of 0 is treated as absent and normalizes to 1, so an order
    /// total is never zero or negative. The result is rounded to two decimal
    /// places half-up.
    pub fn order_total(
        &self,
        garment: GarmentType,
        quantity: u32,
    ) -> Decimal {
        let quantity = if quantity == 0 {
            warn!(garment = garment.as_str(), "zero quantity; defaulting to 1");
            1
        } else {
            quantity
        };
        round_half_up(self.unit_price(garment) * Decimal::from(quantity))
    }

    /// Down payment required upfront: total × down-payment rate (50% by
    /// default), rounded to two decimal places half-up.
    pub fn down_payment(
        &self,
        total_amount: Decimal,
    ) -> Decimal {
        round_half_up(total_amount * self.config.down_payment_rate)
    }

    /// Balance owed after the down payment.
    ///
    /// Computed as a plain subtraction so that
    /// `down_payment + remaining_balance` always reproduces the total exactly.
    pub fn remaining_balance(
        &self,
        total_amount: Decimal,
        down_payment: Decimal,
    ) -> Decimal {
        total_amount - down_payment
    }

    /// Derives complete pricing for a partial order record.
    ///
    /// Precedence for the total amount: an explicit, parseable
    /// `total_amount` on the record wins for display; otherwise the total is
    /// derived from the garment type and quantity. An explicit total that
    /// disagrees with the table is still used here — flagging the
    /// discrepancy is [`validate_pricing`](Self::validate_pricing)'s job.
    ///
    /// Pure and idempotent: the same record always yields the same pricing.
    pub fn order_pricing_info(
        &self,
        record: &OrderRecord,
    ) -> OrderPricing {
        let garment_type = record
            .garment_type
            .as_deref()
            .map(GarmentType::from_input)
            .unwrap_or(GarmentType::Others);
        let quantity = record.quantity.map(normalize_quantity).unwrap_or(1);

        let unit_price = self.unit_price(garment_type);
        let total_amount = record
            .total_amount
            .as_deref()
            .and_then(parse_amount)
            .unwrap_or_else(|| self.order_total(garment_type, quantity));
        let down_payment = self.down_payment(total_amount);
        let remaining_balance = self.remaining_balance(total_amount, down_payment);

        OrderPricing {
            garment_type,
            quantity,
            unit_price,
            total_amount,
            down_payment,
            remaining_balance,
            formatted_unit_price: format_currency(unit_price),
            formatted_total_amount: format_currency(total_amount),
            formatted_down_payment: format_currency(down_payment),
            formatted_remaining_balance: format_currency(remaining_balance),
        }
    }

    /// Checks a supplied total amount against the table-derived total.
    ///
    /// The comparison uses an absolute tolerance of 0.01 to absorb currency
    /// rounding noise from upstream systems. Mismatches are reported in-band
    /// via the returned [`PricingValidation`]; this never fails and never
    /// blocks computation or display.
    pub fn validate_pricing(
        &self,
        garment: &str,
        quantity: u32,
        total_amount: Decimal,
    ) -> PricingValidation {
        let expected_total = self.order_total(GarmentType::from_input(garment), quantity);
        let difference = total_amount - expected_total;
        let is_valid = difference.abs() < VALIDATION_TOLERANCE;

        let message = if is_valid {
            "Pricing is correct".to_string()
        } else {
            warn!(
                garment = %garment,
                quantity,
                expected = %expected_total,
                actual = %total_amount,
                "total amount disagrees with price table"
            );
            format!(
                "Expected {}, got {}",
                format_currency(expected_total),
                format_currency(total_amount)
            )
        };

        PricingValidation {
            is_valid,
            expected_total,
            actual_total: total_amount,
            difference,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn engine() -> PricingEngine {
        PricingEngine::default()
    }

    // =========================================================================
    // PricingConfig::validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_default_config() {
        assert_eq!(PricingConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let config = PricingConfig {
            down_payment_rate: dec!(-0.1),
        };

        assert_eq!(
            config.validate(),
            Err(PricingConfigError::InvalidDownPaymentRate(dec!(-0.1)))
        );
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let config = PricingConfig {
            down_payment_rate: dec!(1.5),
        };

        assert_eq!(
            config.validate(),
            Err(PricingConfigError::InvalidDownPaymentRate(dec!(1.5)))
        );
    }

    #[test]
    fn with_config_rejects_invalid_rate() {
        let config = PricingConfig {
            down_payment_rate: dec!(2),
        };

        let result = PricingEngine::with_config(PriceTable::default(), config);

        assert_eq!(
            result.unwrap_err(),
            PricingConfigError::InvalidDownPaymentRate(dec!(2))
        );
    }

    #[test]
    fn with_config_accepts_alternate_rate() {
        let config = PricingConfig {
            down_payment_rate: dec!(0.30),
        };
        let engine = PricingEngine::with_config(PriceTable::default(), config).unwrap();

        assert_eq!(engine.down_payment(dec!(1000.00)), dec!(300.00));
    }

    // =========================================================================
    // unit_price / unit_price_for tests
    // =========================================================================

    #[test]
    fn unit_price_reads_the_table() {
        assert_eq!(engine().unit_price(GarmentType::Dress), dec!(800.00));
        assert_eq!(engine().unit_price(GarmentType::Others), dec!(600.00));
    }

    #[test]
    fn unit_price_for_falls_back_to_others() {
        let engine = engine();

        assert_eq!(engine.unit_price_for("SUIT"), dec!(600.00));
        assert_eq!(engine.unit_price_for("SUIT"), engine.unit_price_for("OTHERS"));
    }

    #[test]
    fn unit_price_for_accepts_known_types() {
        assert_eq!(engine().unit_price_for("JACKET"), dec!(750.00));
        assert_eq!(engine().unit_price_for("blouse"), dec!(550.00));
    }

    #[test]
    fn unit_price_honors_injected_table() {
        let mut table = PriceTable::default();
        table.set_price(GarmentType::Dress, dec!(1000.00));
        let engine = PricingEngine::new(table);

        assert_eq!(engine.unit_price(GarmentType::Dress), dec!(1000.00));
    }

    // =========================================================================
    // order_total tests
    // =========================================================================

    #[test]
    fn order_total_multiplies_unit_price_by_quantity() {
        assert_eq!(engine().order_total(GarmentType::Pants, 3), dec!(1950.00));
    }

    #[test]
    fn order_total_defaults_quantity_one() {
        assert_eq!(engine().order_total(GarmentType::Dress, 1), dec!(800.00));
    }

    #[test]
    fn order_total_normalizes_zero_quantity_to_one() {
        assert_eq!(engine().order_total(GarmentType::Dress, 0), dec!(800.00));
    }

    #[test]
    fn order_total_matches_unit_price_times_quantity_for_all_types() {
        let engine = engine();
        for garment in GarmentType::ALL {
            for quantity in [1u32, 2, 7, 40] {
                assert_eq!(
                    engine.order_total(garment, quantity),
                    engine.unit_price(garment) * Decimal::from(quantity)
                );
            }
        }
    }

    #[test]
    fn order_total_rounds_odd_table_prices() {
        let mut table = PriceTable::default();
        table.set_price(GarmentType::Skirt, dec!(500.005));
        let engine = PricingEngine::new(table);

        // 500.005 × 3 = 1500.015, rounds to 1500.02
        assert_eq!(engine.order_total(GarmentType::Skirt, 3), dec!(1500.02));
    }

    // =========================================================================
    // down_payment / remaining_balance tests
    // =========================================================================

    #[test]
    fn down_payment_is_half_of_total() {
        assert_eq!(engine().down_payment(dec!(1950.00)), dec!(975.00));
    }

    #[test]
    fn down_payment_rounds_odd_pennies() {
        // 825.55 × 0.5 = 412.775, rounds to 412.78
        assert_eq!(engine().down_payment(dec!(825.55)), dec!(412.78));
    }

    #[test]
    fn remaining_balance_subtracts_down_payment() {
        assert_eq!(
            engine().remaining_balance(dec!(1950.00), dec!(975.00)),
            dec!(975.00)
        );
    }

    #[test]
    fn down_payment_plus_balance_reproduces_total() {
        let engine = engine();
        for total in [dec!(0.00), dec!(0.01), dec!(825.55), dec!(1950.00), dec!(99999.99)] {
            let down = engine.down_payment(total);
            let balance = engine.remaining_balance(total, down);

            assert_eq!(down + balance, total);
        }
    }

    // =========================================================================
    // order_pricing_info tests
    // =========================================================================

    #[test]
    fn order_pricing_info_derives_total_when_absent() {
        let record = OrderRecord {
            garment_type: Some("DRESS".to_string()),
            quantity: Some(2),
            total_amount: None,
        };

        let pricing = engine().order_pricing_info(&record);

        assert_eq!(pricing.garment_type, GarmentType::Dress);
        assert_eq!(pricing.quantity, 2);
        assert_eq!(pricing.unit_price, dec!(800.00));
        assert_eq!(pricing.total_amount, dec!(1600.00));
        assert_eq!(pricing.down_payment, dec!(800.00));
        assert_eq!(pricing.remaining_balance, dec!(800.00));
        assert_eq!(pricing.formatted_total_amount, "₱1600.00");
        assert_eq!(pricing.formatted_down_payment, "₱800.00");
    }

    #[test]
    fn order_pricing_info_prefers_explicit_total() {
        let record = OrderRecord {
            garment_type: Some("DRESS".to_string()),
            quantity: Some(2),
            total_amount: Some("1500.00".to_string()),
        };

        let pricing = engine().order_pricing_info(&record);

        // The given total wins for display even though the table says 1600.
        assert_eq!(pricing.total_amount, dec!(1500.00));
        assert_eq!(pricing.down_payment, dec!(750.00));
        assert_eq!(pricing.remaining_balance, dec!(750.00));
        assert_eq!(pricing.unit_price, dec!(800.00));
    }

    #[test]
    fn order_pricing_info_derives_when_total_unparseable() {
        let record = OrderRecord {
            garment_type: Some("PANTS".to_string()),
            quantity: Some(3),
            total_amount: Some("n/a".to_string()),
        };

        let pricing = engine().order_pricing_info(&record);

        assert_eq!(pricing.total_amount, dec!(1950.00));
    }

    #[test]
    fn order_pricing_info_defaults_missing_fields() {
        let pricing = engine().order_pricing_info(&OrderRecord::default());

        assert_eq!(pricing.garment_type, GarmentType::Others);
        assert_eq!(pricing.quantity, 1);
        assert_eq!(pricing.total_amount, dec!(600.00));
        assert_eq!(pricing.formatted_unit_price, "₱600.00");
    }

    #[test]
    fn order_pricing_info_treats_unknown_garment_as_others() {
        let known = engine().order_pricing_info(&OrderRecord {
            garment_type: Some("OTHERS".to_string()),
            quantity: Some(4),
            total_amount: None,
        });
        let unknown = engine().order_pricing_info(&OrderRecord {
            garment_type: Some("SUIT".to_string()),
            quantity: Some(4),
            total_amount: None,
        });

        assert_eq!(unknown.unit_price, known.unit_price);
        assert_eq!(unknown.total_amount, known.total_amount);
        assert_eq!(unknown.down_payment, known.down_payment);
        assert_eq!(unknown.remaining_balance, known.remaining_balance);
    }

    #[test]
    fn order_pricing_info_normalizes_non_positive_quantity() {
        let record = OrderRecord {
            garment_type: Some("SKIRT".to_string()),
            quantity: Some(0),
            total_amount: None,
        };

        let pricing = engine().order_pricing_info(&record);

        assert_eq!(pricing.quantity, 1);
        assert_eq!(pricing.total_amount, dec!(500.00));
    }

    #[test]
    fn order_pricing_info_is_idempotent() {
        let record = OrderRecord {
            garment_type: Some("JACKET".to_string()),
            quantity: Some(2),
            total_amount: Some("1500.00".to_string()),
        };
        let engine = engine();

        assert_eq!(
            engine.order_pricing_info(&record),
            engine.order_pricing_info(&record)
        );
    }

    // =========================================================================
    // validate_pricing tests
    // =========================================================================

    #[test]
    fn validate_pricing_accepts_matching_total() {
        let result = engine().validate_pricing("DRESS", 2, dec!(1600.00));

        assert!(result.is_valid);
        assert_eq!(result.expected_total, dec!(1600.00));
        assert_eq!(result.actual_total, dec!(1600.00));
        assert_eq!(result.difference, dec!(0.00));
        assert_eq!(result.message, "Pricing is correct");
    }

    #[test]
    fn validate_pricing_flags_mismatched_total() {
        let result = engine().validate_pricing("DRESS", 2, dec!(1500.00));

        assert!(!result.is_valid);
        assert_eq!(result.expected_total, dec!(1600.00));
        assert_eq!(result.actual_total, dec!(1500.00));
        assert_eq!(result.difference, dec!(-100.00));
        assert!(result.message.contains("₱1600.00"));
        assert!(result.message.contains("₱1500.00"));
    }

    #[test]
    fn validate_pricing_tolerates_sub_centavo_noise() {
        let result = engine().validate_pricing("PANTS", 3, dec!(1950.005));

        assert!(result.is_valid);
    }

    #[test]
    fn validate_pricing_rejects_difference_at_tolerance() {
        let result = engine().validate_pricing("PANTS", 3, dec!(1950.01));

        assert!(!result.is_valid);
        assert_eq!(result.difference, dec!(0.01));
    }

    #[test]
    fn validate_pricing_uses_others_for_unknown_garment() {
        let result = engine().validate_pricing("SUIT", 2, dec!(1200.00));

        assert!(result.is_valid);
        assert_eq!(result.expected_total, dec!(1200.00));
    }
}
