use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::GarmentType;

/// Errors reported by [`PriceTable::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceTableError {
    /// A garment type carries a negative unit price.
    #[error("negative unit price {price} for garment type {garment}")]
    NegativePrice { garment: &'static str, price: Decimal },
}

/// Immutable unit-price table, one entry per garment type.
///
/// The one-field-per-garment layout makes "every garment type has an entry"
/// a structural guarantee rather than a runtime check. The table is an
/// injected value owned by [`PricingEngine`](crate::PricingEngine), so tests
/// and loaders can substitute alternates without global state.
///
/// `Default` yields the shop's standard prices, which must stay in lockstep
/// with the server-side pricing authority:
///
/// | Garment | Price (₱) |
/// |---------|-----------|
/// | BLOUSE  | 550.00    |
/// | PANTS   | 650.00    |
/// | SKIRT   | 500.00    |
/// | DRESS   | 800.00    |
/// | JACKET  | 750.00    |
/// | OTHERS  | 600.00    |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub blouse: Decimal,
    pub pants: Decimal,
    pub skirt: Decimal,
    pub dress: Decimal,
    pub jacket: Decimal,
    pub others: Decimal,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            blouse: Decimal::new(55000, 2),
            pants: Decimal::new(65000, 2),
            skirt: Decimal::new(50000, 2),
            dress: Decimal::new(80000, 2),
            jacket: Decimal::new(75000, 2),
            others: Decimal::new(60000, 2),
        }
    }
}

impl PriceTable {
    /// Unit price for a garment type. Total over the whole enumeration.
    pub fn price(&self, garment: GarmentType) -> Decimal {
        match garment {
            GarmentType::Blouse => self.blouse,
            GarmentType::Pants => self.pants,
            GarmentType::Skirt => self.skirt,
            GarmentType::Dress => self.dress,
            GarmentType::Jacket => self.jacket,
            GarmentType::Others => self.others,
        }
    }

    /// Replaces the entry for `garment` with `price`.
    pub fn set_price(
        &mut self,
        garment: GarmentType,
        price: Decimal,
    ) {
        match garment {
            GarmentType::Blouse => self.blouse = price,
            GarmentType::Pants => self.pants = price,
            GarmentType::Skirt => self.skirt = price,
            GarmentType::Dress => self.dress = price,
            GarmentType::Jacket => self.jacket = price,
            GarmentType::Others => self.others = price,
        }
    }

    /// Validates that every unit price is non-negative.
    ///
    /// The default table is always valid; this exists for tables built from
    /// external sources (CSV, configuration).
    pub fn validate(&self) -> Result<(), PriceTableError> {
        for garment in GarmentType::ALL {
            let price = self.price(garment);
            if price < Decimal::ZERO {
                return Err(PriceTableError::NegativePrice {
                    garment: garment.as_str(),
                    price,
                });
            }
        }
        Ok(())
    }
}
