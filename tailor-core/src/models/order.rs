use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::GarmentType;

/// Partial order data as received from a form or an upstream record.
///
/// Every field is optional and lenient; normalization happens when the record
/// is priced, not when it is constructed:
///
/// - missing or unrecognized `garment_type` resolves to `OTHERS`,
/// - missing or non-positive `quantity` resolves to 1,
/// - `total_amount` is kept as the raw string so a present-but-unparseable
///   value can fall back to the derived total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub garment_type: Option<String>,
    pub quantity: Option<i64>,
    pub total_amount: Option<String>,
}

/// Fully derived pricing for one order, with display-ready strings.
///
/// Produced on demand by
/// [`PricingEngine::order_pricing_info`](crate::PricingEngine::order_pricing_info);
/// it has no identity of its own and is valid only for the inputs that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPricing {
    pub garment_type: GarmentType,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub down_payment: Decimal,
    pub remaining_balance: Decimal,

    // Currency-formatted counterparts for direct display.
    pub formatted_unit_price: String,
    pub formatted_total_amount: String,
    pub formatted_down_payment: String,
    pub formatted_remaining_balance: String,
}
