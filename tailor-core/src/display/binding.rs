use tracing::debug;

use crate::calculations::common::{format_currency, parse_quantity, round_half_up};
use crate::calculations::engine::PricingEngine;
use crate::models::GarmentType;

/// Read access to the order form's input fields.
///
/// `value` returns `None` when the named field does not exist in the adapter
/// at all, and `Some` (possibly empty) when it does. The distinction matters:
/// a missing garment-type field makes a refresh a no-op, while an empty one
/// resolves to OTHERS.
pub trait InputSource {
    fn value(&self, field: &str) -> Option<String>;
}

/// Write access to the display targets.
///
/// `set_text` carries a formatted, human-readable readout; `set_value`
/// carries a raw machine-readable number (the hidden total-amount field
/// submitted to the server). Adapters are free to ignore slots they do not
/// render.
pub trait DisplaySink {
    fn set_text(
        &mut self,
        field: &str,
        text: &str,
    );

    fn set_value(
        &mut self,
        field: &str,
        value: &str,
    );
}

/// Names the input fields and display slots a binding synchronizes.
///
/// Every field has a default identifier matching the shop's order form, so a
/// page that follows the standard naming can bind with
/// `DisplayConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Garment-type input. Default `garment_type`. When this field is absent
    /// from the [`InputSource`], a refresh is a no-op.
    pub garment_type_field: String,
    /// Quantity input. Default `quantity`.
    pub quantity_field: String,
    /// Unit-price readout. Default `garment_price_display`.
    pub unit_price_field: String,
    /// Total-amount readout. Default `total_amount_display`.
    pub total_amount_field: String,
    /// Down-payment readout. Default `down_payment_display`.
    pub down_payment_field: String,
    /// Hidden raw-number total for form submission, written with two fixed
    /// decimal places and no currency glyph. Default `total_amount`.
    pub total_amount_input_field: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            garment_type_field: "garment_type".to_string(),
            quantity_field: "quantity".to_string(),
            unit_price_field: "garment_price_display".to_string(),
            total_amount_field: "total_amount_display".to_string(),
            down_payment_field: "down_payment_display".to_string(),
            total_amount_input_field: "total_amount".to_string(),
        }
    }
}

/// Keeps a set of display slots consistent with the (garment type, quantity)
/// inputs.
///
/// [`bind`](Self::bind) performs the immediate synchronization pass; the
/// adapter then calls [`refresh`](Self::refresh) on every input-change
/// notification. Each refresh is one complete, independent recomputation
/// with no state carried between passes — last write wins on the slots.
#[derive(Debug, Clone)]
pub struct PricingBinding {
    engine: PricingEngine,
    config: DisplayConfig,
}

impl PricingBinding {
    pub fn new(
        engine: PricingEngine,
        config: DisplayConfig,
    ) -> Self {
        Self { engine, config }
    }

    /// The engine this binding computes with.
    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Entry point: performs the initial synchronization pass.
    ///
    /// Change-driven re-synchronization is the adapter's side of the
    /// contract — it delivers each subsequent input-change notification by
    /// calling [`refresh`](Self::refresh) with the then-current inputs.
    pub fn bind(
        &self,
        inputs: &dyn InputSource,
        sink: &mut dyn DisplaySink,
    ) {
        self.refresh(inputs, sink);
    }

    /// Recomputes all derived amounts from the current inputs and overwrites
    /// the display slots.
    ///
    /// A missing garment-type field is a no-op, not an error; an empty value
    /// resolves to OTHERS and a missing or malformed quantity to 1.
    pub fn refresh(
        &self,
        inputs: &dyn InputSource,
        sink: &mut dyn DisplaySink,
    ) {
        let Some(garment_raw) = inputs.value(&self.config.garment_type_field) else {
            debug!(
                field = %self.config.garment_type_field,
                "garment-type input absent; skipping display refresh"
            );
            return;
        };
        let garment = GarmentType::from_input(&garment_raw);
        let quantity = inputs
            .value(&self.config.quantity_field)
            .map(|q| parse_quantity(&q))
            .unwrap_or(1);

        let unit_price = self.engine.unit_price(garment);
        let total_amount = self.engine.order_total(garment, quantity);
        let down_payment = self.engine.down_payment(total_amount);

        sink.set_text(&self.config.unit_price_field, &format_currency(unit_price));
        sink.set_text(&self.config.total_amount_field, &format_currency(total_amount));
        sink.set_text(&self.config.down_payment_field, &format_currency(down_payment));
        sink.set_value(
            &self.config.total_amount_input_field,
            &format!("{:.2}", round_half_up(total_amount)),
        );
    }
}
