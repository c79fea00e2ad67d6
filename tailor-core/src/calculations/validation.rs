use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Absolute tolerance when comparing a supplied total against the
/// table-derived total. Differences strictly below one centavo are treated
/// as rounding noise, not a pricing error.
pub const VALIDATION_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Structured result of a total-amount check.
///
/// This is the engine's only problem-signaling channel: a mismatch is
/// reported here, in-band, and never as an error. Callers decide what to do
/// with it (typically show a warning next to the order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingValidation {
    /// Whether the supplied total matches the table-derived total within
    /// [`VALIDATION_TOLERANCE`].
    pub is_valid: bool,

    /// The total recomputed from the price table.
    pub expected_total: Decimal,

    /// The total that was supplied for checking.
    pub actual_total: Decimal,

    /// `actual_total - expected_total`; negative when the supplied total is
    /// short.
    pub difference: Decimal,

    /// Human-readable explanation, embedding both formatted currency amounts
    /// on mismatch.
    pub message: String,
}
