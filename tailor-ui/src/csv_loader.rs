//! CSV loader for alternate price tables.
//!
//! Lets a shop run quotes against a revised table without a rebuild. Unlike
//! the engine's lenient input path, the loader is strict: it feeds the
//! authoritative table, so an unknown garment name or a negative price is a
//! load error, not a fallback.
//!
//! ## CSV Format
//!
//! Two columns, headers matched by name (order does not matter):
//!
//! | Column        | Required | Type    | Notes                                   |
//! |---------------|----------|---------|-----------------------------------------|
//! | `garment_type`| yes      | string  | One of: `BLOUSE`, `PANTS`, `SKIRT`, `DRESS`, `JACKET`, `OTHERS` |
//! | `price`       | yes      | decimal | Non-negative, e.g. `550.00`             |
//!
//! Garment types left out of the file keep their standard default price.
//!
//! ### Example
//!
//! ```csv
//! garment_type,price
//! DRESS,900.00
//! JACKET,800.00
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use tailor_core::models::{GarmentType, PriceTable, PriceTableError};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    garment_type: String,
    price: Decimal,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a price table from CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// Reading the file itself failed.
    #[error("cannot read price table file: {0}")]
    Io(#[from] std::io::Error),

    /// A `garment_type` cell contained a value that is not one of the
    /// recognised names. `row` is 1-based (header = row 0).
    #[error("unrecognised garment type '{garment}' on row {row}")]
    InvalidGarmentType { garment: String, row: usize },

    /// The finished table failed validation (negative price).
    #[error(transparent)]
    InvalidTable(#[from] PriceTableError),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse CSV text (the full file contents as a &str) and return the price
/// table, starting from the standard defaults and overriding each listed
/// garment type. A garment type listed twice keeps its last price (logged).
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] – if the CSV is structurally invalid or a
///   price cannot be deserialised.
/// * [`CsvLoadError::InvalidGarmentType`] – if any row names an
///   unrecognised garment type.
/// * [`CsvLoadError::InvalidTable`] – if any loaded price is negative.
pub fn load_from_str(input: &str) -> Result<PriceTable, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .from_reader(input.as_bytes());

    let mut table = PriceTable::default();
    let mut seen: Vec<GarmentType> = Vec::new();

    for (i, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row_number = i + 1;
        let row = row?;
        let garment =
            GarmentType::parse(&row.garment_type).ok_or(CsvLoadError::InvalidGarmentType {
                garment: row.garment_type.clone(),
                row: row_number,
            })?;

        if seen.contains(&garment) {
            warn!(
                garment = garment.as_str(),
                row = row_number,
                "duplicate garment type in price table CSV; last price wins"
            );
        }
        seen.push(garment);
        table.set_price(garment, row.price);
    }

    table.validate()?;
    Ok(table)
}

/// Load a price table from a CSV file on disk.
///
/// # Errors
///
/// [`CsvLoadError::Io`] if the file cannot be read, otherwise as
/// [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<PriceTable, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}
