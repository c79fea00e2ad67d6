//! Interactive terminal quote form.
//!
//! Holds the two input fields exactly as the user typed them and replays the
//! standard binding contract: every accepted edit triggers one complete
//! display refresh, and the readouts are re-rendered from the slots the
//! binding wrote. Malformed input is never rejected here — the engine's
//! fallbacks keep the readouts live while the operator is typing.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::info;

use tailor_core::calculations::common::{format_currency, parse_amount, parse_quantity};
use tailor_core::display::{DisplayConfig, InputSource, PricingBinding};
use tailor_core::models::GarmentType;
use tailor_core::PricingEngine;

use crate::display::TerminalDisplay;

/// Current contents of the quote form's input fields.
///
/// Values are raw strings, as a form would hold them; normalization is the
/// engine's job at refresh time.
#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    pub garment_type: String,
    pub quantity: String,
}

impl InputSource for QuoteForm {
    fn value(
        &self,
        field: &str,
    ) -> Option<String> {
        match field {
            "garment_type" => Some(self.garment_type.clone()),
            "quantity" => Some(self.quantity.clone()),
            _ => None,
        }
    }
}

/// Prints one quote for a (garment, quantity) pair and exits.
pub fn print_quote(
    engine: PricingEngine,
    garment: &str,
    quantity: &str,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let binding = PricingBinding::new(engine, DisplayConfig::default());
    let form = QuoteForm {
        garment_type: garment.to_string(),
        quantity: quantity.to_string(),
    };
    let mut display = TerminalDisplay::new();

    binding.bind(&form, &mut display);

    writeln!(out, "Quote for {}:", GarmentType::from_input(garment).as_str())?;
    write!(out, "{}", display.render())?;
    Ok(())
}

/// Runs the interactive loop until `quit` or end of input.
///
/// Commands:
/// - `garment <TYPE>` (alias `g`) — set the garment type
/// - `quantity <N>` (alias `q`) — set the quantity
/// - `check <AMOUNT>` — validate an externally supplied total
/// - `table` — print the active price table
/// - `help`, `quit`
pub fn run_interactive(
    engine: PricingEngine,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let binding = PricingBinding::new(engine, DisplayConfig::default());
    let mut form = QuoteForm::default();
    let mut display = TerminalDisplay::new();

    writeln!(out, "Tailoring quote calculator. Type 'help' for commands.")?;
    binding.bind(&form, &mut display);
    write!(out, "{}", display.render())?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // end of input
        }

        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (trimmed, ""),
        };

        match command {
            "" => continue,
            "garment" | "g" => {
                form.garment_type = rest.to_string();
                info!(garment = %form.garment_type, "garment type changed");
                binding.refresh(&form, &mut display);
                write!(out, "{}", display.render())?;
            }
            "quantity" | "q" => {
                form.quantity = rest.to_string();
                info!(quantity = %form.quantity, "quantity changed");
                binding.refresh(&form, &mut display);
                write!(out, "{}", display.render())?;
            }
            "check" => {
                let total = parse_amount(rest).unwrap_or(Decimal::ZERO);
                let quantity = parse_quantity(&form.quantity);
                let result = binding
                    .engine()
                    .validate_pricing(&form.garment_type, quantity, total);
                writeln!(out, "  {}", result.message)?;
            }
            "table" => {
                for garment in GarmentType::ALL {
                    let price = binding.engine().unit_price(garment);
                    writeln!(out, "  {:<8} {}", garment.as_str(), format_currency(price))?;
                }
            }
            "help" => {
                writeln!(out, "  garment <TYPE>   set garment type (BLOUSE, PANTS, SKIRT, DRESS, JACKET, OTHERS)")?;
                writeln!(out, "  quantity <N>     set quantity")?;
                writeln!(out, "  check <AMOUNT>   validate an externally supplied total")?;
                writeln!(out, "  table            show the active price table")?;
                writeln!(out, "  quit             exit")?;
            }
            "quit" | "exit" => break,
            other => {
                writeln!(out, "  unknown command '{other}'; type 'help'")?;
            }
        }
    }

    Ok(())
}
