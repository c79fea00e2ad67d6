use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tailor_core::{PriceTable, PricingEngine};
use tailor_ui::app;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Order pricing calculator for the tailoring shop.
///
/// Computes the total amount, the 50% down payment, and the remaining
/// balance for a garment order, either as a one-shot quote or as an
/// interactive form whose readouts update on every input change.
#[derive(Debug, Parser)]
struct Cli {
    /// Garment type to quote (BLOUSE, PANTS, SKIRT, DRESS, JACKET, OTHERS).
    /// When omitted, starts the interactive form.
    #[arg(long)]
    garment: Option<String>,

    /// Quantity to quote.
    #[arg(long, default_value = "1")]
    quantity: String,

    /// Optional CSV file overriding the standard price table.
    #[arg(long)]
    prices: Option<PathBuf>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let table = match &cli.prices {
        Some(path) => {
            info!("loading price table from {}", path.display());
            tailor_ui::csv_loader::load_from_file(path)?
        }
        None => PriceTable::default(),
    };
    let engine = PricingEngine::new(table);

    let mut stdout = io::stdout().lock();
    match cli.garment {
        Some(garment) => {
            debug!(garment = %garment, quantity = %cli.quantity, "one-shot quote");
            app::print_quote(engine, &garment, &cli.quantity, &mut stdout)
        }
        None => {
            let mut stdin = io::stdin().lock();
            app::run_interactive(engine, &mut stdin, &mut stdout)
        }
    }
}
