use carta_core::error::CartaError;
use carta_core::ingest::xlsx::parse_ratio_xlsx;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: Option<PathBuf>,
    base_cost: Decimal,
    tiers: Vec<Decimal>,
    ideal_pct: Decimal,
    output_format: &str,
) -> Result<(), CartaError> {
    let config = super::build_config(tiers, ideal_pct, Some(base_cost));

    let items = match input_file {
        Some(path) => {
            let bytes = std::fs::read(&path)?;
            let ingest = parse_ratio_xlsx(&bytes)?;
            for skipped in &ingest.skipped {
                eprintln!("warning: row {} skipped: {}", skipped.row, skipped.reason);
            }
            ingest.items
        }
        None => carta_core::dataset::signature_menu()?,
    };

    let outcome = carta_core::price_ratio_items(&items, &config)?;

    match output_format {
        "json" => output::json::print_outcome(&outcome)?,
        _ => output::table::print_outcome(&outcome, &config),
    }

    Ok(())
}
