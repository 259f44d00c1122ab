use carta_core::error::CartaError;
use carta_core::ingest::csv::read_ingredients;
use std::fs::File;
use std::path::PathBuf;

use crate::output;

pub fn run(ingredients: Option<PathBuf>, output_format: &str) -> Result<(), CartaError> {
    let catalog = match ingredients {
        Some(path) => read_ingredients(File::open(path)?)?,
        None => carta_core::dataset::sample_data()?.0,
    };

    match output_format {
        "json" => output::json::print_catalog(&catalog)?,
        _ => output::table::print_catalog(&catalog),
    }

    Ok(())
}
