use carta_core::error::CartaError;
use carta_core::ingest::csv::{read_ingredients, read_recipes};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::PathBuf;

use crate::output;

pub fn run(
    ingredients: Option<PathBuf>,
    recipes: Option<PathBuf>,
    tiers: Vec<Decimal>,
    ideal_pct: Decimal,
    output_format: &str,
) -> Result<(), CartaError> {
    let config = super::build_config(tiers, ideal_pct, None);

    let (catalog, recipes) = match (ingredients, recipes) {
        (Some(ingredients_path), Some(recipes_path)) => {
            let catalog = read_ingredients(File::open(ingredients_path)?)?;
            let recipes = read_recipes(File::open(recipes_path)?)?;
            (catalog, recipes)
        }
        // clap's `requires` rules make both-or-neither the only cases
        _ => carta_core::dataset::sample_data()?,
    };

    let outcome = carta_core::price_recipes(&catalog, &recipes, &config)?;

    match output_format {
        "json" => output::json::print_outcome(&outcome)?,
        _ => output::table::print_outcome(&outcome, &config),
    }

    Ok(())
}
