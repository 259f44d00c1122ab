mod commands;
mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "carta",
    version,
    about = "Menu pricing tool: ingredient costs, suggested prices, price tiers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price recipes from ingredient and recipe CSV files (built-in sample data if omitted)
    Price {
        /// CSV with columns: ingredient, weight, weight_unit, cost
        #[arg(short, long, value_name = "FILE", requires = "recipes")]
        ingredients: Option<PathBuf>,

        /// Wide CSV: a 'menu' column plus one column per ingredient
        #[arg(short, long, value_name = "FILE", requires = "ingredients")]
        recipes: Option<PathBuf>,

        /// Tier thresholds in currency units
        #[arg(short, long, value_name = "AMOUNT", num_args = 1..)]
        tiers: Vec<Decimal>,

        /// Ideal food-cost share of the selling price, in (0, 1)
        #[arg(long = "ideal-pct", default_value = "0.30")]
        ideal_pct: Decimal,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Price ratio-mode items from a sales-export xlsx (built-in signature menu if omitted)
    Ratio {
        /// Sales-export workbook with per-product cost ratios
        input_file: Option<PathBuf>,

        /// Base cost anchor the ratios are relative to
        #[arg(long = "base-cost", default_value = "1000")]
        base_cost: Decimal,

        /// Tier thresholds in currency units
        #[arg(short, long, value_name = "AMOUNT", num_args = 1..)]
        tiers: Vec<Decimal>,

        /// Ideal food-cost share of the selling price, in (0, 1)
        #[arg(long = "ideal-pct", default_value = "0.30")]
        ideal_pct: Decimal,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show per-kilogram unit prices for an ingredient catalog
    Catalog {
        /// CSV with columns: ingredient, weight, weight_unit, cost
        #[arg(short, long, value_name = "FILE")]
        ingredients: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Price {
            ingredients,
            recipes,
            tiers,
            ideal_pct,
            output,
        } => commands::price::run(ingredients, recipes, tiers, ideal_pct, &output),
        Commands::Ratio {
            input_file,
            base_cost,
            tiers,
            ideal_pct,
            output,
        } => commands::ratio::run(input_file, base_cost, tiers, ideal_pct, &output),
        Commands::Catalog {
            ingredients,
            output,
        } => commands::catalog::run(ingredients, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
