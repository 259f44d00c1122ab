pub mod dataset;
pub mod error;
pub mod ingest;
pub mod model;
pub mod pricing;
pub mod report;
pub mod tier;

use error::CartaError;
use model::{Catalog, RatioItem, Recipe};
use pricing::{gross_margin, suggested_price, CostBasis, PricingConfig};
use report::{BatchSummary, ItemFailure, MenuQuote};
use serde::{Deserialize, Serialize};

/// Result of pricing a batch of menu items: the successful quotes, the
/// items that could not be priced, and summary statistics over the
/// successes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingOutcome {
    pub quotes: Vec<MenuQuote>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ItemFailure>,
    pub summary: BatchSummary,
}

/// Price a single menu item from its cost basis.
pub fn price_item(
    name: &str,
    basis: CostBasis,
    daily_sales: Option<rust_decimal::Decimal>,
    config: &PricingConfig,
) -> Result<MenuQuote, CartaError> {
    let cost = basis.resolve(config.base_cost);
    let price = suggested_price(cost, config.ideal_food_cost_pct)?;
    let margin = gross_margin(price, cost)?;
    let tier = tier::classify(price, &config.tiers)?;
    Ok(MenuQuote {
        name: name.to_string(),
        cost,
        suggested_price: price,
        gross_margin: margin,
        tier,
        daily_sales,
    })
}

/// Main API entry point, direct-cost mode: resolve each recipe's cost
/// against the catalog, then price and classify it.
///
/// A recipe that fails (unknown ingredient, negative quantity, zero
/// cost) becomes an `ItemFailure` and the batch continues; failures are
/// returned beside the quotes, never swallowed. A batch with no
/// successful quote is an error.
pub fn price_recipes(
    catalog: &Catalog,
    recipes: &[Recipe],
    config: &PricingConfig,
) -> Result<PricingOutcome, CartaError> {
    config.validate()?;

    let mut quotes = Vec::new();
    let mut failures = Vec::new();
    for recipe in recipes {
        let priced = recipe
            .cost(catalog)
            .and_then(|cost| price_item(&recipe.name, CostBasis::Direct(cost), None, config));
        match priced {
            Ok(quote) => quotes.push(quote),
            Err(e) => failures.push(ItemFailure {
                name: recipe.name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let summary = report::summarize(&quotes)?;
    Ok(PricingOutcome {
        quotes,
        failures,
        summary,
    })
}

/// Main API entry point, ratio mode: each item's cost is its cost ratio
/// times the configured base-cost anchor; pricing and classification are
/// identical to direct-cost mode from there on.
pub fn price_ratio_items(
    items: &[RatioItem],
    config: &PricingConfig,
) -> Result<PricingOutcome, CartaError> {
    config.validate()?;

    let mut quotes = Vec::new();
    let mut failures = Vec::new();
    for item in items {
        let priced = price_item(
            &item.name,
            CostBasis::CostRatio(item.cost_ratio),
            item.daily_sales,
            config,
        );
        match priced {
            Ok(quote) => quotes.push(quote),
            Err(e) => failures.push(ItemFailure {
                name: item.name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let summary = report::summarize(&quotes)?;
    Ok(PricingOutcome {
        quotes,
        failures,
        summary,
    })
}
