pub mod catalog;
pub mod price;
pub mod ratio;

use carta_core::pricing::PricingConfig;
use rust_decimal::Decimal;

/// Build a pricing config from CLI overrides; empty tier list keeps the
/// defaults.
pub fn build_config(tiers: Vec<Decimal>, ideal_pct: Decimal, base_cost: Option<Decimal>) -> PricingConfig {
    let mut config = PricingConfig {
        ideal_food_cost_pct: ideal_pct,
        ..PricingConfig::default()
    };
    if !tiers.is_empty() {
        config.tiers = tiers;
    }
    if let Some(base_cost) = base_cost {
        config.base_cost = base_cost;
    }
    config
}
