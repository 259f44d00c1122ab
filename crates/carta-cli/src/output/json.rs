use carta_core::error::CartaError;
use carta_core::model::Catalog;
use carta_core::PricingOutcome;

pub fn print_outcome(outcome: &PricingOutcome) -> Result<(), CartaError> {
    let json = serde_json::to_string_pretty(outcome)?;
    println!("{json}");
    Ok(())
}

pub fn print_catalog(catalog: &Catalog) -> Result<(), CartaError> {
    let json = serde_json::to_string_pretty(catalog)?;
    println!("{json}");
    Ok(())
}
