use crate::error::CartaError;
use crate::model::{Catalog, RatioItem, Recipe, WeightUnit};
use rust_decimal::Decimal;
use serde::Deserialize;

const SAMPLE_MENU_JSON: &str = include_str!("../../../data/sample-menu.json");
const SIGNATURE_MENU_JSON: &str = include_str!("../../../data/signature-menu.json");

#[derive(Debug, Deserialize)]
struct IngredientRow {
    name: String,
    weight: Decimal,
    unit: String,
    cost: Decimal,
}

#[derive(Debug, Deserialize)]
struct SampleMenu {
    ingredients: Vec<IngredientRow>,
    recipes: Vec<Recipe>,
}

/// Built-in demo dataset: a five-ingredient catalog and three recipes.
/// Used by the CLI when no input files are supplied.
pub fn sample_data() -> Result<(Catalog, Vec<Recipe>), CartaError> {
    let menu: SampleMenu = serde_json::from_str(SAMPLE_MENU_JSON)?;
    let mut catalog = Catalog::new();
    for row in &menu.ingredients {
        let unit = WeightUnit::parse(&row.unit, &row.name)?;
        catalog.add(&row.name, row.weight, row.cost, unit)?;
    }
    Ok((catalog, menu.recipes))
}

/// Built-in ratio-mode dataset: the sixteen signature products with
/// cost ratios and average daily sales from the store's sales export.
pub fn signature_menu() -> Result<Vec<RatioItem>, CartaError> {
    let items: Vec<RatioItem> = serde_json::from_str(SIGNATURE_MENU_JSON)?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_data_loads() {
        let (catalog, recipes) = sample_data().unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(recipes.len(), 3);
        // spice_mix is declared in grams
        assert_eq!(catalog.get("spice_mix").unwrap().weight_kg, dec!(0.5));
    }

    #[test]
    fn test_sample_recipes_reference_only_catalog_ingredients() {
        let (catalog, recipes) = sample_data().unwrap();
        for recipe in &recipes {
            assert!(recipe.cost(&catalog).is_ok(), "recipe {}", recipe.name);
        }
    }

    #[test]
    fn test_signature_menu_loads() {
        let items = signature_menu().unwrap();
        assert_eq!(items.len(), 16);
        let first = &items[0];
        assert_eq!(first.cost_ratio, dec!(0.536));
        assert_eq!(first.daily_sales, Some(dec!(82.075)));
    }
}
