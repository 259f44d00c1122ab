use crate::error::CartaError;
use crate::model::{Catalog, Recipe, WeightUnit};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;

/// An ingredient CSV record: `ingredient,weight,weight_unit,cost`.
/// A missing `weight_unit` column means kilograms.
#[derive(Debug, Deserialize)]
struct IngredientRecord {
    ingredient: String,
    weight: Decimal,
    weight_unit: Option<String>,
    cost: Decimal,
}

/// Read an ingredient catalog from CSV.
///
/// Numeric or unit errors fail the load with the offending row number;
/// the engine's weight/unit validation applies to every row.
pub fn read_ingredients<R: Read>(reader: R) -> Result<Catalog, CartaError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut catalog = Catalog::new();
    for (idx, result) in csv_reader.deserialize().enumerate() {
        // Header is row 1, first record row 2
        let record: IngredientRecord = result.map_err(|e| {
            CartaError::ParseError(format!("ingredient row {}: {}", idx + 2, e))
        })?;
        let unit = match record.weight_unit.as_deref() {
            Some(tag) if !tag.is_empty() => WeightUnit::parse(tag, &record.ingredient)?,
            _ => WeightUnit::Kilogram,
        };
        catalog.add(&record.ingredient, record.weight, record.cost, unit)?;
    }
    Ok(catalog)
}

/// Read recipes from a wide CSV: a `menu` column plus one column per
/// ingredient, cells holding quantities in kilograms. Blank cells are
/// omitted from the recipe; everything else is parsed and passed through
/// to engine validation untouched.
pub fn read_recipes<R: Read>(reader: R) -> Result<Vec<Recipe>, CartaError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().all(|h| h != "menu") {
        return Err(CartaError::ParseError(
            "recipe CSV must have a 'menu' column".into(),
        ));
    }

    let mut recipes = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let mut name = None;
        let mut ingredients = BTreeMap::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            if header == "menu" {
                name = Some(cell.to_string());
                continue;
            }
            if cell.is_empty() {
                continue;
            }
            let quantity: Decimal = cell.parse().map_err(|e| {
                CartaError::ParseError(format!(
                    "recipe row {}, column '{}': invalid quantity '{}': {}",
                    idx + 2,
                    header,
                    cell,
                    e
                ))
            })?;
            ingredients.insert(header.to_string(), quantity);
        }
        let name = name.filter(|n| !n.is_empty()).ok_or_else(|| {
            CartaError::ParseError(format!("recipe row {}: missing menu name", idx + 2))
        })?;
        recipes.push(Recipe::new(&name, ingredients));
    }
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_ingredients() {
        let data = "\
ingredient,weight,weight_unit,cost
rice,20,kg,40000
spice_mix,500,g,8000
soy_sauce,1,l,5000
";
        let catalog = read_ingredients(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.unit_price("rice").unwrap(), dec!(2000));
        assert_eq!(catalog.get("spice_mix").unwrap().weight_kg, dec!(0.5));
    }

    #[test]
    fn test_missing_unit_defaults_to_kilograms() {
        let data = "\
ingredient,weight,cost
chicken,10,70000
";
        let catalog = read_ingredients(data.as_bytes()).unwrap();
        assert_eq!(catalog.unit_price("chicken").unwrap(), dec!(7000));
    }

    #[test]
    fn test_bad_unit_fails_load() {
        let data = "\
ingredient,weight,weight_unit,cost
butter,2,lbs,9000
";
        let err = read_ingredients(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CartaError::InvalidUnit { .. }));
    }

    #[test]
    fn test_bad_number_reports_row() {
        let data = "\
ingredient,weight,weight_unit,cost
rice,20,kg,40000
onion,five,kg,10000
";
        let err = read_ingredients(data.as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 3"), "{msg}");
    }

    #[test]
    fn test_zero_weight_row_fails_load() {
        let data = "\
ingredient,weight,weight_unit,cost
air,0,kg,100
";
        let err = read_ingredients(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CartaError::InvalidWeight { .. }));
    }

    #[test]
    fn test_read_recipes_wide_layout() {
        let data = "\
menu,rice,chicken,onion
Teriyaki Chicken Rice,0.20,0.15,0.02
Onion Fried Rice,0.30,,0.10
";
        let recipes = read_recipes(data.as_bytes()).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "Teriyaki Chicken Rice");
        assert_eq!(recipes[0].ingredients["chicken"], dec!(0.15));
        // blank chicken cell omitted entirely
        assert!(!recipes[1].ingredients.contains_key("chicken"));
        assert_eq!(recipes[1].ingredients.len(), 2);
    }

    #[test]
    fn test_recipes_require_menu_column() {
        let data = "\
name,rice
Bowl,0.2
";
        let err = read_recipes(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("menu"));
    }

    #[test]
    fn test_recipe_bad_quantity_reports_location() {
        let data = "\
menu,rice
Bowl,lots
";
        let err = read_recipes(data.as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 2") && msg.contains("rice"), "{msg}");
    }

    #[test]
    fn test_recipe_negative_quantity_passes_through() {
        // Validation of quantities belongs to the engine, not the reader.
        let data = "\
menu,rice
Bowl,-0.2
";
        let recipes = read_recipes(data.as_bytes()).unwrap();
        assert_eq!(recipes[0].ingredients["rice"], dec!(-0.2));
    }
}
