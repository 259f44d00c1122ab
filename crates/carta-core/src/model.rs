use crate::error::CartaError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Purchase weight unit for catalog entries.
///
/// Liter is treated as mass-equivalent 1:1 with kilograms. That is a
/// deliberate simplification for kitchen stock (water-like densities),
/// not a physical conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Gram,
    #[default]
    Kilogram,
    Liter,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Gram => write!(f, "g"),
            WeightUnit::Kilogram => write!(f, "kg"),
            WeightUnit::Liter => write!(f, "l"),
        }
    }
}

impl WeightUnit {
    /// Parse a unit tag as it appears in supplier data ("g", "grams",
    /// "kg", "litre", ...). Unrecognized tags are an input error, never a
    /// silent default.
    pub fn parse(tag: &str, ingredient: &str) -> Result<WeightUnit, CartaError> {
        match tag.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(WeightUnit::Gram),
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilogram),
            "l" | "liter" | "litre" | "liters" | "litres" => Ok(WeightUnit::Liter),
            _ => Err(CartaError::InvalidUnit {
                ingredient: ingredient.to_string(),
                unit: tag.trim().to_string(),
            }),
        }
    }

    /// Convert a weight expressed in this unit to kilograms.
    pub fn to_kilograms(self, weight: Decimal) -> Decimal {
        match self {
            WeightUnit::Gram => weight / Decimal::ONE_THOUSAND,
            WeightUnit::Kilogram | WeightUnit::Liter => weight,
        }
    }
}

/// A purchased ingredient: how much was bought and what it cost.
///
/// Constructed through `Catalog::add`, which enforces the positive-weight
/// invariant; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Purchase weight normalized to kilograms, always > 0.
    pub weight_kg: Decimal,
    /// Purchase cost in currency units, >= 0.
    pub cost: Decimal,
}

impl Ingredient {
    /// Cost per kilogram.
    pub fn unit_price(&self) -> Decimal {
        self.cost / self.weight_kg
    }
}

/// Name-keyed ingredient catalog. Names are unique; insertion order is
/// irrelevant, iteration is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    ingredients: BTreeMap<String, Ingredient>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Add an ingredient, normalizing its weight to kilograms.
    ///
    /// A later `add` with the same name replaces the earlier entry, the
    /// same way re-reading a supplier row would.
    pub fn add(
        &mut self,
        name: &str,
        weight: Decimal,
        cost: Decimal,
        unit: WeightUnit,
    ) -> Result<(), CartaError> {
        if weight <= Decimal::ZERO {
            return Err(CartaError::InvalidWeight {
                ingredient: name.to_string(),
                weight,
            });
        }
        let weight_kg = unit.to_kilograms(weight);
        self.ingredients.insert(
            name.to_string(),
            Ingredient {
                name: name.to_string(),
                weight_kg,
                cost,
            },
        );
        Ok(())
    }

    /// Cost per kilogram for a named ingredient.
    pub fn unit_price(&self, name: &str) -> Result<Decimal, CartaError> {
        self.ingredients
            .get(name)
            .map(Ingredient::unit_price)
            .ok_or_else(|| CartaError::UnknownIngredient {
                ingredient: name.to_string(),
            })
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }
}

/// A menu recipe: quantities (in kilograms) of catalog ingredients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Ingredient name -> required quantity in kilograms.
    pub ingredients: BTreeMap<String, Decimal>,
}

impl Recipe {
    pub fn new(name: &str, ingredients: BTreeMap<String, Decimal>) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients,
        }
    }

    /// Total ingredient cost of this recipe against a catalog.
    ///
    /// Any ingredient missing from the catalog aborts the whole
    /// computation. A partial cost with a hole in it would look like a
    /// cheap dish, which is worse than a visible failure.
    pub fn cost(&self, catalog: &Catalog) -> Result<Decimal, CartaError> {
        let mut total = Decimal::ZERO;
        for (ingredient, &quantity) in &self.ingredients {
            if quantity < Decimal::ZERO {
                return Err(CartaError::InvalidQuantity {
                    recipe: self.name.clone(),
                    ingredient: ingredient.clone(),
                    quantity,
                });
            }
            total += catalog.unit_price(ingredient)? * quantity;
        }
        Ok(total)
    }
}

/// A menu item known only by its cost ratio against a base-cost anchor.
///
/// Some sales exports record no absolute ingredient cost, only the share
/// of a notional base cost each product consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioItem {
    pub name: String,
    /// Fraction of the base cost spent on this item's ingredients.
    pub cost_ratio: Decimal,
    /// Average units sold per day, when the export carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_sales: Option<Decimal>,
}
