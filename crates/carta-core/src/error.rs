use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum CartaError {
    #[error("ingredient '{ingredient}' has non-positive weight {weight}")]
    InvalidWeight { ingredient: String, weight: Decimal },

    #[error("unknown weight unit '{unit}' for ingredient '{ingredient}'")]
    InvalidUnit { ingredient: String, unit: String },

    #[error("ingredient '{ingredient}' is not in the catalog")]
    UnknownIngredient { ingredient: String },

    #[error("recipe '{recipe}' has negative quantity {quantity} for ingredient '{ingredient}'")]
    InvalidQuantity {
        recipe: String,
        ingredient: String,
        quantity: Decimal,
    },

    #[error("food-cost ratio {ratio} must be strictly between 0 and 1")]
    InvalidRatio { ratio: Decimal },

    #[error("price {price} must be positive to compute a gross margin")]
    InvalidPrice { price: Decimal },

    #[error("invalid pricing configuration: {0}")]
    InvalidConfiguration(String),

    #[error("cannot summarize an empty batch")]
    EmptyBatch,

    #[error("failed to parse input: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
