//! Input adapters. They produce the plain engine types (`Catalog`,
//! `Recipe`, `RatioItem`); the pricing modules never touch files.

pub mod csv;
pub mod xlsx;

use serde::{Deserialize, Serialize};

/// A row the adapter could not use, with enough context to fix the file.
/// Malformed rows are either a load failure or an entry here; they never
/// become a zero-cost ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based row number in the source file.
    pub row: usize,
    pub reason: String,
}
