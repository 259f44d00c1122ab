use std::io::Cursor;

use calamine::{Reader, Xlsx};
use rust_decimal::Decimal;

use crate::error::CartaError;
use crate::ingest::SkippedRow;
use crate::model::RatioItem;

/// Ratio-mode items read from a sales-export workbook, with the rows the
/// reader had to skip.
#[derive(Debug, Clone)]
pub struct RatioIngest {
    pub items: Vec<RatioItem>,
    pub skipped: Vec<SkippedRow>,
}

const HEADER_ROWS: usize = 3;

/// Parse a sales-export xlsx into ratio-mode menu items.
///
/// Layout of the export: three header rows, then one row per product
/// with the product name in column A, average daily sales in column B,
/// and the cost ratio in the last populated column. Rows without a name
/// or a positive ratio are recorded as skipped, never silently dropped.
pub fn parse_ratio_xlsx(bytes: &[u8]) -> Result<RatioIngest, CartaError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| CartaError::ParseError(format!("failed to open xlsx: {e}")))?;

    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CartaError::ParseError("workbook has no sheets".into()))?
        .map_err(|e| CartaError::ParseError(format!("failed to read first sheet: {e}")))?;

    let mut items = Vec::new();
    let mut skipped = Vec::new();

    for (idx, row) in sheet.rows().enumerate().skip(HEADER_ROWS) {
        let row_number = idx + 1;
        let name = match row.first().and_then(cell_as_string) {
            Some(n) => n,
            None => {
                if row.iter().any(|c| !matches!(c, calamine::Data::Empty)) {
                    skipped.push(SkippedRow {
                        row: row_number,
                        reason: "missing product name".into(),
                    });
                }
                continue;
            }
        };

        let ratio_cell = row
            .iter()
            .rev()
            .find(|c| !matches!(c, calamine::Data::Empty));
        let cost_ratio = match ratio_cell.and_then(cell_as_f64) {
            Some(f) if f > 0.0 => f64_to_decimal(f),
            _ => {
                skipped.push(SkippedRow {
                    row: row_number,
                    reason: format!("product '{name}' has no positive cost ratio"),
                });
                continue;
            }
        };

        let daily_sales = row.get(1).and_then(cell_as_f64).map(f64_to_decimal);

        items.push(RatioItem {
            name,
            cost_ratio,
            daily_sales,
        });
    }

    if items.is_empty() {
        return Err(CartaError::ParseError(
            "no menu data found in workbook".into(),
        ));
    }

    Ok(RatioIngest { items, skipped })
}

fn cell_as_string(cell: &calamine::Data) -> Option<String> {
    match cell {
        calamine::Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        calamine::Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}

fn cell_as_f64(cell: &calamine::Data) -> Option<f64> {
    match cell {
        calamine::Data::Float(f) => Some(*f),
        calamine::Data::Int(i) => Some(*i as f64),
        _ => None,
    }
}

/// Convert f64 to Decimal via string round-trip so an exported 0.536
/// does not arrive as 0.53599999...
fn f64_to_decimal(f: f64) -> Decimal {
    let s = format!("{f}");
    s.parse::<Decimal>()
        .unwrap_or_else(|_| Decimal::try_from(f).unwrap_or_default())
}
