use crate::error::CartaError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Computed pricing record for one menu item. Read-only output for
/// renderers; nothing downstream recomputes these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuQuote {
    pub name: String,
    /// Total ingredient cost in currency units.
    pub cost: Decimal,
    /// Suggested selling price in currency units.
    pub suggested_price: Decimal,
    /// Gross margin as a fraction of the suggested price.
    pub gross_margin: Decimal,
    /// Price-tier label, e.g. "≤3,990" or ">9,990".
    pub tier: String,
    /// Average units sold per day, when the input carried it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_sales: Option<Decimal>,
}

/// A menu item that could not be priced. Collected per batch so one bad
/// row does not hide the rest, and no failure is silent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFailure {
    pub name: String,
    pub reason: String,
}

/// One tier's slice of the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierShare {
    pub tier: String,
    pub count: usize,
    /// Percentage of the full batch, 0-100.
    pub share_pct: Decimal,
}

/// Aggregate statistics over a batch of priced menu items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub item_count: usize,
    pub mean_price: Decimal,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub mean_margin: Decimal,
    /// Tier distribution, ascending by tier bound, above-maximum last.
    pub tier_distribution: Vec<TierShare>,
}

/// Summarize already-priced menu items.
///
/// Pure aggregation over upstream results. The percentage denominator is
/// the full batch handed in, never a subgroup.
pub fn summarize(quotes: &[MenuQuote]) -> Result<BatchSummary, CartaError> {
    if quotes.is_empty() {
        return Err(CartaError::EmptyBatch);
    }
    let count = Decimal::from(quotes.len());

    let mut price_sum = Decimal::ZERO;
    let mut margin_sum = Decimal::ZERO;
    let mut min_price = quotes[0].suggested_price;
    let mut max_price = quotes[0].suggested_price;
    for quote in quotes {
        price_sum += quote.suggested_price;
        margin_sum += quote.gross_margin;
        min_price = min_price.min(quote.suggested_price);
        max_price = max_price.max(quote.suggested_price);
    }

    let mut tier_counts: BTreeMap<String, usize> = BTreeMap::new();
    for quote in quotes {
        *tier_counts.entry(quote.tier.clone()).or_insert(0) += 1;
    }
    let mut tier_distribution: Vec<TierShare> = tier_counts
        .into_iter()
        .map(|(tier, n)| TierShare {
            share_pct: Decimal::from(n) / count * Decimal::ONE_HUNDRED,
            tier,
            count: n,
        })
        .collect();
    tier_distribution.sort_by_key(|share| tier_sort_key(&share.tier));

    Ok(BatchSummary {
        item_count: quotes.len(),
        mean_price: price_sum / count,
        min_price,
        max_price,
        mean_margin: margin_sum / count,
        tier_distribution,
    })
}

/// Sort key for tier labels: numeric bound ascending, with the
/// above-maximum (">") label after its bound's "≤" label.
fn tier_sort_key(label: &str) -> (Decimal, bool) {
    let above = label.starts_with('>');
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    let bound = digits.parse::<Decimal>().unwrap_or(Decimal::MAX);
    (bound, above)
}
