use carta_core::model::Catalog;
use carta_core::pricing::PricingConfig;
use carta_core::PricingOutcome;
use rust_decimal::Decimal;

pub fn print_outcome(outcome: &PricingOutcome, config: &PricingConfig) {
    let target_margin = (Decimal::ONE - config.ideal_food_cost_pct) * Decimal::ONE_HUNDRED;
    println!(
        "Pricing basis: food-cost {}%, target margin {}%\n",
        (config.ideal_food_cost_pct * Decimal::ONE_HUNDRED).normalize(),
        target_margin.normalize()
    );

    let with_sales = outcome.quotes.iter().any(|q| q.daily_sales.is_some());
    let name_width = outcome
        .quotes
        .iter()
        .map(|q| q.name.chars().count())
        .max()
        .unwrap_or(10)
        .max(4);

    if with_sales {
        println!(
            "{:<name_width$}  {:>10}  {:>12}  {:>8}  {:>10}  {:<10}",
            "Menu", "Cost", "Suggested", "Margin", "Sales/day", "Tier"
        );
    } else {
        println!(
            "{:<name_width$}  {:>10}  {:>12}  {:>8}  {:<10}",
            "Menu", "Cost", "Suggested", "Margin", "Tier"
        );
    }

    for quote in &outcome.quotes {
        let margin_pct = format!("{}%", (quote.gross_margin * Decimal::ONE_HUNDRED).round_dp(1));
        if with_sales {
            let sales = quote
                .daily_sales
                .map(|s| s.round_dp(1).to_string())
                .unwrap_or_else(|| "-".into());
            println!(
                "{:<name_width$}  {:>10}  {:>12}  {:>8}  {:>10}  {:<10}",
                quote.name,
                fmt_amount(quote.cost),
                fmt_amount(quote.suggested_price),
                margin_pct,
                sales,
                quote.tier
            );
        } else {
            println!(
                "{:<name_width$}  {:>10}  {:>12}  {:>8}  {:<10}",
                quote.name,
                fmt_amount(quote.cost),
                fmt_amount(quote.suggested_price),
                margin_pct,
                quote.tier
            );
        }
    }

    let summary = &outcome.summary;
    println!("\nStatistics over {} item(s):", summary.item_count);
    println!("  mean price: {}", fmt_amount(summary.mean_price));
    println!("  min price:  {}", fmt_amount(summary.min_price));
    println!("  max price:  {}", fmt_amount(summary.max_price));
    println!(
        "  mean margin: {}%",
        (summary.mean_margin * Decimal::ONE_HUNDRED).round_dp(1)
    );

    println!("\nTier distribution:");
    for share in &summary.tier_distribution {
        println!(
            "  {}: {} item(s) ({}%)",
            share.tier,
            share.count,
            share.share_pct.round_dp(1)
        );
    }

    if !outcome.failures.is_empty() {
        println!("\nNot priced:");
        for failure in &outcome.failures {
            println!("  {}: {}", failure.name, failure.reason);
        }
    }
}

pub fn print_catalog(catalog: &Catalog) {
    let name_width = catalog
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(10)
        .max(10);

    println!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}",
        "Ingredient", "Weight (kg)", "Cost", "Price/kg"
    );
    for ingredient in catalog.iter() {
        println!(
            "{:<name_width$}  {:>12}  {:>12}  {:>12}",
            ingredient.name,
            ingredient.weight_kg.normalize(),
            fmt_amount(ingredient.cost),
            fmt_amount(ingredient.unit_price())
        );
    }
}

/// Currency amount rounded to whole units with thousands separators.
/// Display-only; classification upstream always sees the exact value.
fn fmt_amount(amount: Decimal) -> String {
    let digits = amount.round_dp(0).trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
