use crate::error::CartaError;
use rust_decimal::Decimal;

/// Bucket a suggested price into an ordered set of price tiers.
///
/// Thresholds are sorted ascending before comparison, whatever order the
/// caller supplied. The first threshold at or above the price wins, so a
/// price exactly on a boundary belongs to the lower tier: a 3,990 item
/// is "at or under 3,990", never "over 3,990". Prices above every
/// threshold get the above-maximum label keyed on the largest one.
pub fn classify(price: Decimal, thresholds: &[Decimal]) -> Result<String, CartaError> {
    if thresholds.is_empty() {
        return Err(CartaError::InvalidConfiguration(
            "tier thresholds must not be empty".into(),
        ));
    }
    if let Some(t) = thresholds.iter().find(|t| **t <= Decimal::ZERO) {
        return Err(CartaError::InvalidConfiguration(format!(
            "tier threshold {t} must be positive"
        )));
    }

    let mut sorted = thresholds.to_vec();
    sorted.sort();

    for threshold in &sorted {
        if price <= *threshold {
            return Ok(format!("≤{}", format_threshold(*threshold)));
        }
    }
    // sorted is non-empty here
    Ok(format!(">{}", format_threshold(sorted[sorted.len() - 1])))
}

/// Threshold rendered with thousands separators, whole currency units.
fn format_threshold(threshold: Decimal) -> String {
    let digits = threshold.trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn default_tiers() -> Vec<Decimal> {
        vec![dec!(3990), dec!(7990), dec!(9990)]
    }

    #[test]
    fn test_price_below_first_threshold() {
        assert_eq!(classify(dec!(3500), &default_tiers()).unwrap(), "≤3,990");
    }

    #[test]
    fn test_boundary_belongs_to_lower_tier() {
        assert_eq!(classify(dec!(3990), &default_tiers()).unwrap(), "≤3,990");
        assert_eq!(classify(dec!(3990.01), &default_tiers()).unwrap(), "≤7,990");
        assert_eq!(classify(dec!(9990), &default_tiers()).unwrap(), "≤9,990");
    }

    #[test]
    fn test_price_above_all_thresholds() {
        assert_eq!(classify(dec!(12000), &default_tiers()).unwrap(), ">9,990");
    }

    #[test]
    fn test_unsorted_thresholds_accepted() {
        let tiers = vec![dec!(9990), dec!(3990), dec!(7990)];
        assert_eq!(classify(dec!(5000), &tiers).unwrap(), "≤7,990");
        assert_eq!(classify(dec!(20000), &tiers).unwrap(), ">9,990");
    }

    #[test]
    fn test_empty_thresholds_rejected() {
        let err = classify(dec!(5000), &[]).unwrap_err();
        assert!(matches!(err, CartaError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let err = classify(dec!(5000), &[dec!(-10)]).unwrap_err();
        assert!(matches!(err, CartaError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_single_threshold() {
        assert_eq!(classify(dec!(900), &[dec!(1000)]).unwrap(), "≤1,000");
        assert_eq!(classify(dec!(1100), &[dec!(1000)]).unwrap(), ">1,000");
    }

    #[test]
    fn test_threshold_formatting() {
        assert_eq!(format_threshold(dec!(990)), "990");
        assert_eq!(format_threshold(dec!(3990)), "3,990");
        assert_eq!(format_threshold(dec!(1234567)), "1,234,567");
    }
}
