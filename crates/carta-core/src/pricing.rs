use crate::error::CartaError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-supplied pricing parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fraction of the suggested price expected to be spent on
    /// ingredients. Open interval (0, 1).
    pub ideal_food_cost_pct: Decimal,
    /// Notional reference cost for ratio-mode input.
    pub base_cost: Decimal,
    /// Tier thresholds in currency units. Any order; the classifier sorts.
    pub tiers: Vec<Decimal>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            ideal_food_cost_pct: Decimal::new(30, 2),
            base_cost: Decimal::ONE_THOUSAND,
            tiers: vec![
                Decimal::from(3990),
                Decimal::from(7990),
                Decimal::from(9990),
            ],
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<(), CartaError> {
        if self.ideal_food_cost_pct <= Decimal::ZERO || self.ideal_food_cost_pct >= Decimal::ONE {
            return Err(CartaError::InvalidRatio {
                ratio: self.ideal_food_cost_pct,
            });
        }
        if self.base_cost <= Decimal::ZERO {
            return Err(CartaError::InvalidConfiguration(format!(
                "base cost {} must be positive",
                self.base_cost
            )));
        }
        if self.tiers.is_empty() {
            return Err(CartaError::InvalidConfiguration(
                "tier thresholds must not be empty".into(),
            ));
        }
        if let Some(t) = self.tiers.iter().find(|t| **t <= Decimal::ZERO) {
            return Err(CartaError::InvalidConfiguration(format!(
                "tier threshold {t} must be positive"
            )));
        }
        Ok(())
    }
}

/// How a menu item's ingredient cost is known.
///
/// Ratio-mode data (a share of a notional base cost instead of an
/// absolute amount) resolves to the same currency cost and flows through
/// the same calculator as direct costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostBasis {
    /// Absolute ingredient cost in currency units.
    Direct(Decimal),
    /// Fraction of the configured base-cost anchor.
    CostRatio(Decimal),
}

impl CostBasis {
    /// Resolve to an absolute cost in currency units.
    pub fn resolve(self, base_cost: Decimal) -> Decimal {
        match self {
            CostBasis::Direct(cost) => cost,
            CostBasis::CostRatio(ratio) => base_cost * ratio,
        }
    }
}

/// Suggested selling price for a given ingredient cost.
///
/// `cost / ideal_pct`: at the suggested price, ingredients consume
/// exactly the ideal share of revenue. A ratio of 0 would mean an
/// infinite price and a ratio >= 1 a non-positive margin, so both are
/// rejected.
pub fn suggested_price(cost: Decimal, ideal_pct: Decimal) -> Result<Decimal, CartaError> {
    if ideal_pct <= Decimal::ZERO || ideal_pct >= Decimal::ONE {
        return Err(CartaError::InvalidRatio { ratio: ideal_pct });
    }
    Ok(cost / ideal_pct)
}

/// Gross margin as a fraction of the selling price: `(price - cost) / price`.
pub fn gross_margin(price: Decimal, cost: Decimal) -> Result<Decimal, CartaError> {
    if price <= Decimal::ZERO {
        return Err(CartaError::InvalidPrice { price });
    }
    Ok((price - cost) / price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_suggested_price() {
        assert_eq!(suggested_price(dec!(1050), dec!(0.30)).unwrap(), dec!(3500));
    }

    #[test]
    fn test_ratio_bounds_rejected() {
        for pct in [dec!(0), dec!(1), dec!(-0.1), dec!(1.5)] {
            let err = suggested_price(dec!(1000), pct).unwrap_err();
            assert!(matches!(err, CartaError::InvalidRatio { .. }));
        }
    }

    #[test]
    fn test_gross_margin() {
        assert_eq!(gross_margin(dec!(3500), dec!(1050)).unwrap(), dec!(0.70));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        for price in [dec!(0), dec!(-100)] {
            let err = gross_margin(price, dec!(50)).unwrap_err();
            assert!(matches!(err, CartaError::InvalidPrice { .. }));
        }
    }

    #[test]
    fn test_margin_is_complement_of_food_cost_ratio() {
        // For any cost c and ratio r: margin(price(c, r), c) == 1 - r.
        // Exact wherever the division terminates.
        for (cost, pct) in [
            (dec!(1050), dec!(0.30)),
            (dec!(536), dec!(0.25)),
            (dec!(2493), dec!(0.50)),
            (dec!(480), dec!(0.32)),
        ] {
            let price = suggested_price(cost, pct).unwrap();
            let margin = gross_margin(price, cost).unwrap();
            assert_eq!(margin, Decimal::ONE - pct, "cost={cost} pct={pct}");
        }
    }

    #[test]
    fn test_margin_identity_with_repeating_division() {
        // 536 / 0.30 does not terminate; the identity still holds past
        // any display precision.
        let price = suggested_price(dec!(536), dec!(0.30)).unwrap();
        let margin = gross_margin(price, dec!(536)).unwrap();
        assert_eq!(price.round_dp(2), dec!(1786.67));
        assert_eq!(margin.round_dp(12), dec!(0.70));
    }

    #[test]
    fn test_cost_basis_resolution() {
        assert_eq!(CostBasis::Direct(dec!(536)).resolve(dec!(1000)), dec!(536));
        assert_eq!(
            CostBasis::CostRatio(dec!(0.536)).resolve(dec!(1000)),
            dec!(536)
        );
    }

    #[test]
    fn test_ratio_mode_matches_direct_mode() {
        let cfg = PricingConfig::default();
        let direct = CostBasis::Direct(dec!(536)).resolve(cfg.base_cost);
        let via_ratio = CostBasis::CostRatio(dec!(0.536)).resolve(cfg.base_cost);
        assert_eq!(direct, via_ratio);
        assert_eq!(
            suggested_price(direct, cfg.ideal_food_cost_pct).unwrap(),
            suggested_price(via_ratio, cfg.ideal_food_cost_pct).unwrap()
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_ratio() {
        let cfg = PricingConfig {
            ideal_food_cost_pct: dec!(1),
            ..PricingConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            CartaError::InvalidRatio { .. }
        ));
    }

    #[test]
    fn test_config_rejects_empty_tiers() {
        let cfg = PricingConfig {
            tiers: vec![],
            ..PricingConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            CartaError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn test_config_rejects_non_positive_tier() {
        let cfg = PricingConfig {
            tiers: vec![dec!(3990), dec!(0)],
            ..PricingConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            CartaError::InvalidConfiguration(_)
        ));
    }
}
