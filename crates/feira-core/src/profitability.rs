//! # Profitability Analyzer
//!
//! Stand economics: area, revenue, cost, profit, margin, efficiency and the
//! recommendation tier.
//!
//! ## Cost Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  area        = width × height × quantity                               │
//! │  total_price = area × price_per_area                                   │
//! │  setup_cost  = area × setup_cost_per_area                              │
//! │  allocated   = pool.total_value × area / pool.total_area               │
//! │  total_cost  = setup_cost + allocated                                  │
//! │  profit      = total_price − total_cost                                │
//! │  margin %    = profit / total_price × 100      (0 when price is 0)     │
//! │  efficiency  = profit / area                   (0 when area is 0)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every monetary product is rounded half away from zero to whole centavos.
//! Reported margins are kept to 2 decimal places; tiers are classified from
//! the exact margin, so 59.995% is `recommended` even though it reads 60.00.
//!
//! ## Division Guards
//! A pool spread over zero area, a zero price and a zero area are valid
//! states (an empty fair, a courtesy stand). They resolve to zero and are
//! logged at debug level instead of failing.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{
    FairAnalysis, ProfitabilityResult, ProfitabilityWarning, RecommendationTier,
    RequiredExpensePool, StandConfiguration,
};
use crate::validation::{validate_pool, validate_stand_configuration};

// =============================================================================
// Tier Thresholds
// =============================================================================

/// Minimum margin (%) for `highly_recommended`.
pub const HIGHLY_RECOMMENDED_MIN_MARGIN: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Minimum margin (%) for `recommended`.
pub const RECOMMENDED_MIN_MARGIN: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Minimum margin (%) for `moderate`. Below this is `not_recommended`.
pub const MODERATE_MIN_MARGIN: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Margin boundaries between recommendation tiers.
///
/// Each boundary is inclusive: a margin equal to `recommended` is
/// `Recommended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub highly_recommended: Decimal,
    pub recommended: Decimal,
    pub moderate: Decimal,
}

impl Default for TierThresholds {
    fn default() -> Self {
        TierThresholds {
            highly_recommended: HIGHLY_RECOMMENDED_MIN_MARGIN,
            recommended: RECOMMENDED_MIN_MARGIN,
            moderate: MODERATE_MIN_MARGIN,
        }
    }
}

impl TierThresholds {
    /// Creates thresholds, requiring them to be strictly descending.
    pub fn new(
        highly_recommended: Decimal,
        recommended: Decimal,
        moderate: Decimal,
    ) -> CoreResult<Self> {
        let thresholds = TierThresholds {
            highly_recommended,
            recommended,
            moderate,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Checks that the boundaries are strictly descending.
    pub fn validate(&self) -> CoreResult<()> {
        if self.highly_recommended <= self.recommended || self.recommended <= self.moderate {
            return Err(ValidationError::Inconsistent {
                field: "tier thresholds".to_string(),
                reason: format!(
                    "expected highly_recommended > recommended > moderate, got {} / {} / {}",
                    self.highly_recommended, self.recommended, self.moderate
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Maps a margin percentage to its tier.
    pub fn classify(&self, margin_percent: Decimal) -> RecommendationTier {
        if margin_percent >= self.highly_recommended {
            RecommendationTier::HighlyRecommended
        } else if margin_percent >= self.recommended {
            RecommendationTier::Recommended
        } else if margin_percent >= self.moderate {
            RecommendationTier::Moderate
        } else {
            RecommendationTier::NotRecommended
        }
    }
}

// =============================================================================
// Analyzer
// =============================================================================

/// Computes stand profitability against a required-expense pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfitabilityAnalyzer {
    thresholds: TierThresholds,
}

impl ProfitabilityAnalyzer {
    pub fn new(thresholds: TierThresholds) -> CoreResult<Self> {
        thresholds.validate()?;
        Ok(ProfitabilityAnalyzer { thresholds })
    }

    /// Area of a single stand: `width × height`.
    pub fn compute_area(&self, config: &StandConfiguration) -> CoreResult<Decimal> {
        config.area()
    }

    /// Share of the pool for `area` m².
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::money::Money;
    /// use feira_core::profitability::ProfitabilityAnalyzer;
    /// use feira_core::types::RequiredExpensePool;
    /// use rust_decimal::Decimal;
    ///
    /// let analyzer = ProfitabilityAnalyzer::default();
    /// let pool = RequiredExpensePool::new(Money::from_cents(90_000), Decimal::from(900));
    /// let share = analyzer.allocate_required_expense(&pool, Decimal::from(9)).unwrap();
    /// assert_eq!(share.cents(), 900);
    ///
    /// let empty = RequiredExpensePool::new(Money::from_cents(1_000), Decimal::ZERO);
    /// assert!(analyzer.allocate_required_expense(&empty, Decimal::from(9)).unwrap().is_zero());
    /// ```
    pub fn allocate_required_expense(
        &self,
        pool: &RequiredExpensePool,
        area: Decimal,
    ) -> CoreResult<Money> {
        if pool.total_area <= Decimal::ZERO {
            debug!(pool_cents = pool.total_value.cents(), "Pool has no area, allocating zero");
            return Ok(Money::zero());
        }

        pool.total_value
            .to_decimal_cents()
            .checked_mul(area)
            .and_then(|weighted| weighted.checked_div(pool.total_area))
            .and_then(Money::from_decimal_cents)
            .ok_or_else(|| CoreError::overflow("allocated expense"))
    }

    /// Profitability of one configuration.
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::money::Money;
    /// use feira_core::profitability::ProfitabilityAnalyzer;
    /// use feira_core::types::{RecommendationTier, RequiredExpensePool, StandConfiguration};
    /// use rust_decimal::Decimal;
    ///
    /// let config = StandConfiguration {
    ///     width: Decimal::from(3),
    ///     height: Decimal::from(3),
    ///     quantity: 1,
    ///     price_per_area: Money::from_cents(1_000),
    ///     setup_cost_per_area: Money::from_cents(200),
    /// };
    /// let pool = RequiredExpensePool::new(Money::from_cents(90_000), Decimal::from(900));
    ///
    /// let result = ProfitabilityAnalyzer::default()
    ///     .compute_stand_metrics(&config, &pool)
    ///     .unwrap();
    /// assert_eq!(result.profit.cents(), 6_300);
    /// assert_eq!(result.margin_percent, Decimal::from(70));
    /// assert_eq!(result.recommendation_tier, RecommendationTier::HighlyRecommended);
    /// ```
    pub fn compute_stand_metrics(
        &self,
        config: &StandConfiguration,
        pool: &RequiredExpensePool,
    ) -> CoreResult<ProfitabilityResult> {
        validate_stand_configuration(config)?;
        validate_pool(pool)?;

        let stand_area = self.compute_area(config)?;
        let area = config.total_area()?;

        let total_price = config
            .price_per_area
            .times_decimal(area)
            .ok_or_else(|| CoreError::overflow("total price"))?;
        let setup_cost = config
            .setup_cost_per_area
            .times_decimal(area)
            .ok_or_else(|| CoreError::overflow("setup cost"))?;
        let allocated_expense = self.allocate_required_expense(pool, area)?;

        let total_cost = setup_cost
            .checked_add(allocated_expense)
            .ok_or_else(|| CoreError::overflow("total cost"))?;
        let profit = total_price
            .checked_sub(total_cost)
            .ok_or_else(|| CoreError::overflow("profit"))?;

        let exact_margin = exact_margin_percent(total_price, profit);
        let efficiency = efficiency(profit, area)?;

        let mut warnings = Vec::new();
        if config.price_per_area <= config.setup_cost_per_area {
            warn!(
                price_per_area = config.price_per_area.cents(),
                setup_cost_per_area = config.setup_cost_per_area.cents(),
                "Stand priced at or below its setup cost"
            );
            warnings.push(ProfitabilityWarning::PriceNotAboveSetupCost {
                price_per_area: config.price_per_area,
                setup_cost_per_area: config.setup_cost_per_area,
            });
        }

        Ok(ProfitabilityResult {
            stand_area,
            quantity: config.quantity,
            area,
            total_price,
            setup_cost,
            allocated_expense,
            total_cost,
            profit,
            margin_percent: round_percent(exact_margin),
            efficiency,
            recommendation_tier: self.classify(exact_margin),
            warnings,
        })
    }

    /// Maps a margin percentage to a tier using this analyzer's thresholds.
    ///
    /// Pass the exact margin; a rounded one can cross a boundary.
    pub fn classify(&self, margin_percent: Decimal) -> RecommendationTier {
        self.thresholds.classify(margin_percent)
    }

    /// Profitability of every configuration and of the fair as a whole.
    ///
    /// The overall margin comes from the summed price and profit. Averaging
    /// per-configuration margins would weight a single 2 m² stand the same
    /// as fifty 9 m² ones.
    pub fn analyze(
        &self,
        configs: &[StandConfiguration],
        pool: &RequiredExpensePool,
    ) -> CoreResult<FairAnalysis> {
        let configurations = configs
            .iter()
            .map(|config| self.compute_stand_metrics(config, pool))
            .collect::<CoreResult<Vec<_>>>()?;

        let mut total_area = Decimal::ZERO;
        let mut total_price = Money::zero();
        let mut total_cost = Money::zero();
        for result in &configurations {
            total_area = total_area
                .checked_add(result.area)
                .ok_or_else(|| CoreError::overflow("fair total area"))?;
            total_price = total_price
                .checked_add(result.total_price)
                .ok_or_else(|| CoreError::overflow("fair total price"))?;
            total_cost = total_cost
                .checked_add(result.total_cost)
                .ok_or_else(|| CoreError::overflow("fair total cost"))?;
        }
        let profit = total_price
            .checked_sub(total_cost)
            .ok_or_else(|| CoreError::overflow("fair profit"))?;
        let exact_margin = exact_margin_percent(total_price, profit);
        let margin_percent = round_percent(exact_margin);

        // First configuration wins ties
        let best_configuration = configurations
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, Money)>, (index, result)| match best {
                Some((_, top)) if top >= result.efficiency => best,
                _ => Some((index, result.efficiency)),
            })
            .map(|(index, _)| index);

        debug!(
            configurations = configurations.len(),
            total_price = total_price.cents(),
            profit = profit.cents(),
            %margin_percent,
            "Fair analysis complete"
        );

        Ok(FairAnalysis {
            configurations,
            total_area,
            total_price,
            total_cost,
            profit,
            margin_percent,
            recommendation_tier: self.classify(exact_margin),
            best_configuration,
        })
    }

    /// Analyzes a fair, spreading `required_expenses` over the configured area.
    pub fn analyze_fair(
        &self,
        configs: &[StandConfiguration],
        required_expenses: Money,
    ) -> CoreResult<FairAnalysis> {
        for config in configs {
            validate_stand_configuration(config)?;
        }
        let pool = RequiredExpensePool::for_configurations(required_expenses, configs)?;
        self.analyze(configs, &pool)
    }
}

/// `profit / price × 100`, unrounded; zero when price is not positive.
fn exact_margin_percent(total_price: Money, profit: Money) -> Decimal {
    if !total_price.is_positive() {
        debug!("Zero price, margin resolves to zero");
        return Decimal::ZERO;
    }

    // |profit| × 100 stays far below Decimal::MAX for any i64 profit
    profit.to_decimal_cents() * Decimal::ONE_HUNDRED / total_price.to_decimal_cents()
}

fn round_percent(percent: Decimal) -> Decimal {
    percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `profit / area` in whole centavos per m²; zero when area is not positive.
fn efficiency(profit: Money, area: Decimal) -> CoreResult<Money> {
    if area <= Decimal::ZERO {
        debug!("Zero area, efficiency resolves to zero");
        return Ok(Money::zero());
    }

    profit
        .to_decimal_cents()
        .checked_div(area)
        .and_then(Money::from_decimal_cents)
        .ok_or_else(|| CoreError::overflow("efficiency"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stand(
        width: Decimal,
        height: Decimal,
        quantity: i64,
        price: i64,
        setup: i64,
    ) -> StandConfiguration {
        StandConfiguration {
            width,
            height,
            quantity,
            price_per_area: Money::from_cents(price),
            setup_cost_per_area: Money::from_cents(setup),
        }
    }

    fn analyzer() -> ProfitabilityAnalyzer {
        ProfitabilityAnalyzer::default()
    }

    #[test]
    fn test_reference_stand() {
        let config = stand(dec!(3), dec!(3), 1, 1_000, 200);
        let pool = RequiredExpensePool::new(Money::from_cents(90_000), dec!(900));

        let result = analyzer().compute_stand_metrics(&config, &pool).unwrap();
        assert_eq!(result.area, dec!(9));
        assert_eq!(result.total_price.cents(), 9_000);
        assert_eq!(result.setup_cost.cents(), 1_800);
        assert_eq!(result.allocated_expense.cents(), 900);
        assert_eq!(result.total_cost.cents(), 2_700);
        assert_eq!(result.profit.cents(), 6_300);
        assert_eq!(result.margin_percent, dec!(70));
        assert_eq!(result.efficiency.cents(), 700);
        assert_eq!(result.recommendation_tier, RecommendationTier::HighlyRecommended);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_compute_area() {
        let config = stand(dec!(2.5), dec!(3), 4, 0, 0);
        assert_eq!(analyzer().compute_area(&config).unwrap(), dec!(7.5));
    }

    #[test]
    fn test_quantity_scales_configuration() {
        let config = stand(dec!(3), dec!(3), 10, 1_000, 200);
        let pool = RequiredExpensePool::new(Money::from_cents(90_000), dec!(900));

        let result = analyzer().compute_stand_metrics(&config, &pool).unwrap();
        assert_eq!(result.stand_area, dec!(9));
        assert_eq!(result.area, dec!(90));
        assert_eq!(result.total_price.cents(), 90_000);
        assert_eq!(result.allocated_expense.cents(), 9_000);
        // Margin and efficiency do not depend on quantity
        assert_eq!(result.margin_percent, dec!(70));
        assert_eq!(result.efficiency.cents(), 700);
    }

    #[test]
    fn test_allocation_rounds_to_centavo() {
        let pool = RequiredExpensePool::new(Money::from_cents(1_000), dec!(3));
        // 1000 / 3 = 333.33 → 333
        assert_eq!(
            analyzer().allocate_required_expense(&pool, dec!(1)).unwrap().cents(),
            333
        );
        // 2000 / 3 = 666.67 → 667
        assert_eq!(
            analyzer().allocate_required_expense(&pool, dec!(2)).unwrap().cents(),
            667
        );
    }

    #[test]
    fn test_allocation_with_zero_pool_area() {
        let pool = RequiredExpensePool::new(Money::from_cents(1_000), Decimal::ZERO);
        assert_eq!(
            analyzer().allocate_required_expense(&pool, dec!(9)).unwrap(),
            Money::zero()
        );
    }

    #[test]
    fn test_margin_is_zero_for_free_stand() {
        let config = stand(dec!(2), dec!(2), 1, 0, 0);
        let result = analyzer()
            .compute_stand_metrics(&config, &RequiredExpensePool::default())
            .unwrap();
        assert_eq!(result.total_price, Money::zero());
        assert_eq!(result.margin_percent, Decimal::ZERO);
        assert_eq!(result.recommendation_tier, RecommendationTier::NotRecommended);
    }

    #[test]
    fn test_margin_is_full_without_costs() {
        let config = stand(dec!(2), dec!(2), 1, 5_000, 0);
        let result = analyzer()
            .compute_stand_metrics(&config, &RequiredExpensePool::default())
            .unwrap();
        assert_eq!(result.margin_percent, dec!(100));
    }

    #[test]
    fn test_negative_margin() {
        let config = stand(dec!(2), dec!(2), 1, 1_000, 1_500);
        let result = analyzer()
            .compute_stand_metrics(&config, &RequiredExpensePool::default())
            .unwrap();
        assert_eq!(result.profit.cents(), -2_000);
        assert_eq!(result.margin_percent, dec!(-50));
        assert_eq!(result.efficiency.cents(), -500);
        assert_eq!(result.recommendation_tier, RecommendationTier::NotRecommended);
        assert_eq!(
            result.warnings,
            vec![ProfitabilityWarning::PriceNotAboveSetupCost {
                price_per_area: Money::from_cents(1_000),
                setup_cost_per_area: Money::from_cents(1_500),
            }]
        );
    }

    #[test]
    fn test_margin_rounding() {
        // price 3000, cost 1000 → 66.666… → 66.67
        let config = stand(dec!(1), dec!(3), 1, 1_000, 0);
        let pool = RequiredExpensePool::new(Money::from_cents(1_000), dec!(3));
        let result = analyzer().compute_stand_metrics(&config, &pool).unwrap();
        assert_eq!(result.margin_percent, dec!(66.67));
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let pool = RequiredExpensePool::default();
        assert!(analyzer()
            .compute_stand_metrics(&stand(dec!(0), dec!(3), 1, 1_000, 0), &pool)
            .is_err());
        assert!(analyzer()
            .compute_stand_metrics(&stand(dec!(3), dec!(3), 0, 1_000, 0), &pool)
            .is_err());
        assert!(analyzer()
            .compute_stand_metrics(&stand(dec!(3), dec!(3), 1, -1, 0), &pool)
            .is_err());
    }

    #[test]
    fn test_classify_boundaries() {
        let a = analyzer();
        assert_eq!(a.classify(dec!(60)), RecommendationTier::HighlyRecommended);
        assert_eq!(a.classify(dec!(59.99)), RecommendationTier::Recommended);
        assert_eq!(a.classify(dec!(40)), RecommendationTier::Recommended);
        assert_eq!(a.classify(dec!(39.99)), RecommendationTier::Moderate);
        assert_eq!(a.classify(dec!(20)), RecommendationTier::Moderate);
        assert_eq!(a.classify(dec!(19.99)), RecommendationTier::NotRecommended);
        assert_eq!(a.classify(dec!(-10)), RecommendationTier::NotRecommended);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = TierThresholds::new(dec!(50), dec!(30), dec!(10)).unwrap();
        let a = ProfitabilityAnalyzer::new(thresholds).unwrap();
        assert_eq!(a.classify(dec!(55)), RecommendationTier::HighlyRecommended);
        assert_eq!(a.classify(dec!(15)), RecommendationTier::Moderate);

        assert!(TierThresholds::new(dec!(40), dec!(40), dec!(10)).is_err());
        assert!(TierThresholds::new(dec!(10), dec!(30), dec!(50)).is_err());
    }

    #[test]
    fn test_aggregate_margin_uses_sums() {
        // A: 1 stand, price 10000, cost 0  → 100%
        // B: 9 stands, price 90000, cost 81000 → 10%
        // Average of margins = 55%, true margin = 19000 / 100000 = 19%
        let a = stand(dec!(1), dec!(1), 1, 10_000, 0);
        let b = stand(dec!(1), dec!(1), 9, 10_000, 9_000);

        let analysis = analyzer()
            .analyze(&[a, b], &RequiredExpensePool::default())
            .unwrap();
        assert_eq!(analysis.total_area, dec!(10));
        assert_eq!(analysis.total_price.cents(), 100_000);
        assert_eq!(analysis.total_cost.cents(), 81_000);
        assert_eq!(analysis.profit.cents(), 19_000);
        assert_eq!(analysis.margin_percent, dec!(19));
        assert_eq!(analysis.recommendation_tier, RecommendationTier::NotRecommended);
        assert_eq!(analysis.best_configuration, Some(0));
    }

    #[test]
    fn test_analyze_fair_spreads_pool_over_configured_area() {
        let small = stand(dec!(2), dec!(2), 5, 1_000, 100); // 20 m²
        let large = stand(dec!(4), dec!(5), 4, 1_000, 100); // 80 m²

        let analysis = analyzer()
            .analyze_fair(&[small, large], Money::from_cents(10_000))
            .unwrap();
        assert_eq!(analysis.configurations[0].allocated_expense.cents(), 2_000);
        assert_eq!(analysis.configurations[1].allocated_expense.cents(), 8_000);

        let allocated: Money = analysis
            .configurations
            .iter()
            .map(|r| r.allocated_expense)
            .sum();
        assert_eq!(allocated.cents(), 10_000);
    }

    #[test]
    fn test_analyze_empty_fair() {
        let analysis = analyzer().analyze(&[], &RequiredExpensePool::default()).unwrap();
        assert!(analysis.configurations.is_empty());
        assert_eq!(analysis.margin_percent, Decimal::ZERO);
        assert_eq!(analysis.recommendation_tier, RecommendationTier::NotRecommended);
        assert_eq!(analysis.best_configuration, None);
    }

    #[test]
    fn test_tier_uses_exact_margin() {
        // price 20000, cost 8001 → 59.995%, reported as 60.00
        let config = stand(dec!(1), dec!(1), 1, 20_000, 8_001);
        let result = analyzer()
            .compute_stand_metrics(&config, &RequiredExpensePool::default())
            .unwrap();
        assert_eq!(result.margin_percent, dec!(60));
        assert_eq!(result.recommendation_tier, RecommendationTier::Recommended);

        let analysis = analyzer()
            .analyze(&[config], &RequiredExpensePool::default())
            .unwrap();
        assert_eq!(analysis.margin_percent, dec!(60));
        assert_eq!(analysis.recommendation_tier, RecommendationTier::Recommended);
    }

    #[test]
    fn test_margin_exactly_at_thresholds() {
        let pool = RequiredExpensePool::default();
        let cases = [
            (4_000, dec!(60), RecommendationTier::HighlyRecommended),
            (6_000, dec!(40), RecommendationTier::Recommended),
            (8_000, dec!(20), RecommendationTier::Moderate),
            (8_001, dec!(19.99), RecommendationTier::NotRecommended),
        ];

        for (setup, margin, tier) in cases {
            let config = stand(dec!(1), dec!(1), 1, 10_000, setup);
            let result = analyzer().compute_stand_metrics(&config, &pool).unwrap();
            assert_eq!(result.margin_percent, margin, "setup {}", setup);
            assert_eq!(result.recommendation_tier, tier, "setup {}", setup);
        }

        // 19.995% reads 20.00 but stays below the boundary
        let config = stand(dec!(1), dec!(1), 1, 20_000, 16_001);
        let result = analyzer().compute_stand_metrics(&config, &pool).unwrap();
        assert_eq!(result.margin_percent, dec!(20));
        assert_eq!(result.recommendation_tier, RecommendationTier::NotRecommended);
    }

    #[test]
    fn test_huge_dimensions_report_overflow() {
        let huge = Decimal::from(100_000_000_000_000i64);
        let config = stand(huge, huge, 1_000, 1_000, 200);

        let err = analyzer()
            .compute_stand_metrics(&config, &RequiredExpensePool::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));

        let err = analyzer()
            .analyze_fair(&[config], Money::from_cents(10_000))
            .unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
    }

    #[test]
    fn test_analyze_fair_validates_before_pooling() {
        let bad = stand(dec!(-3), dec!(3), 1, 1_000, 200);
        let err = analyzer()
            .analyze_fair(&[bad], Money::from_cents(10_000))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_fair_total_area_overflow() {
        // Each layout is representable; the fair's total area is not
        let big = Decimal::from(50_000_000_000_000i64);
        let config = stand(big, big, 20, 0, 0);
        let pool = RequiredExpensePool::new(Money::zero(), dec!(1));

        let err = analyzer().analyze(&[config, config], &pool).unwrap_err();
        assert_eq!(err, CoreError::overflow("fair total area"));
    }

    #[test]
    fn test_overflow_is_reported() {
        let config = stand(dec!(1000), dec!(1000), 1000, i64::MAX, 0);
        let err = analyzer()
            .compute_stand_metrics(&config, &RequiredExpensePool::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
    }
}
