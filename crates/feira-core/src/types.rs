//! # Domain Types
//!
//! Plain data carried between the dashboard and the calculation core.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Revenue form                       Stand analytics                     │
//! │  ┌─────────────────┐                ┌──────────────────────┐            │
//! │  │    Contract     │                │  StandConfiguration  │            │
//! │  │  base_value     │                │  width × height      │            │
//! │  │  discount       │                │  quantity            │            │
//! │  │  contract_value │                │  price/setup per m²  │            │
//! │  └────────┬────────┘                └──────────┬───────────┘            │
//! │           ▼                                    ▼                        │
//! │  ┌─────────────────┐                ┌──────────────────────┐            │
//! │  │  Installment[]  │                │ ProfitabilityResult  │◄── Pool    │
//! │  │  seq, amount,   │                │ margin, efficiency,  │            │
//! │  │  due_date       │                │ RecommendationTier   │            │
//! │  └─────────────────┘                └──────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are persisted here. They are computed on demand and handed
//! to the revenue / analytics APIs by the caller.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Contract
// =============================================================================

/// A stand sale: catalog price, negotiated discount and final value.
///
/// ## Invariants
/// - `contract_value = base_value - discount`
/// - `discount >= 0`, so `contract_value <= base_value`
/// - `installment_count >= 1`
///
/// Build it through `ContractCalculator::build_contract`, which enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Catalog price of the stand.
    pub base_value: Money,

    /// Negotiated reduction, never negative.
    pub discount: Money,

    /// What the client agrees to pay.
    pub contract_value: Money,

    /// Number of monthly installments.
    pub installment_count: i64,
}

impl Contract {
    /// Discount as a percentage of the base value, rounded to 2 places.
    ///
    /// Zero when the base value is zero.
    pub fn discount_percent(&self) -> Decimal {
        if self.base_value.is_zero() {
            return Decimal::ZERO;
        }

        (self.discount.to_decimal_cents() * Decimal::ONE_HUNDRED
            / self.base_value.to_decimal_cents())
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

// =============================================================================
// Installment
// =============================================================================

/// One payment of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// 1-based position in the schedule.
    pub sequence_number: u32,

    pub amount: Money,

    /// Calendar date, no time-of-day.
    #[ts(as = "String")]
    pub due_date: NaiveDate,
}

/// A validated contract together with its schedule.
///
/// This is the unit the revenue API persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentPlan {
    pub contract: Contract,
    pub installments: Vec<Installment>,
}

// =============================================================================
// Stand Configuration
// =============================================================================

/// A stand layout offered at a fair.
///
/// Prices are per square metre; dimensions are decimal metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StandConfiguration {
    /// Width in metres.
    #[ts(type = "string")]
    pub width: Decimal,

    /// Depth in metres.
    #[ts(type = "string")]
    pub height: Decimal,

    /// How many stands of this layout are offered.
    pub quantity: i64,

    /// Sale price per m².
    pub price_per_area: Money,

    /// Setup (assembly) cost per m².
    pub setup_cost_per_area: Money,
}

impl StandConfiguration {
    /// Area of a single stand (width × height).
    pub fn area(&self) -> CoreResult<Decimal> {
        self.width
            .checked_mul(self.height)
            .ok_or_else(|| CoreError::overflow("stand area"))
    }

    /// Area of every stand in this configuration.
    pub fn total_area(&self) -> CoreResult<Decimal> {
        self.area()?
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| CoreError::overflow("area"))
    }
}

// =============================================================================
// Required Expense Pool
// =============================================================================

/// Mandatory shared costs (venue, infrastructure) spread over occupied area.
///
/// A read-only snapshot supplied by the expense subsystem for one
/// calculation. The core never caches or mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RequiredExpensePool {
    pub total_value: Money,

    /// Area the pool is spread over, in m².
    #[ts(type = "string")]
    pub total_area: Decimal,
}

impl RequiredExpensePool {
    pub fn new(total_value: Money, total_area: Decimal) -> Self {
        RequiredExpensePool {
            total_value,
            total_area,
        }
    }

    /// Builds the pool over the area of every configured stand.
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::money::Money;
    /// use feira_core::types::{RequiredExpensePool, StandConfiguration};
    /// use rust_decimal::Decimal;
    ///
    /// let small = StandConfiguration {
    ///     width: Decimal::from(3),
    ///     height: Decimal::from(3),
    ///     quantity: 10,
    ///     price_per_area: Money::from_cents(1_000),
    ///     setup_cost_per_area: Money::from_cents(200),
    /// };
    /// let pool = RequiredExpensePool::for_configurations(Money::from_cents(90_000), &[small])
    ///     .unwrap();
    /// assert_eq!(pool.total_area, Decimal::from(90));
    /// ```
    pub fn for_configurations(
        total_value: Money,
        configs: &[StandConfiguration],
    ) -> CoreResult<Self> {
        let total_area = configs.iter().try_fold(Decimal::ZERO, |sum, config| {
            sum.checked_add(config.total_area()?)
                .ok_or_else(|| CoreError::overflow("pool area"))
        })?;
        Ok(RequiredExpensePool {
            total_value,
            total_area,
        })
    }
}

// =============================================================================
// Recommendation Tier
// =============================================================================

/// Margin-based label guiding pricing decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    NotRecommended,
    Moderate,
    Recommended,
    HighlyRecommended,
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationTier::HighlyRecommended => write!(f, "highly_recommended"),
            RecommendationTier::Recommended => write!(f, "recommended"),
            RecommendationTier::Moderate => write!(f, "moderate"),
            RecommendationTier::NotRecommended => write!(f, "not_recommended"),
        }
    }
}

// =============================================================================
// Profitability
// =============================================================================

/// Soft findings that do not block a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfitabilityWarning {
    /// Selling per m² for no more than it costs to set up per m².
    PriceNotAboveSetupCost {
        price_per_area: Money,
        setup_cost_per_area: Money,
    },
}

/// Profitability of one stand configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityResult {
    /// Area of one stand (m²).
    #[ts(type = "string")]
    pub stand_area: Decimal,

    pub quantity: i64,

    /// Area of the whole configuration (stand area × quantity).
    #[ts(type = "string")]
    pub area: Decimal,

    pub total_price: Money,
    pub setup_cost: Money,

    /// Share of the required-expense pool.
    pub allocated_expense: Money,

    /// Setup cost plus allocated expense.
    pub total_cost: Money,

    pub profit: Money,

    /// Profit over price, in percent, 2 decimal places.
    #[ts(type = "string")]
    pub margin_percent: Decimal,

    /// Profit per m².
    pub efficiency: Money,

    pub recommendation_tier: RecommendationTier,

    pub warnings: Vec<ProfitabilityWarning>,
}

/// Profitability of every configuration of a fair, plus the totals.
///
/// The overall margin is recomputed from the summed price and profit, never
/// averaged from per-configuration margins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FairAnalysis {
    pub configurations: Vec<ProfitabilityResult>,

    #[ts(type = "string")]
    pub total_area: Decimal,

    pub total_price: Money,
    pub total_cost: Money,
    pub profit: Money,

    #[ts(type = "string")]
    pub margin_percent: Decimal,

    pub recommendation_tier: RecommendationTier,

    /// Index of the configuration with the highest efficiency.
    pub best_configuration: Option<usize>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stand(width: Decimal, height: Decimal, quantity: i64) -> StandConfiguration {
        StandConfiguration {
            width,
            height,
            quantity,
            price_per_area: Money::from_cents(1_000),
            setup_cost_per_area: Money::from_cents(200),
        }
    }

    #[test]
    fn test_stand_area() {
        let config = stand(dec!(2.5), dec!(4), 3);
        assert_eq!(config.area().unwrap(), dec!(10));
        assert_eq!(config.total_area().unwrap(), dec!(30));
    }

    #[test]
    fn test_stand_area_overflow() {
        let huge = Decimal::from(100_000_000_000_000i64);
        // 1e28 m² still fits, a thousand of them does not
        let config = stand(huge, huge, 1_000);
        assert_eq!(config.area().unwrap(), huge * huge);
        assert_eq!(
            config.total_area(),
            Err(CoreError::AmountOverflow {
                field: "area".to_string()
            })
        );

        let wider = stand(Decimal::MAX, dec!(2), 1);
        assert_eq!(
            wider.area(),
            Err(CoreError::AmountOverflow {
                field: "stand area".to_string()
            })
        );
    }

    #[test]
    fn test_pool_for_configurations() {
        let configs = [stand(dec!(3), dec!(3), 2), stand(dec!(2), dec!(2), 1)];
        let pool =
            RequiredExpensePool::for_configurations(Money::from_cents(5_000), &configs).unwrap();
        assert_eq!(pool.total_area, dec!(22));
        assert_eq!(pool.total_value.cents(), 5_000);

        let empty = RequiredExpensePool::for_configurations(Money::from_cents(5_000), &[]).unwrap();
        assert_eq!(empty.total_area, Decimal::ZERO);
    }

    #[test]
    fn test_pool_area_sum_overflow() {
        // Each layout fits on its own, their sum does not
        let big = Decimal::from(50_000_000_000_000i64);
        let configs = [stand(big, big, 20), stand(big, big, 20)];
        let err = RequiredExpensePool::for_configurations(Money::zero(), &configs).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { field } if field == "pool area"));
    }

    #[test]
    fn test_discount_percent() {
        let contract = Contract {
            base_value: Money::from_cents(300_000),
            discount: Money::from_cents(100_000),
            contract_value: Money::from_cents(200_000),
            installment_count: 1,
        };
        assert_eq!(contract.discount_percent(), dec!(33.33));

        let free = Contract {
            base_value: Money::zero(),
            discount: Money::zero(),
            contract_value: Money::zero(),
            installment_count: 1,
        };
        assert_eq!(free.discount_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_tier_ordering_and_labels() {
        assert!(RecommendationTier::HighlyRecommended > RecommendationTier::Recommended);
        assert!(RecommendationTier::Moderate > RecommendationTier::NotRecommended);
        assert_eq!(
            RecommendationTier::HighlyRecommended.to_string(),
            "highly_recommended"
        );
    }

    #[test]
    fn test_wire_format() {
        let installment = Installment {
            sequence_number: 1,
            amount: Money::from_cents(34),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
        };
        let json = serde_json::to_value(installment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "sequenceNumber": 1, "amount": 34, "dueDate": "2025-02-28" })
        );

        let tier = serde_json::to_value(RecommendationTier::NotRecommended).unwrap();
        assert_eq!(tier, serde_json::json!("not_recommended"));
    }

    #[test]
    fn test_stand_configuration_accepts_numeric_dimensions() {
        let config: StandConfiguration = serde_json::from_value(serde_json::json!({
            "width": 3,
            "height": "2.5",
            "quantity": 4,
            "pricePerArea": 100000,
            "setupCostPerArea": 20000
        }))
        .unwrap();
        assert_eq!(config.area().unwrap(), dec!(7.5));
    }
}
