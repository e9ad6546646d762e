//! # Contract Calculator
//!
//! Discounts, contract validation and installment schedules.
//!
//! ## Revenue Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog price (cents) ──┐                                              │
//! │                          ├──► compute_discount ──► Contract             │
//! │  Contract price (cents) ─┘                              │               │
//! │                                                         ▼               │
//! │  Installment count ─────────────────────────► build_installments        │
//! │  Anchor date ───────────────────────────────►        │                  │
//! │                                                      ▼                  │
//! │                          [ {1, 34, 2025-02-28}, {2, 33, 2025-03-31}, …] │
//! │                                                                         │
//! │  sum(amount) == contract_value, always.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Odd Centavo
//! R$ 1,00 over 3 installments is 33 + 33 + 33 = 99: one centavo short.
//! The remainder goes to the EARLIEST installments, one centavo each, so the
//! schedule is exact and reproducible: 34 + 33 + 33.

use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Contract, Installment, InstallmentPlan};
use crate::MAX_INSTALLMENT_COUNT;

/// Smallest valid installment count.
pub const MIN_INSTALLMENT_COUNT: i64 = 1;

/// Highest ceiling a calculator can be configured with (100 years).
pub const MAX_INSTALLMENT_CEILING: i64 = 1_200;

/// Derives discounts and schedules for stand contracts.
///
/// Holds only its limits; every method is a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractCalculator {
    max_installments: i64,
}

impl Default for ContractCalculator {
    fn default() -> Self {
        ContractCalculator {
            max_installments: MAX_INSTALLMENT_COUNT,
        }
    }
}

impl ContractCalculator {
    /// Creates a calculator with a custom installment ceiling.
    pub fn new(max_installments: i64) -> CoreResult<Self> {
        if !(MIN_INSTALLMENT_COUNT..=MAX_INSTALLMENT_CEILING).contains(&max_installments) {
            return Err(ValidationError::OutOfRange {
                field: "max installments".to_string(),
                min: MIN_INSTALLMENT_COUNT,
                max: MAX_INSTALLMENT_CEILING,
            }
            .into());
        }

        Ok(ContractCalculator { max_installments })
    }

    /// Discount implied by a negotiated contract value.
    ///
    /// ## Rules
    /// - `contract_value > base` is `InvalidContractValue`
    /// - Negative amounts are rejected
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::contract::ContractCalculator;
    /// use feira_core::money::Money;
    ///
    /// let calc = ContractCalculator::default();
    /// let discount = calc
    ///     .compute_discount(Money::from_cents(500_000), Money::from_cents(450_000))
    ///     .unwrap();
    /// assert_eq!(discount.cents(), 50_000);
    /// ```
    pub fn compute_discount(&self, base: Money, contract_value: Money) -> CoreResult<Money> {
        require_non_negative(base, "base value")?;
        require_non_negative(contract_value, "contract value")?;

        if contract_value > base {
            return Err(CoreError::InvalidContractValue {
                contract_value,
                base_value: base,
            });
        }

        Ok(base - contract_value)
    }

    /// Validates a negotiated price and derives the full contract.
    pub fn build_contract(
        &self,
        base: Money,
        contract_value: Money,
        installment_count: i64,
    ) -> CoreResult<Contract> {
        self.validate_installment_count(installment_count)?;
        let discount = self.compute_discount(base, contract_value)?;

        Ok(Contract {
            base_value: base,
            discount,
            contract_value,
            installment_count,
        })
    }

    /// Builds a contract from a percentage discount in basis points.
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::contract::ContractCalculator;
    /// use feira_core::money::Money;
    ///
    /// let calc = ContractCalculator::default();
    /// let contract = calc
    ///     .contract_from_discount_rate(Money::from_cents(500_000), 1000, 1)
    ///     .unwrap();
    /// assert_eq!(contract.contract_value.cents(), 450_000);
    /// assert_eq!(contract.discount.cents(), 50_000);
    /// ```
    pub fn contract_from_discount_rate(
        &self,
        base: Money,
        discount_bps: u32,
        installment_count: i64,
    ) -> CoreResult<Contract> {
        if discount_bps > 10_000 {
            return Err(ValidationError::OutOfRange {
                field: "discount rate".to_string(),
                min: 0,
                max: 10_000,
            }
            .into());
        }

        let contract_value = base.apply_percentage_discount(discount_bps);
        self.build_contract(base, contract_value, installment_count)
    }

    /// Splits a contract value into monthly installments.
    ///
    /// ## Rules
    /// - `count < 1` (or above the ceiling) is `InvalidInstallmentCount`
    /// - `count == 1`: one installment with the full value
    /// - otherwise the first `value % count` installments get one extra centavo
    /// - installment `k` is due `anchor + k months`, clamped to month end
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use feira_core::contract::ContractCalculator;
    /// use feira_core::money::Money;
    ///
    /// let calc = ContractCalculator::default();
    /// let anchor = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    /// let schedule = calc.build_installments(Money::from_cents(100), 3, anchor).unwrap();
    ///
    /// let amounts: Vec<i64> = schedule.iter().map(|i| i.amount.cents()).collect();
    /// assert_eq!(amounts, vec![34, 33, 33]);
    /// assert_eq!(schedule[0].due_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    /// ```
    pub fn build_installments(
        &self,
        contract_value: Money,
        count: i64,
        anchor: NaiveDate,
    ) -> CoreResult<Vec<Installment>> {
        self.validate_installment_count(count)?;
        require_non_negative(contract_value, "contract value")?;

        let total = contract_value.cents();
        let base_amount = total / count;
        let remainder = total - base_amount * count;

        debug!(
            contract_cents = total,
            count,
            base_amount,
            remainder,
            "Building installment schedule"
        );

        (1..=count)
            .map(|k| -> CoreResult<Installment> {
                let amount = if k <= remainder {
                    base_amount + 1
                } else {
                    base_amount
                };

                // count <= max_installments <= MAX_INSTALLMENT_CEILING
                let sequence_number = k as u32;
                Ok(Installment {
                    sequence_number,
                    amount: Money::from_cents(amount),
                    due_date: due_date(anchor, sequence_number)?,
                })
            })
            .collect()
    }

    /// Validates the contract and builds its schedule in one step.
    pub fn plan(
        &self,
        base: Money,
        contract_value: Money,
        installment_count: i64,
        anchor: NaiveDate,
    ) -> CoreResult<InstallmentPlan> {
        let contract = self.build_contract(base, contract_value, installment_count)?;
        let installments =
            self.build_installments(contract.contract_value, installment_count, anchor)?;

        Ok(InstallmentPlan {
            contract,
            installments,
        })
    }

    fn validate_installment_count(&self, count: i64) -> CoreResult<()> {
        if count < MIN_INSTALLMENT_COUNT || count > self.max_installments {
            return Err(CoreError::InvalidInstallmentCount {
                count,
                min: MIN_INSTALLMENT_COUNT,
                max: self.max_installments,
            });
        }
        Ok(())
    }
}

/// `anchor + months`, clamping the day to the target month's last day.
fn due_date(anchor: NaiveDate, months: u32) -> CoreResult<NaiveDate> {
    anchor
        .checked_add_months(Months::new(months))
        .ok_or(CoreError::DateOutOfRange { anchor, months })
}

fn require_non_negative(amount: Money, field: &str) -> CoreResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        }
        .into());
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
