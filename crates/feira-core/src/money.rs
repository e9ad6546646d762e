//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE CENTS/REAIS CONFUSION                                              │
//! │                                                                         │
//! │  A form field holds "R$ 1.234,56", an API record holds 123456,          │
//! │  an analytics widget holds 1234.56. Guessing which one you have         │
//! │  ("divide by 100 if it looks too large") corrupts records.              │
//! │                                                                         │
//! │  OUR SOLUTION: one type, one unit                                       │
//! │    Money is ALWAYS an integer count of centavos.                        │
//! │    Text only enters through MoneyCodec::parse.                          │
//! │    Decimals (areas, rates) are multiplied in, then rounded back.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use feira_core::money::Money;
//!
//! let stand = Money::from_cents(150_000); // R$ 1.500,00
//! let total = stand + Money::from_cents(500);
//! assert_eq!(total.cents(), 150_500);
//! assert_eq!(total.to_string(), "R$ 1.505,00");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::codec::MoneyCodec;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest unit of the real).
///
/// ## Design Decisions
/// - **i64 (signed)**: Profit can be negative; discounts are stored apart
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No `From<f64>`**: there is no way to build Money from a float
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::money::Money;
    ///
    /// let price = Money::from_cents(123_456); // R$ 1.234,56
    /// assert_eq!(price.cents(), 123_456);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition. `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked subtraction. `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000` rounds the discount
    /// half up, then the discount is subtracted.
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::money::Money;
    ///
    /// let catalog = Money::from_cents(500_000); // R$ 5.000,00
    /// let contract = catalog.apply_percentage_discount(1000); // 10% off
    /// assert_eq!(contract.cents(), 450_000);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }

    /// Returns the amount as a `Decimal` number of centavos.
    #[inline]
    pub fn to_decimal_cents(&self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Rounds a decimal centavo amount to whole centavos (half away from zero).
    ///
    /// Returns `None` if the rounded value does not fit in an `i64`.
    pub fn from_decimal_cents(cents: Decimal) -> Option<Money> {
        cents
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Money)
    }

    /// Multiplies a per-unit amount by a decimal quantity (e.g. m²).
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let per_m2 = Money::from_cents(1_000);
    /// let area = Decimal::new(75, 1); // 7.5 m²
    /// assert_eq!(per_m2.times_decimal(area), Some(Money::from_cents(7_500)));
    /// ```
    pub fn times_decimal(&self, factor: Decimal) -> Option<Money> {
        self.to_decimal_cents()
            .checked_mul(factor)
            .and_then(Money::from_decimal_cents)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the default (pt-BR) codec: `R$ 1.234,56`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&MoneyCodec::default().format(*self))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
