//! # Validation Module
//!
//! Input validation for the calculation core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard form                                               │
//! │  ├── Masked currency inputs, required fields                           │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: feira-calc command                                           │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── MoneyCodec::parse for display strings                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Hard rules: reject (ValidationError)                              │
//! │  └── Soft rules: warn (ProfitabilityWarning, see profitability)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{RequiredExpensePool, StandConfiguration};
use crate::MAX_STAND_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stand dimension (width or height) in metres.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_dimension(field: &str, metres: Decimal) -> ValidationResult<()> {
    if metres <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates how many stands a configuration offers.
///
/// ## Rules
/// - At least 1
/// - At most MAX_STAND_QUANTITY (1000)
pub fn validate_stand_quantity(qty: i64) -> ValidationResult<()> {
    if !(1..=MAX_STAND_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_STAND_QUANTITY,
        });
    }
    Ok(())
}

/// Validates that an amount is not negative. Zero is allowed.
///
/// ## Example
/// ```rust
/// use feira_core::money::Money;
/// use feira_core::validation::validate_amount;
///
/// assert!(validate_amount("price", Money::from_cents(1099)).is_ok());
/// assert!(validate_amount("price", Money::zero()).is_ok());
/// assert!(validate_amount("price", Money::from_cents(-100)).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every hard rule of a stand configuration.
///
/// `price_per_area > setup_cost_per_area` is NOT checked here; it is a soft
/// rule reported as a warning on the result.
pub fn validate_stand_configuration(config: &StandConfiguration) -> ValidationResult<()> {
    validate_dimension("width", config.width)?;
    validate_dimension("height", config.height)?;
    validate_stand_quantity(config.quantity)?;
    validate_amount("price per area", config.price_per_area)?;
    validate_amount("setup cost per area", config.setup_cost_per_area)?;
    Ok(())
}

/// Validates a required-expense pool snapshot.
///
/// ## Rules
/// - Total value not negative
/// - Total area not negative (zero is the "nothing to spread over" case)
pub fn validate_pool(pool: &RequiredExpensePool) -> ValidationResult<()> {
    validate_amount("required expenses", pool.total_value)?;

    if pool.total_area < Decimal::ZERO {
        return Err(ValidationError::MustBeNonNegative {
            field: "required expense area".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config() -> StandConfiguration {
        StandConfiguration {
            width: dec!(3),
            height: dec!(2.5),
            quantity: 4,
            price_per_area: Money::from_cents(100_000),
            setup_cost_per_area: Money::from_cents(20_000),
        }
    }

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("width", dec!(0.5)).is_ok());
        assert!(validate_dimension("width", Decimal::ZERO).is_err());
        assert!(validate_dimension("width", dec!(-1)).is_err());
    }

    #[test]
    fn test_validate_stand_quantity() {
        assert!(validate_stand_quantity(1).is_ok());
        assert!(validate_stand_quantity(MAX_STAND_QUANTITY).is_ok());

        assert!(validate_stand_quantity(0).is_err());
        assert!(validate_stand_quantity(-3).is_err());
        assert!(validate_stand_quantity(MAX_STAND_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_stand_configuration() {
        assert!(validate_stand_configuration(&config()).is_ok());

        let mut bad = config();
        bad.height = Decimal::ZERO;
        assert_eq!(
            validate_stand_configuration(&bad),
            Err(ValidationError::MustBePositive {
                field: "height".to_string()
            })
        );

        let mut bad = config();
        bad.setup_cost_per_area = Money::from_cents(-1);
        assert!(validate_stand_configuration(&bad).is_err());
    }

    #[test]
    fn test_price_below_setup_is_not_a_hard_error() {
        let mut cheap = config();
        cheap.price_per_area = Money::from_cents(10_000);
        assert!(validate_stand_configuration(&cheap).is_ok());
    }

    #[test]
    fn test_validate_pool() {
        assert!(validate_pool(&RequiredExpensePool::default()).is_ok());
        assert!(validate_pool(&RequiredExpensePool::new(Money::from_cents(-1), dec!(10))).is_err());
        assert!(validate_pool(&RequiredExpensePool::new(Money::from_cents(1), dec!(-10))).is_err());
    }
}
