//! # Error Types
//!
//! Domain-specific error types for feira-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  feira-core errors (this file)                                         │
//! │  ├── CoreError        - Rejected monetary inputs                       │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  feira-calc errors (app crate)                                         │
//! │  ├── ConfigError      - Bad configuration file / env                   │
//! │  └── ApiError         - What the dashboard sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Dashboard              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degenerate Cases Are Not Errors
//! A zero-area stand or an empty required-expense pool is a valid real-world
//! state. Those divisions resolve to zero (see `profitability`) and never
//! show up here.

use chrono::NaiveDate;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Monetary calculation errors.
///
/// Every variant carries the field and the limit that was violated so the
/// dashboard can render a message without re-deriving the context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Money text could not be parsed.
    ///
    /// ## When This Occurs
    /// - Letters or other stray characters in a currency field
    /// - More than one decimal comma
    /// - More than two fractional digits ("1,234")
    /// - A magnitude that does not fit in cents
    #[error("Invalid money format in {input:?}: {reason}")]
    InvalidMoneyFormat { input: String, reason: String },

    /// Contract price exceeds the catalog price.
    ///
    /// ## User Workflow
    /// ```text
    /// Catalog price: R$ 5.000,00
    /// Contract price typed: R$ 5.500,00
    ///      │
    ///      ▼
    /// InvalidContractValue { contract_value: 550000, base_value: 500000 }
    ///      │
    ///      ▼
    /// UI shows: "Contract value R$ 5.500,00 exceeds base value R$ 5.000,00"
    /// ```
    #[error("Contract value {contract_value} exceeds base value {base_value}")]
    InvalidContractValue {
        contract_value: Money,
        base_value: Money,
    },

    /// Installment count outside the allowed range.
    #[error("Installment count {count} must be between {min} and {max}")]
    InvalidInstallmentCount { count: i64, min: i64, max: i64 },

    /// A due date falls outside the representable calendar.
    #[error("Due date {months} months after {anchor} is out of range")]
    DateOutOfRange { anchor: NaiveDate, months: u32 },

    /// A derived amount does not fit in cents.
    #[error("Amount overflow while computing {field}")]
    AmountOverflow { field: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Thresholds or separators that contradict each other.
    #[error("{field} is inconsistent: {reason}")]
    Inconsistent { field: String, reason: String },
}

impl CoreError {
    pub(crate) fn overflow(field: &str) -> Self {
        CoreError::AmountOverflow {
            field: field.to_string(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
