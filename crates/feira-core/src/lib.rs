//! # feira-core: Monetary Calculation Core for the Feira Dashboard
//!
//! This crate holds every money calculation the trade-fair dashboard
//! performs, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Feira Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard (web UI)                           │   │
//! │  │   Revenue form ──► Stand config ──► Fair analytics             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    feira-calc (adapter)                         │   │
//! │  │   config, logging, request/response DTOs                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ feira-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐  │   │
//! │  │   │   codec   │  │ contract  │  │profitability│  │validation│  │   │
//! │  │   │MoneyCodec │─►│Calculator │  │  Analyzer   │  │  rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`codec`] - Locale text ⇄ Money
//! - [`contract`] - Discounts and installment schedules
//! - [`profitability`] - Stand margin, efficiency, recommendation tier
//! - [`types`] - Domain types (Contract, Installment, StandConfiguration, ...)
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no clock reads
//! 2. **No I/O**: persistence belongs to the dashboard's API
//! 3. **Integer Money**: all monetary values are centavos (i64)
//! 4. **Explicit Errors**: rejected inputs are typed errors, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use feira_core::{ContractCalculator, MoneyCodec};
//!
//! let codec = MoneyCodec::default();
//! let catalog = codec.parse("R$ 5.000,00").unwrap();
//! let agreed = codec.parse("R$ 4.500,00").unwrap();
//!
//! let anchor = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let plan = ContractCalculator::default().plan(catalog, agreed, 3, anchor).unwrap();
//!
//! assert_eq!(codec.format(plan.contract.discount), "R$ 500,00");
//! assert_eq!(codec.format(plan.installments[0].amount), "R$ 1.500,00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod contract;
pub mod error;
pub mod money;
pub mod profitability;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use codec::{LenientParse, MoneyCodec};
pub use contract::ContractCalculator;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use profitability::{ProfitabilityAnalyzer, TierThresholds};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default maximum number of installments for one contract.
///
/// ## Business Reason
/// Ten years of monthly payments. Longer plans are typos, not deals.
/// Configurable through `ContractCalculator::new`.
pub const MAX_INSTALLMENT_COUNT: i64 = 120;

/// Maximum stands of one layout in a configuration.
pub const MAX_STAND_QUANTITY: i64 = 1000;
