//! # Calculator Commands
//!
//! Every command the dashboard can send to the calculator.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (request envelope, dispatch)
//! ├── money.rs         ◄─── parse_money, format_money
//! ├── contract.rs      ◄─── compute_discount, build_installments
//! └── profitability.rs ◄─── stand_metrics, analyze_fair
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  {                                                                      │
//! │    "command": "compute_discount",     ◄── selects the handler           │
//! │    "baseValue": "R$ 5.000,00",        ◄── display text...               │
//! │    "contractValue": 450000            ◄── ...or integer cents           │
//! │  }                                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::ComputeDiscount(DiscountRequest)                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  contract::compute_discount(&state, request)                            │
//! │    -> Result<DiscountResponse, ApiError>                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  { "discount": 50000, "discountPercent": "10", ... }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod contract;
pub mod money;
pub mod profitability;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use feira_core::{CoreResult, Money, MoneyCodec};

use crate::error::ApiError;
use crate::state::CalcState;

use contract::{DiscountRequest, InstallmentsRequest};
use money::{FormatMoneyRequest, ParseMoneyRequest};
use profitability::{AnalyzeFairRequest, StandMetricsRequest};

// =============================================================================
// Request Envelope
// =============================================================================

/// One calculator request, tagged by `"command"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    ParseMoney(ParseMoneyRequest),
    FormatMoney(FormatMoneyRequest),
    ComputeDiscount(DiscountRequest),
    BuildInstallments(InstallmentsRequest),
    StandMetrics(StandMetricsRequest),
    AnalyzeFair(AnalyzeFairRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ParseMoney(_) => "parse_money",
            Command::FormatMoney(_) => "format_money",
            Command::ComputeDiscount(_) => "compute_discount",
            Command::BuildInstallments(_) => "build_installments",
            Command::StandMetrics(_) => "stand_metrics",
            Command::AnalyzeFair(_) => "analyze_fair",
        }
    }
}

/// A money field as the dashboard sends it.
///
/// The JSON type states the unit: a number is already cents, a string is
/// display text for the codec. There is no guessing by magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoneyInput {
    Cents(i64),
    Text(String),
}

impl MoneyInput {
    pub fn resolve(&self, codec: &MoneyCodec) -> CoreResult<Money> {
        match self {
            MoneyInput::Cents(cents) => Ok(Money::from_cents(*cents)),
            MoneyInput::Text(text) => codec.parse(text),
        }
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Decodes a JSON request and runs it.
pub fn handle_request(state: &CalcState, request: &str) -> Result<Value, ApiError> {
    let command: Command = serde_json::from_str(request)?;
    dispatch(state, command)
}

/// Runs a decoded command and serializes its response.
pub fn dispatch(state: &CalcState, command: Command) -> Result<Value, ApiError> {
    debug!(command = command.name(), "Dispatching command");

    match command {
        Command::ParseMoney(req) => to_value(money::parse_money(state, req)?),
        Command::FormatMoney(req) => to_value(money::format_money(state, req)),
        Command::ComputeDiscount(req) => to_value(contract::compute_discount(state, req)?),
        Command::BuildInstallments(req) => to_value(contract::build_installments(state, req)?),
        Command::StandMetrics(req) => to_value(profitability::stand_metrics(state, req)?),
        Command::AnalyzeFair(req) => to_value(profitability::analyze_fair(state, req)?),
    }
}

fn to_value<T: Serialize>(response: T) -> Result<Value, ApiError> {
    serde_json::to_value(response)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
}
