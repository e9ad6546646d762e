//! # Contract Commands
//!
//! Discounts and installment schedules for the revenue form.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Revenue form                                                           │
//! │                                                                         │
//! │  Catalog price   [ R$ 5.000,00 ]                                        │
//! │  Contract price  [ R$ 4.500,00 ]  ──► compute_discount                  │
//! │                                       discount R$ 500,00 (10%)          │
//! │  Installments    [ 3 ]                                                  │
//! │  First payment   [ 2025-01-31 ]   ──► build_installments                │
//! │                                       1  R$ 1.500,00  2025-02-28        │
//! │                                       2  R$ 1.500,00  2025-03-31        │
//! │                                       3  R$ 1.500,00  2025-04-30        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use feira_core::{Contract, Installment};

use super::MoneyInput;
use crate::error::ApiError;
use crate::state::CalcState;

// =============================================================================
// compute_discount
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRequest {
    pub base_value: MoneyInput,

    /// Negotiated price. Exactly one of this and `discount_bps` is given.
    #[serde(default)]
    pub contract_value: Option<MoneyInput>,

    /// Discount rate in basis points (1000 = 10%).
    #[serde(default)]
    pub discount_bps: Option<u32>,

    /// Defaults to a single payment.
    #[serde(default)]
    pub installment_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    #[serde(flatten)]
    pub contract: Contract,

    pub discount_percent: Decimal,
    pub formatted_discount: String,
}

/// Derives the discount implied by a negotiated contract value, or the
/// contract value implied by a discount rate.
pub fn compute_discount(
    state: &CalcState,
    req: DiscountRequest,
) -> Result<DiscountResponse, ApiError> {
    let base = req.base_value.resolve(&state.codec)?;
    let installment_count = req.installment_count.unwrap_or(1);

    let contract = match (&req.contract_value, req.discount_bps) {
        (Some(contract_value), None) => {
            let contract_value = contract_value.resolve(&state.codec)?;
            debug!(
                base = base.cents(),
                contract_value = contract_value.cents(),
                "compute_discount command"
            );
            state
                .calculator
                .build_contract(base, contract_value, installment_count)?
        }
        (None, Some(discount_bps)) => {
            debug!(base = base.cents(), discount_bps, "compute_discount command");
            state
                .calculator
                .contract_from_discount_rate(base, discount_bps, installment_count)?
        }
        _ => {
            return Err(ApiError::invalid_request(
                "exactly one of contractValue or discountBps is required",
            ));
        }
    };

    Ok(DiscountResponse {
        discount_percent: contract.discount_percent(),
        formatted_discount: state.codec.format(contract.discount),
        contract,
    })
}

// =============================================================================
// build_installments
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentsRequest {
    pub contract_value: MoneyInput,
    pub installment_count: i64,
    pub anchor_date: NaiveDate,

    /// When present, the contract is validated against it and returned.
    #[serde(default)]
    pub base_value: Option<MoneyInput>,
}

/// One schedule row with its display amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentLine {
    #[serde(flatten)]
    pub installment: Installment,

    pub formatted_amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,

    pub installments: Vec<InstallmentLine>,
}

/// Splits a contract value into monthly installments.
pub fn build_installments(
    state: &CalcState,
    req: InstallmentsRequest,
) -> Result<InstallmentsResponse, ApiError> {
    let contract_value = req.contract_value.resolve(&state.codec)?;
    debug!(
        contract_value = contract_value.cents(),
        count = req.installment_count,
        anchor = %req.anchor_date,
        "build_installments command"
    );

    let (contract, installments) = match &req.base_value {
        Some(base) => {
            let base = base.resolve(&state.codec)?;
            let plan = state.calculator.plan(
                base,
                contract_value,
                req.installment_count,
                req.anchor_date,
            )?;
            (Some(plan.contract), plan.installments)
        }
        None => (
            None,
            state
                .calculator
                .build_installments(contract_value, req.installment_count, req.anchor_date)?,
        ),
    };

    let installments = installments
        .into_iter()
        .map(|installment| InstallmentLine {
            formatted_amount: state.codec.format(installment.amount),
            installment,
        })
        .collect();

    Ok(InstallmentsResponse {
        contract,
        installments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::handle_request;
    use crate::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_compute_discount_mixed_inputs() {
        let response = handle_request(
            &CalcState::default(),
            r#"{
                "command": "compute_discount",
                "baseValue": "R$ 5.000,00",
                "contractValue": 450000
            }"#,
        )
        .unwrap();

        assert_eq!(response["discount"], json!(50000));
        assert_eq!(response["contractValue"], json!(450000));
        assert_eq!(response["installmentCount"], json!(1));
        assert_eq!(response["formattedDiscount"], json!("R$ 500,00"));

        let percent: Decimal = response["discountPercent"].as_str().unwrap().parse().unwrap();
        assert_eq!(percent, Decimal::TEN);
    }

    #[test]
    fn test_compute_discount_from_rate() {
        let response = handle_request(
            &CalcState::default(),
            r#"{
                "command": "compute_discount",
                "baseValue": "R$ 5.000,00",
                "discountBps": 1250,
                "installmentCount": 3
            }"#,
        )
        .unwrap();

        assert_eq!(response["contractValue"], json!(437500));
        assert_eq!(response["discount"], json!(62500));
        assert_eq!(response["installmentCount"], json!(3));
        assert_eq!(response["formattedDiscount"], json!("R$ 625,00"));

        let percent: Decimal = response["discountPercent"].as_str().unwrap().parse().unwrap();
        assert_eq!(percent, Decimal::new(125, 1));
    }

    #[test]
    fn test_compute_discount_needs_exactly_one_target() {
        let state = CalcState::default();

        let both = handle_request(
            &state,
            r#"{
                "command": "compute_discount",
                "baseValue": 500000,
                "contractValue": 450000,
                "discountBps": 1000
            }"#,
        )
        .unwrap_err();
        assert_eq!(both.code, ErrorCode::InvalidRequest);

        let neither = handle_request(
            &state,
            r#"{"command": "compute_discount", "baseValue": 500000}"#,
        )
        .unwrap_err();
        assert_eq!(neither.code, ErrorCode::InvalidRequest);
    }

    #[test]
    fn test_compute_discount_rate_above_full() {
        let err = handle_request(
            &CalcState::default(),
            r#"{"command": "compute_discount", "baseValue": 500000, "discountBps": 10001}"#,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_compute_discount_rejects_markup() {
        let err = handle_request(
            &CalcState::default(),
            r#"{"command": "compute_discount", "baseValue": 500000, "contractValue": 550000}"#,
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidContractValue);
        assert_eq!(
            err.message,
            "Contract value R$ 5.500,00 exceeds base value R$ 5.000,00"
        );
    }

    #[test]
    fn test_build_installments_month_end() {
        let response = handle_request(
            &CalcState::default(),
            r#"{
                "command": "build_installments",
                "contractValue": 100,
                "installmentCount": 3,
                "anchorDate": "2025-01-31"
            }"#,
        )
        .unwrap();

        assert_eq!(
            response,
            json!({
                "installments": [
                    {
                        "sequenceNumber": 1, "amount": 34,
                        "dueDate": "2025-02-28", "formattedAmount": "R$ 0,34"
                    },
                    {
                        "sequenceNumber": 2, "amount": 33,
                        "dueDate": "2025-03-31", "formattedAmount": "R$ 0,33"
                    },
                    {
                        "sequenceNumber": 3, "amount": 33,
                        "dueDate": "2025-04-30", "formattedAmount": "R$ 0,33"
                    }
                ]
            })
        );
    }

    #[test]
    fn test_build_installments_with_base_returns_contract() {
        let response = build_installments(
            &CalcState::default(),
            InstallmentsRequest {
                contract_value: MoneyInput::Text("R$ 4.500,00".to_string()),
                installment_count: 3,
                anchor_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
                base_value: Some(MoneyInput::Cents(500_000)),
            },
        )
        .unwrap();

        let contract = response.contract.unwrap();
        assert_eq!(contract.discount.cents(), 50_000);
        assert_eq!(response.installments.len(), 3);
        assert_eq!(response.installments[0].formatted_amount, "R$ 1.500,00");
    }

    #[test]
    fn test_build_installments_zero_count() {
        let err = handle_request(
            &CalcState::default(),
            r#"{
                "command": "build_installments",
                "contractValue": 100,
                "installmentCount": 0,
                "anchorDate": "2025-01-31"
            }"#,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInstallmentCount);
    }
}
