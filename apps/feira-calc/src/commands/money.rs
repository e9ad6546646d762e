//! # Money Commands
//!
//! Text ⇄ cents conversion for currency form fields.

use serde::{Deserialize, Serialize};
use tracing::debug;

use feira_core::Money;

use crate::error::ApiError;
use crate::state::CalcState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseMoneyRequest {
    pub text: String,

    /// Fall back to reading every digit as cents instead of failing.
    #[serde(default)]
    pub lenient: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseMoneyResponse {
    pub cents: Money,

    /// Canonical rendering of `cents`.
    pub formatted: String,

    /// Why the strict parse failed, when a lenient parse fell back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatMoneyRequest {
    pub cents: Money,

    /// Omit the currency symbol (for prefilling inputs).
    #[serde(default)]
    pub plain: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatMoneyResponse {
    pub formatted: String,
}

/// Parses display text into cents.
pub fn parse_money(
    state: &CalcState,
    req: ParseMoneyRequest,
) -> Result<ParseMoneyResponse, ApiError> {
    debug!(text = %req.text, lenient = req.lenient, "parse_money command");

    let (cents, issue) = if req.lenient {
        let parsed = state.codec.parse_lenient(&req.text);
        (parsed.amount, parsed.issue.map(|e| e.to_string()))
    } else {
        (state.codec.parse(&req.text)?, None)
    };

    Ok(ParseMoneyResponse {
        cents,
        formatted: state.codec.format(cents),
        issue,
    })
}

/// Formats cents for display.
pub fn format_money(state: &CalcState, req: FormatMoneyRequest) -> FormatMoneyResponse {
    let formatted = if req.plain {
        state.codec.format_plain(req.cents)
    } else {
        state.codec.format(req.cents)
    };
    FormatMoneyResponse { formatted }
}
