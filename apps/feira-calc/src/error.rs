//! # API Error Type
//!
//! Unified error type for calculator commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in feira-calc                             │
//! │                                                                         │
//! │  { "command": "build_installments", ... }                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON? ───── serde_json::Error ─────────────┐               │  │
//! │  │         │                                       │               │  │
//! │  │         ▼                                       ▼               │  │
//! │  │  Core rejects? ── CoreError::InvalidContractValue ── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stdout: { "code": "INVALID_CONTRACT_VALUE",                            │
//! │            "message": "Contract value R$ 5.500,00 exceeds ..." }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use feira_core::CoreError;
use serde::Serialize;

/// API error returned from calculator commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_MONEY_FORMAT",
///   "message": "Invalid money format in \"12abc\": unexpected character 'a'"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// switch (e.code) {
///   case 'INVALID_MONEY_FORMAT':
///     highlightField(e.message);
///     break;
///   case 'INVALID_CONTRACT_VALUE':
///     showNotification('Contract value cannot exceed the catalog price');
///     break;
///   default:
///     showError('An error occurred');
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request could not be decoded
    InvalidRequest,

    /// Input validation failed
    ValidationError,

    /// Money text the codec rejected
    InvalidMoneyFormat,

    /// Contract value above the base value
    InvalidContractValue,

    /// Installment count outside the allowed range
    InvalidInstallmentCount,

    /// Result does not fit the supported range
    OutOfRange,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidMoneyFormat { .. } => ErrorCode::InvalidMoneyFormat,
            CoreError::InvalidContractValue { .. } => ErrorCode::InvalidContractValue,
            CoreError::InvalidInstallmentCount { .. } => ErrorCode::InvalidInstallmentCount,
            CoreError::DateOutOfRange { .. } | CoreError::AmountOverflow { .. } => {
                ErrorCode::OutOfRange
            }
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid_request(format!("Malformed request: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use feira_core::{Money, ValidationError};
    use serde_json::json;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::InvalidContractValue {
            contract_value: Money::from_cents(550_000),
            base_value: Money::from_cents(500_000),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidContractValue);
        assert!(err.message.contains("R$ 5.500,00"));

        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "width".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serialization() {
        let err = ApiError::new(ErrorCode::InvalidInstallmentCount, "nope");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "code": "INVALID_INSTALLMENT_COUNT", "message": "nope" })
        );
    }
}
