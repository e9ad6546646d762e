//! # Money Codec
//!
//! The only sanctioned bridge between display text and [`Money`].
//!
//! ## Locale Convention (pt-BR default)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   "R$ 1.234,56"                                                         │
//! │    ──  ─ ─── ──                                                         │
//! │    │   │  │   └── fractional part: 0-2 digits, right-padded to 2       │
//! │    │   │  └────── decimal separator ','                                 │
//! │    │   └───────── thousands separator '.' (ignored when parsing)        │
//! │    └───────────── currency symbol (optional when parsing)               │
//! │                                                                         │
//! │   parse  → Money(123456)                                                │
//! │   format → "R$ 1.234,56"                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `format(parse(x))` normalizes: `"1234,5"` comes back as `"R$ 1.234,50"`.
//! The reverse direction, `parse(format(c)) == c`, holds for every amount.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// Default currency symbol (Brazilian real).
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Default thousands separator.
pub const DEFAULT_THOUSANDS_SEPARATOR: char = '.';

/// Default decimal separator.
pub const DEFAULT_DECIMAL_SEPARATOR: char = ',';

/// Parses and formats locale money text.
///
/// Cheap to clone and holds no state between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyCodec {
    symbol: String,
    thousands_separator: char,
    decimal_separator: char,
}

impl Default for MoneyCodec {
    fn default() -> Self {
        MoneyCodec {
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
        }
    }
}

/// Result of [`MoneyCodec::parse_lenient`].
///
/// `issue` is set whenever the strict parse rejected the text; `amount` is
/// then the digits-only fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LenientParse {
    pub amount: Money,
    pub issue: Option<CoreError>,
}

impl LenientParse {
    pub fn is_clean(&self) -> bool {
        self.issue.is_none()
    }
}

impl MoneyCodec {
    /// Creates a codec for a custom symbol and separators.
    ///
    /// ## Rules
    /// - Separators must differ
    /// - Separators cannot be digits or '-'
    pub fn new(
        symbol: impl Into<String>,
        thousands_separator: char,
        decimal_separator: char,
    ) -> CoreResult<Self> {
        if thousands_separator == decimal_separator {
            return Err(ValidationError::Inconsistent {
                field: "separators".to_string(),
                reason: "thousands and decimal separators must differ".to_string(),
            }
            .into());
        }

        for sep in [thousands_separator, decimal_separator] {
            if sep.is_ascii_digit() || sep == '-' {
                return Err(ValidationError::Inconsistent {
                    field: "separators".to_string(),
                    reason: format!("'{}' cannot be used as a separator", sep),
                }
                .into());
            }
        }

        Ok(MoneyCodec {
            symbol: symbol.into(),
            thousands_separator,
            decimal_separator,
        })
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Formats an amount with symbol, thousands grouping and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::codec::MoneyCodec;
    /// use feira_core::money::Money;
    ///
    /// let codec = MoneyCodec::default();
    /// assert_eq!(codec.format(Money::from_cents(123_456)), "R$ 1.234,56");
    /// assert_eq!(codec.format(Money::from_cents(-5)), "-R$ 0,05");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let body = self.format_magnitude(amount);

        if self.symbol.is_empty() {
            format!("{}{}", sign, body)
        } else {
            format!("{}{} {}", sign, self.symbol, body)
        }
    }

    /// Formats without the currency symbol, for prefilling form inputs.
    pub fn format_plain(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!("{}{}", sign, self.format_magnitude(amount))
    }

    fn format_magnitude(&self, amount: Money) -> String {
        // unsigned_abs keeps i64::MIN formattable
        let magnitude = amount.cents().unsigned_abs();
        let whole = (magnitude / 100).to_string();
        let frac = magnitude % 100;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        format!("{}{}{:02}", grouped, self.decimal_separator, frac)
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parses locale money text into centavos.
    ///
    /// ## Rules
    /// - Empty or whitespace-only text is zero
    /// - Currency symbol and whitespace are stripped first
    /// - A leading '-' makes the amount negative
    /// - Thousands separators are ignored wherever they appear in the integer part
    /// - At most one decimal separator, followed by 0-2 digits
    /// - Anything else is `InvalidMoneyFormat`
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::codec::MoneyCodec;
    ///
    /// let codec = MoneyCodec::default();
    /// assert_eq!(codec.parse("R$ 1.234,56").unwrap().cents(), 123_456);
    /// assert_eq!(codec.parse("10,5").unwrap().cents(), 1_050);
    /// assert_eq!(codec.parse("").unwrap().cents(), 0);
    /// assert!(codec.parse("12abc").is_err());
    /// ```
    pub fn parse(&self, text: &str) -> CoreResult<Money> {
        let (negative, body) = self.strip_decorations(text);
        if body.is_empty() {
            return Ok(Money::zero());
        }

        let invalid = |reason: String| CoreError::InvalidMoneyFormat {
            input: text.to_string(),
            reason,
        };

        if let Some(bad) = body.chars().find(|&c| {
            !c.is_ascii_digit() && c != self.thousands_separator && c != self.decimal_separator
        }) {
            return Err(invalid(format!("unexpected character '{}'", bad)));
        }

        let mut parts = body.split(self.decimal_separator);
        let integer_part = parts.next().unwrap_or_default();
        let fraction_part = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(invalid("more than one decimal separator".to_string()));
        }

        if fraction_part.contains(self.thousands_separator) {
            return Err(invalid(
                "thousands separator after the decimal separator".to_string(),
            ));
        }
        if fraction_part.len() > 2 {
            return Err(invalid(format!(
                "{} fractional digits, at most 2 allowed",
                fraction_part.len()
            )));
        }

        let integer_digits: String = integer_part
            .chars()
            .filter(|&c| c != self.thousands_separator)
            .collect();
        let whole = parse_digits(&integer_digits)
            .ok_or_else(|| invalid("amount too large".to_string()))?;
        let fraction = parse_digits(&format!("{:0<2}", fraction_part))
            .ok_or_else(|| invalid("amount too large".to_string()))?;

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(|| invalid("amount too large".to_string()))?;

        Ok(Money::from_cents(if negative { -cents } else { cents }))
    }

    /// Parses without failing.
    ///
    /// When the strict parse rejects the text, every digit left in it is read
    /// as centavos (the way a masked currency input accumulates keystrokes) and
    /// the rejection is returned in `issue` for the caller to show.
    ///
    /// ## Example
    /// ```rust
    /// use feira_core::codec::MoneyCodec;
    ///
    /// let codec = MoneyCodec::default();
    /// let parsed = codec.parse_lenient("R$ 12,345");
    /// assert_eq!(parsed.amount.cents(), 12_345);
    /// assert!(!parsed.is_clean());
    /// ```
    pub fn parse_lenient(&self, text: &str) -> LenientParse {
        match self.parse(text) {
            Ok(amount) => LenientParse {
                amount,
                issue: None,
            },
            Err(issue) => {
                let (negative, body) = self.strip_decorations(text);
                let digits: String = body.chars().filter(char::is_ascii_digit).collect();
                let Some(cents) = parse_digits(&digits) else {
                    warn!(input = %text, "Lenient money parse overflowed, using zero");
                    return LenientParse {
                        amount: Money::zero(),
                        issue: Some(CoreError::InvalidMoneyFormat {
                            input: text.to_string(),
                            reason: "amount too large".to_string(),
                        }),
                    };
                };
                debug!(
                    input = %text,
                    fallback_cents = cents,
                    "Lenient money parse fell back to digits"
                );

                LenientParse {
                    amount: Money::from_cents(if negative { -cents } else { cents }),
                    issue: Some(issue),
                }
            }
        }
    }

    /// Removes symbol and whitespace and detects a leading minus sign.
    fn strip_decorations(&self, text: &str) -> (bool, String) {
        let without_symbol = if self.symbol.is_empty() {
            text.to_string()
        } else {
            text.replace(self.symbol.as_str(), "")
        };

        let compact: String = without_symbol
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        match compact.strip_prefix('-') {
            Some(rest) => (true, rest.to_string()),
            None => (false, compact),
        }
    }
}

/// Parses an ASCII digit string; empty is zero, overflow is `None`.
fn parse_digits(digits: &str) -> Option<i64> {
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<i64>().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
