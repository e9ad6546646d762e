//! # Calculator Configuration
//!
//! Locale and business limits for the calculation core.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FEIRA_CURRENCY_SYMBOL=US$                                          │
//! │     FEIRA_MAX_INSTALLMENTS=24                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/calc/feira.toml (Linux)                                  │
//! │     ~/Library/Application Support/com.feira.calc/feira.toml (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     "R$ 1.234,56", 120 installments, tiers 60/40/20                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # feira.toml
//! [currency]
//! symbol = "R$"
//! thousands_separator = "."
//! decimal_separator = ","
//!
//! [contract]
//! max_installments = 120
//!
//! [tiers]
//! highly_recommended = 60
//! recommended = 40
//! moderate = 20
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use feira_core::codec::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMAL_SEPARATOR, DEFAULT_THOUSANDS_SEPARATOR,
};
use feira_core::profitability::{
    HIGHLY_RECOMMENDED_MIN_MARGIN, MODERATE_MIN_MARGIN, RECOMMENDED_MIN_MARGIN,
};
use feira_core::{
    ContractCalculator, CoreError, MoneyCodec, ProfitabilityAnalyzer, TierThresholds,
    MAX_INSTALLMENT_COUNT,
};

// =============================================================================
// Errors
// =============================================================================

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] CoreError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// How amounts are written and read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    /// Printed before the amount. Empty prints the bare number.
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
        }
    }
}

/// Contract limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractSettings {
    /// Longest installment plan accepted.
    /// Default: 120
    pub max_installments: i64,
}

impl Default for ContractSettings {
    fn default() -> Self {
        ContractSettings {
            max_installments: MAX_INSTALLMENT_COUNT,
        }
    }
}

/// Margin percentages where each recommendation tier starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierSettings {
    pub highly_recommended: Decimal,
    pub recommended: Decimal,
    pub moderate: Decimal,
}

impl Default for TierSettings {
    fn default() -> Self {
        TierSettings {
            highly_recommended: HIGHLY_RECOMMENDED_MIN_MARGIN,
            recommended: RECOMMENDED_MIN_MARGIN,
            moderate: MODERATE_MIN_MARGIN,
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub contract: ContractSettings,

    #[serde(default)]
    pub tiers: TierSettings,
}

impl CalcConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (feira.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// default file just means defaults.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                info!(?path, "Loading config from file");
                Self::from_toml(&std::fs::read_to_string(&path)?)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading config from file");
                    Self::from_toml(&std::fs::read_to_string(&path)?)?
                }
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `FEIRA_*` environment variables.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparseable values are
    /// logged and skipped.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(symbol) = lookup("FEIRA_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency.symbol = symbol;
        }

        if let Some(sep) = lookup("FEIRA_THOUSANDS_SEPARATOR") {
            match single_char(&sep) {
                Some(c) => self.currency.thousands_separator = c,
                None => warn!(
                    value = %sep,
                    "Ignoring FEIRA_THOUSANDS_SEPARATOR: expected one character"
                ),
            }
        }

        if let Some(sep) = lookup("FEIRA_DECIMAL_SEPARATOR") {
            match single_char(&sep) {
                Some(c) => self.currency.decimal_separator = c,
                None => warn!(
                    value = %sep,
                    "Ignoring FEIRA_DECIMAL_SEPARATOR: expected one character"
                ),
            }
        }

        if let Some(max) = lookup("FEIRA_MAX_INSTALLMENTS") {
            match max.trim().parse::<i64>() {
                Ok(m) => {
                    debug!(max_installments = m, "Overriding installment limit from environment");
                    self.contract.max_installments = m;
                }
                Err(_) => warn!(value = %max, "Ignoring FEIRA_MAX_INSTALLMENTS: not an integer"),
            }
        }

        let tiers = [
            ("FEIRA_TIER_HIGHLY_RECOMMENDED", &mut self.tiers.highly_recommended),
            ("FEIRA_TIER_RECOMMENDED", &mut self.tiers.recommended),
            ("FEIRA_TIER_MODERATE", &mut self.tiers.moderate),
        ];
        for (key, slot) in tiers {
            if let Some(value) = lookup(key) {
                match value.trim().parse::<Decimal>() {
                    Ok(d) => *slot = d,
                    Err(_) => warn!(key, value = %value, "Ignoring tier override: not a number"),
                }
            }
        }
    }

    /// Validates the configuration by building every core component.
    pub fn validate(&self) -> ConfigResult<()> {
        self.codec()?;
        self.calculator()?;
        self.analyzer()?;
        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "feira", "calc")
            .map(|dirs| dirs.config_dir().join("feira.toml"))
    }

    // =========================================================================
    // Component Builders
    // =========================================================================

    pub fn codec(&self) -> ConfigResult<MoneyCodec> {
        Ok(MoneyCodec::new(
            &self.currency.symbol,
            self.currency.thousands_separator,
            self.currency.decimal_separator,
        )?)
    }

    pub fn calculator(&self) -> ConfigResult<ContractCalculator> {
        Ok(ContractCalculator::new(self.contract.max_installments)?)
    }

    pub fn analyzer(&self) -> ConfigResult<ProfitabilityAnalyzer> {
        let thresholds = TierThresholds::new(
            self.tiers.highly_recommended,
            self.tiers.recommended,
            self.tiers.moderate,
        )?;
        Ok(ProfitabilityAnalyzer::new(thresholds)?)
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CalcConfig::default();
        assert_eq!(config.currency.symbol, "R$");
        assert_eq!(config.contract.max_installments, 120);
        assert_eq!(config.tiers.highly_recommended, dec!(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CalcConfig::from_toml(
            r#"
            [contract]
            max_installments = 24

            [tiers]
            moderate = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.contract.max_installments, 24);
        assert_eq!(config.tiers.moderate, dec!(15));
        assert_eq!(config.tiers.recommended, dec!(40));
        assert_eq!(config.currency, CurrencySettings::default());
    }

    #[test]
    fn test_currency_section() {
        let config = CalcConfig::from_toml(
            r#"
            [currency]
            symbol = "$"
            thousands_separator = ","
            decimal_separator = "."
            "#,
        )
        .unwrap();

        let codec = config.codec().unwrap();
        assert_eq!(
            codec.format(feira_core::Money::from_cents(123_456)),
            "$ 1,234.56"
        );
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = CalcConfig::from_toml("[contract]\nmax_installments = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_validation() {
        let mut config = CalcConfig::default();

        config.contract.max_installments = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config = CalcConfig::default();
        config.currency.decimal_separator = '.';
        assert!(config.validate().is_err());

        config = CalcConfig::default();
        config.tiers.recommended = dec!(70);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = CalcConfig::default();
        config.apply_overrides(lookup(&[
            ("FEIRA_CURRENCY_SYMBOL", "US$"),
            ("FEIRA_MAX_INSTALLMENTS", "36"),
            ("FEIRA_TIER_MODERATE", "12.5"),
        ]));

        assert_eq!(config.currency.symbol, "US$");
        assert_eq!(config.contract.max_installments, 36);
        assert_eq!(config.tiers.moderate, dec!(12.5));
    }

    #[test]
    fn test_bad_overrides_are_skipped() {
        let mut config = CalcConfig::default();
        config.apply_overrides(lookup(&[
            ("FEIRA_MAX_INSTALLMENTS", "lots"),
            ("FEIRA_DECIMAL_SEPARATOR", ",,"),
            ("FEIRA_TIER_RECOMMENDED", "forty"),
        ]));

        assert_eq!(config, CalcConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let result = CalcConfig::load(Some(PathBuf::from("/nonexistent/feira.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&CalcConfig::default()).unwrap();
        assert!(toml_str.contains("[currency]"));
        assert!(toml_str.contains("[contract]"));
        assert!(toml_str.contains("[tiers]"));
    }
}
