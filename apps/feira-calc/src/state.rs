//! # Calculator State
//!
//! The configured core components, built once at startup.
//!
//! ## Thread Safety
//! Every component is an immutable value, so the state can be shared
//! freely; commands only borrow it.

use feira_core::{ContractCalculator, MoneyCodec, ProfitabilityAnalyzer};

use crate::config::{CalcConfig, ConfigResult};

/// Core components configured for one run.
#[derive(Debug, Clone, Default)]
pub struct CalcState {
    pub codec: MoneyCodec,
    pub calculator: ContractCalculator,
    pub analyzer: ProfitabilityAnalyzer,
}

impl CalcState {
    pub fn from_config(config: &CalcConfig) -> ConfigResult<Self> {
        Ok(CalcState {
            codec: config.codec()?,
            calculator: config.calculator()?,
            analyzer: config.analyzer()?,
        })
    }
}
