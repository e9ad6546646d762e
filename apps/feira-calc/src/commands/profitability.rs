//! # Profitability Commands
//!
//! Stand analytics for the fair configuration screen.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use feira_core::{FairAnalysis, ProfitabilityResult, RequiredExpensePool, StandConfiguration};

use super::MoneyInput;
use crate::error::ApiError;
use crate::state::CalcState;

/// A stand layout as typed in the configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandInput {
    pub width: Decimal,
    pub height: Decimal,

    #[serde(default = "default_quantity")]
    pub quantity: i64,

    pub price_per_area: MoneyInput,
    pub setup_cost_per_area: MoneyInput,
}

fn default_quantity() -> i64 {
    1
}

impl StandInput {
    fn resolve(&self, state: &CalcState) -> Result<StandConfiguration, ApiError> {
        Ok(StandConfiguration {
            width: self.width,
            height: self.height,
            quantity: self.quantity,
            price_per_area: self.price_per_area.resolve(&state.codec)?,
            setup_cost_per_area: self.setup_cost_per_area.resolve(&state.codec)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInput {
    pub total_value: MoneyInput,
    pub total_area: Decimal,
}

// =============================================================================
// stand_metrics
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandMetricsRequest {
    pub configuration: StandInput,
    pub pool: PoolInput,
}

/// Profitability of a single configuration against a pool snapshot.
pub fn stand_metrics(
    state: &CalcState,
    req: StandMetricsRequest,
) -> Result<ProfitabilityResult, ApiError> {
    let config = req.configuration.resolve(state)?;
    let pool = RequiredExpensePool::new(
        req.pool.total_value.resolve(&state.codec)?,
        req.pool.total_area,
    );
    debug!(
        width = %config.width,
        height = %config.height,
        quantity = config.quantity,
        pool_cents = pool.total_value.cents(),
        "stand_metrics command"
    );

    Ok(state.analyzer.compute_stand_metrics(&config, &pool)?)
}

// =============================================================================
// analyze_fair
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFairRequest {
    pub configurations: Vec<StandInput>,
    pub required_expenses: MoneyInput,

    /// Area to spread the expenses over. Defaults to the configured area.
    #[serde(default)]
    pub pool_area: Option<Decimal>,
}

/// Profitability of every configuration and of the fair as a whole.
pub fn analyze_fair(state: &CalcState, req: AnalyzeFairRequest) -> Result<FairAnalysis, ApiError> {
    let configs = req
        .configurations
        .iter()
        .map(|input| input.resolve(state))
        .collect::<Result<Vec<_>, _>>()?;
    let required_expenses = req.required_expenses.resolve(&state.codec)?;
    debug!(
        configurations = configs.len(),
        required_expenses = required_expenses.cents(),
        "analyze_fair command"
    );

    let analysis = match req.pool_area {
        Some(area) => state
            .analyzer
            .analyze(&configs, &RequiredExpensePool::new(required_expenses, area))?,
        None => state.analyzer.analyze_fair(&configs, required_expenses)?,
    };
    Ok(analysis)
}
