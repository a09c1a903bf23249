use crate::value_objects::weights::WeightVector;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything a finished run hands back to the presentation layer.
///
/// `expected_return` and `volatility` are percentages rounded to two
/// decimals; `sharpe_ratio` is their quotient. `computation_time_seconds` is
/// observed wall clock, `theoretical_time_seconds` the scaling-model value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub weights: WeightVector,
    pub expected_return: Decimal,
    pub volatility: Decimal,
    pub sharpe_ratio: Decimal,
    pub computation_time_seconds: f64,
    pub theoretical_time_seconds: f64,
}
