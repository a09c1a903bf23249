use crate::error::AnalysisError;
use fastfolio_domain::enums::OptimizationMethod;
use fastfolio_domain::value_objects::outcome::OptimizationResult;
use fastfolio_simulation::scaling;
use rust_decimal::Decimal;
use serde::Serialize;

/// Deltas between the two finished runs, with every sign convention oriented
/// so a positive number favors the fast method.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    /// Fast minus standard expected return, percent.
    pub return_difference: Decimal,
    /// Standard minus fast volatility, percent.
    pub volatility_difference: Decimal,
    /// Fast minus standard Sharpe ratio.
    pub sharpe_difference: Decimal,
    /// Observed standard time over observed fast time.
    pub speedup: f64,
    pub time_saved_seconds: f64,
}

impl ComparisonSummary {
    /// # Errors
    ///
    /// Fails when the fast run's observed time is not positive.
    pub fn from_results(
        standard: &OptimizationResult,
        fast: &OptimizationResult,
    ) -> Result<Self, AnalysisError> {
        if fast.computation_time_seconds <= 0.0 {
            return Err(AnalysisError::NonPositiveFastTime(
                fast.computation_time_seconds,
            ));
        }

        Ok(Self {
            return_difference: fast.expected_return - standard.expected_return,
            volatility_difference: standard.volatility - fast.volatility,
            sharpe_difference: fast.sharpe_ratio - standard.sharpe_ratio,
            speedup: standard.computation_time_seconds / fast.computation_time_seconds,
            time_saved_seconds: standard.computation_time_seconds - fast.computation_time_seconds,
        })
    }
}

/// Pre-run estimate derived from the scaling model alone, shown before any
/// simulation has happened.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceEstimate {
    pub standard_seconds: f64,
    pub fast_seconds: f64,
    pub speedup: f64,
    pub time_saved_seconds: f64,
    pub time_saved_percentage: f64,
}

impl PerformanceEstimate {
    #[must_use]
    pub fn for_assets(asset_count: u32) -> Self {
        let standard = scaling::predicted_seconds(OptimizationMethod::Standard, asset_count);
        let fast = scaling::predicted_seconds(OptimizationMethod::Fast, asset_count);

        Self {
            standard_seconds: standard,
            fast_seconds: fast,
            speedup: standard / fast,
            time_saved_seconds: standard - fast,
            time_saved_percentage: (standard - fast) / standard * 100.0,
        }
    }
}
