//! Chart-ready datasets. The presentation layer renders these unchanged:
//! a two-bar time comparison, a two-series scaling projection, and a top-N
//! allocation breakdown per method.

use fastfolio_domain::enums::OptimizationMethod;
use fastfolio_domain::value_objects::outcome::OptimizationResult;
use fastfolio_simulation::scaling;
use serde::Serialize;

/// Asset counts the scaling projection is evaluated at.
pub const PROJECTION_SIZES: [u32; 10] = [100, 200, 300, 400, 500, 600, 700, 800, 900, 1000];

/// Holdings shown in the allocation breakdown.
pub const TOP_HOLDINGS: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct TimeBar {
    pub label: &'static str,
    pub seconds: f64,
}

/// Observed computation time per method, one bar each.
#[derive(Debug, Clone, Serialize)]
pub struct TimeComparison {
    pub bars: [TimeBar; 2],
}

impl TimeComparison {
    #[must_use]
    pub fn from_results(standard: &OptimizationResult, fast: &OptimizationResult) -> Self {
        Self {
            bars: [
                TimeBar {
                    label: OptimizationMethod::Standard.label(),
                    seconds: standard.computation_time_seconds,
                },
                TimeBar {
                    label: OptimizationMethod::Fast.label(),
                    seconds: fast.computation_time_seconds,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectionPoint {
    pub asset_count: u32,
    pub seconds: f64,
}

/// Theoretical scaling of both methods over [`PROJECTION_SIZES`].
#[derive(Debug, Clone, Serialize)]
pub struct ScalingProjection {
    pub standard: Vec<ProjectionPoint>,
    pub fast: Vec<ProjectionPoint>,
    /// The user's current selection, marked on the chart.
    pub current_assets: u32,
    /// Standard-over-fast ratio at the largest projected size.
    pub gap_at_max: f64,
}

impl ScalingProjection {
    #[must_use]
    pub fn for_current(current_assets: u32) -> Self {
        let series = |method: OptimizationMethod| {
            PROJECTION_SIZES
                .iter()
                .map(|&asset_count| ProjectionPoint {
                    asset_count,
                    seconds: scaling::predicted_seconds(method, asset_count),
                })
                .collect::<Vec<_>>()
        };

        let max_size = PROJECTION_SIZES[PROJECTION_SIZES.len() - 1];
        let gap_at_max = scaling::predicted_seconds(OptimizationMethod::Standard, max_size)
            / scaling::predicted_seconds(OptimizationMethod::Fast, max_size);

        Self {
            standard: series(OptimizationMethod::Standard),
            fast: series(OptimizationMethod::Fast),
            current_assets,
            gap_at_max,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Holding {
    /// 1-based asset label, e.g. "Asset 17".
    pub label: String,
    pub weight: f64,
    pub share_percentage: f64,
}

/// Top holdings of one method's sampled allocation.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationBreakdown {
    pub method: OptimizationMethod,
    pub holdings: Vec<Holding>,
}

impl AllocationBreakdown {
    #[must_use]
    pub fn top_of(method: OptimizationMethod, result: &OptimizationResult) -> Self {
        let holdings = result
            .weights
            .top_holdings(TOP_HOLDINGS)
            .into_iter()
            .map(|(index, weight)| Holding {
                label: format!("Asset {}", index + 1),
                weight,
                share_percentage: weight * 100.0,
            })
            .collect();

        Self { method, holdings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastfolio_domain::value_objects::weights::WeightVector;
    use rust_decimal_macros::dec;

    #[test]
    fn test_projection_covers_both_series() {
        let projection = ScalingProjection::for_current(300);

        assert_eq!(projection.standard.len(), 10);
        assert_eq!(projection.fast.len(), 10);
        assert_eq!(projection.current_assets, 300);

        // Standard series is strictly increasing; fast is the 0.5/0.6 step.
        assert!(
            projection
                .standard
                .windows(2)
                .all(|w| w[1].seconds > w[0].seconds)
        );
        assert_eq!(projection.fast[0].seconds, 0.5);
        assert_eq!(projection.fast[9].seconds, 0.6);

        // 0.00015 * 1000^1.9 over 0.6 lands above a hundredfold gap.
        assert!(projection.gap_at_max > 100.0 && projection.gap_at_max < 150.0);
    }

    #[test]
    fn test_allocation_breakdown_top_ten() {
        let mut weights = vec![0.01; 90];
        weights[4] = 0.05;
        weights[41] = 0.06;
        let result = OptimizationResult {
            weights: WeightVector(weights),
            expected_return: dec!(6.5),
            volatility: dec!(13.0),
            sharpe_ratio: dec!(0.5),
            computation_time_seconds: 1.0,
            theoretical_time_seconds: 1.0,
        };

        let breakdown = AllocationBreakdown::top_of(OptimizationMethod::Standard, &result);

        assert_eq!(breakdown.holdings.len(), TOP_HOLDINGS);
        assert_eq!(breakdown.holdings[0].label, "Asset 42");
        assert_eq!(breakdown.holdings[1].label, "Asset 5");
        assert!((breakdown.holdings[0].share_percentage - 6.0).abs() < 1e-9);
        assert!(
            breakdown
                .holdings
                .windows(2)
                .all(|w| w[0].weight >= w[1].weight)
        );
    }
}
