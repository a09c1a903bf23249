use crate::charts::{AllocationBreakdown, ScalingProjection, TimeComparison};
use crate::comparison::ComparisonSummary;
use crate::error::AnalysisError;
use fastfolio_domain::enums::OptimizationMethod;
use fastfolio_domain::value_objects::outcome::OptimizationResult;
use serde::Serialize;
use tracing::debug;

/// The full post-run deliverable: both results, the headline deltas and
/// every chart dataset, ready for table rendering or JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub asset_count: u32,
    pub standard: OptimizationResult,
    pub fast: OptimizationResult,
    pub summary: ComparisonSummary,
    pub time_comparison: TimeComparison,
    pub scaling_projection: ScalingProjection,
    pub allocations: [AllocationBreakdown; 2],
}

impl ComparisonReport {
    /// # Errors
    ///
    /// Fails when the fast run's observed time is not positive.
    pub fn build(
        asset_count: u32,
        standard: OptimizationResult,
        fast: OptimizationResult,
    ) -> Result<Self, AnalysisError> {
        debug!(asset_count, "building comparison report");

        let summary = ComparisonSummary::from_results(&standard, &fast)?;
        let time_comparison = TimeComparison::from_results(&standard, &fast);
        let scaling_projection = ScalingProjection::for_current(asset_count);
        let allocations = [
            AllocationBreakdown::top_of(OptimizationMethod::Standard, &standard),
            AllocationBreakdown::top_of(OptimizationMethod::Fast, &fast),
        ];

        Ok(Self {
            asset_count,
            standard,
            fast,
            summary,
            time_comparison,
            scaling_projection,
            allocations,
        })
    }
}
