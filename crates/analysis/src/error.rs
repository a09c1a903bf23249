use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The speedup ratio divides by the fast method's observed time.
    #[error("fast computation time must be positive to derive a speedup, got {0}")]
    NonPositiveFastTime(f64),
}
