use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Sharpe ratio is return over volatility; a non-positive denominator
    /// can only appear if the sampling ranges are reconfigured.
    #[error("volatility must be positive to derive a Sharpe ratio, got {0}")]
    NonPositiveVolatility(Decimal),
}
