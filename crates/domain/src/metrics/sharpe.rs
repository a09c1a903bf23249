use crate::error::DomainError;
use rust_decimal::Decimal;

/// Derives the Sharpe ratio displayed by the demo: expected return over
/// volatility, both in percent, rounded to two decimals.
///
/// # Errors
///
/// Fails when `volatility` is not strictly positive. The sampled volatility
/// floor is 9.0, so this only trips if the outcome ranges are reconfigured.
pub fn sharpe_ratio(expected_return: Decimal, volatility: Decimal) -> Result<Decimal, DomainError> {
    if volatility <= Decimal::ZERO {
        return Err(DomainError::NonPositiveVolatility(volatility));
    }
    Ok((expected_return / volatility).round_dp(2))
}
