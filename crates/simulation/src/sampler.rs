//! Fabricated portfolio outcomes.
//!
//! Each method has fixed uniform bands for its headline metrics; weights come
//! from [`crate::weights`]. Calls are stateless and independent: identical
//! inputs produce different outputs by design.

use crate::weights::sample_weights;
use fastfolio_domain::enums::OptimizationMethod;
use fastfolio_domain::error::DomainError;
use fastfolio_domain::metrics::sharpe_ratio;
use fastfolio_domain::value_objects::weights::WeightVector;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Closed uniform sampling band, in percent.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

/// The bands a method's headline metrics are drawn from.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeRanges {
    pub expected_return: Band,
    pub volatility: Band,
}

impl OutcomeRanges {
    #[must_use]
    pub fn for_method(method: OptimizationMethod) -> Self {
        match method {
            OptimizationMethod::Standard => Self {
                expected_return: Band {
                    low: 5.5,
                    high: 7.5,
                },
                volatility: Band {
                    low: 12.0,
                    high: 15.0,
                },
            },
            OptimizationMethod::Fast => Self {
                expected_return: Band {
                    low: 8.0,
                    high: 10.0,
                },
                volatility: Band {
                    low: 9.0,
                    high: 11.0,
                },
            },
        }
    }
}

/// A sampled portfolio: weights plus headline percent metrics.
#[derive(Debug, Clone)]
pub struct PortfolioOutcome {
    pub weights: WeightVector,
    pub expected_return: Decimal,
    pub volatility: Decimal,
    pub sharpe_ratio: Decimal,
}

/// Draws a fabricated portfolio for the given method and size using the
/// thread RNG.
///
/// # Errors
///
/// Only if the Sharpe guard trips, which the configured volatility floors
/// rule out.
pub fn sample(
    method: OptimizationMethod,
    asset_count: u32,
) -> Result<PortfolioOutcome, DomainError> {
    let mut rng = rand::rng();
    sample_with(&mut rng, method, asset_count)
}

/// Same as [`sample`] with an injectable RNG.
pub fn sample_with<R: Rng + ?Sized>(
    rng: &mut R,
    method: OptimizationMethod,
    asset_count: u32,
) -> Result<PortfolioOutcome, DomainError> {
    let ranges = OutcomeRanges::for_method(method);

    let weights = sample_weights(rng, method, asset_count);
    let expected_return = sample_percent(rng, ranges.expected_return);
    let volatility = sample_percent(rng, ranges.volatility);
    let sharpe = sharpe_ratio(expected_return, volatility)?;

    Ok(PortfolioOutcome {
        weights,
        expected_return,
        volatility,
        sharpe_ratio: sharpe,
    })
}

fn sample_percent<R: Rng + ?Sized>(rng: &mut R, band: Band) -> Decimal {
    let value = rng.random_range(band.low..=band.high);
    Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastfolio_domain::enums::OptimizationMethod::{Fast, Standard};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sampled_metrics_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let standard = sample_with(&mut rng, Standard, 100).unwrap();
            assert!(standard.expected_return >= dec!(5.5));
            assert!(standard.expected_return <= dec!(7.5));
            assert!(standard.volatility >= dec!(12.0));
            assert!(standard.volatility <= dec!(15.0));

            let fast = sample_with(&mut rng, Fast, 100).unwrap();
            assert!(fast.expected_return >= dec!(8.0));
            assert!(fast.expected_return <= dec!(10.0));
            assert!(fast.volatility >= dec!(9.0));
            assert!(fast.volatility <= dec!(11.0));
        }
    }

    #[test]
    fn test_metrics_carry_two_decimals() {
        let mut rng = StdRng::seed_from_u64(17);
        let outcome = sample_with(&mut rng, Standard, 100).unwrap();

        assert!(outcome.expected_return.scale() <= 2);
        assert!(outcome.volatility.scale() <= 2);
        assert!(outcome.sharpe_ratio.scale() <= 2);
    }

    #[test]
    fn test_sharpe_is_return_over_volatility() {
        let mut rng = StdRng::seed_from_u64(23);
        let outcome = sample_with(&mut rng, Fast, 150).unwrap();

        assert_eq!(
            outcome.sharpe_ratio,
            (outcome.expected_return / outcome.volatility).round_dp(2)
        );
    }

    fn mean_sharpe<R: Rng>(rng: &mut R, method: OptimizationMethod, trials: u32) -> Decimal {
        let total: Decimal = (0..trials)
            .map(|_| sample_with(rng, method, 100).unwrap().sharpe_ratio)
            .sum();
        total / Decimal::from(trials)
    }

    #[test]
    fn test_mean_sharpe_favors_fast() {
        let mut rng = StdRng::seed_from_u64(5);
        let standard = mean_sharpe(&mut rng, Standard, 1000);
        let fast = mean_sharpe(&mut rng, Fast, 1000);

        // The configured bands don't even overlap: the worst fast draw
        // (8.0 / 11.0) beats the best standard draw (7.5 / 12.0).
        assert!(fast > standard);
    }

    #[test]
    fn test_weights_length_matches_request() {
        let outcome = sample(Standard, 250).unwrap();
        assert_eq!(outcome.weights.len(), 250);
    }
}
