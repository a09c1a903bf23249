//! Closed-form runtime model for the two optimization methods.
//!
//! The standard curve is superlinear and steepens past 800 assets; the fast
//! curve is a near-flat step function. The gap between the two is the whole
//! point of the demo.

use fastfolio_domain::enums::OptimizationMethod;

/// Standard method below the slowdown threshold: `0.0001 * n^1.8`.
pub const STANDARD_BASE_COEFF: f64 = 0.0001;
pub const STANDARD_BASE_EXPONENT: f64 = 1.8;

/// Steeper curve applied from [`STANDARD_STEEP_FROM`] assets upward.
pub const STANDARD_STEEP_COEFF: f64 = 0.00015;
pub const STANDARD_STEEP_EXPONENT: f64 = 1.9;
pub const STANDARD_STEEP_FROM: u32 = 800;

/// Fast method: flat 0.5s up to [`FAST_LARGE_OVER`] assets, 0.6s beyond.
pub const FAST_BASE_SECONDS: f64 = 0.5;
pub const FAST_LARGE_SECONDS: f64 = 0.6;
pub const FAST_LARGE_OVER: u32 = 500;

/// Ceiling on how long a paced run actually blocks. Predictions above this
/// still report their full theoretical value.
pub const PACED_RUNTIME_CAP_SECONDS: f64 = 30.0;

/// Predicted wall-clock seconds for a method at a given portfolio size.
///
/// Pure model; `asset_count` is assumed already validated to [100, 1000].
#[must_use]
pub fn predicted_seconds(method: OptimizationMethod, asset_count: u32) -> f64 {
    match method {
        OptimizationMethod::Standard => {
            let n = f64::from(asset_count);
            if asset_count >= STANDARD_STEEP_FROM {
                STANDARD_STEEP_COEFF * n.powf(STANDARD_STEEP_EXPONENT)
            } else {
                STANDARD_BASE_COEFF * n.powf(STANDARD_BASE_EXPONENT)
            }
        }
        OptimizationMethod::Fast => {
            if asset_count <= FAST_LARGE_OVER {
                FAST_BASE_SECONDS
            } else {
                FAST_LARGE_SECONDS
            }
        }
    }
}

/// Seconds a paced run blocks for: the prediction, capped for UX.
#[must_use]
pub fn paced_seconds(method: OptimizationMethod, asset_count: u32) -> f64 {
    predicted_seconds(method, asset_count).min(PACED_RUNTIME_CAP_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastfolio_domain::enums::OptimizationMethod::{Fast, Standard};

    #[test]
    fn test_fast_is_a_two_level_step() {
        for n in (100u32..=1000).step_by(50) {
            let t = predicted_seconds(Fast, n);
            if n <= 500 {
                assert_eq!(t, FAST_BASE_SECONDS);
            } else {
                assert_eq!(t, FAST_LARGE_SECONDS);
            }
        }
    }

    #[test]
    fn test_fast_non_decreasing() {
        let mut last = 0.0;
        for n in 100u32..=1000 {
            let t = predicted_seconds(Fast, n);
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn test_standard_closed_forms() {
        assert_eq!(predicted_seconds(Standard, 300), 0.0001 * 300f64.powf(1.8));
        assert_eq!(predicted_seconds(Standard, 799), 0.0001 * 799f64.powf(1.8));
        assert_eq!(predicted_seconds(Standard, 800), 0.00015 * 800f64.powf(1.9));
        assert_eq!(
            predicted_seconds(Standard, 1000),
            0.00015 * 1000f64.powf(1.9)
        );
    }

    #[test]
    fn test_standard_jump_at_steepening_threshold() {
        let below = predicted_seconds(Standard, 799);
        let at = predicted_seconds(Standard, 800);
        let continued = 0.0001 * 800f64.powf(1.8);

        // Continuing the base curve would grow by a fraction of a percent;
        // the threshold switch nearly triples the prediction.
        assert!(continued / below < 1.01);
        assert!(at / below > 2.5);
    }

    #[test]
    fn test_standard_dominates_fast_from_150_up() {
        for n in (150u32..=1000).step_by(50) {
            assert!(predicted_seconds(Standard, n) > predicted_seconds(Fast, n));
        }
        // At the minimum portfolio size the power curve still sits under the
        // fast floor; the crossover is just above 113 assets.
        assert!(predicted_seconds(Standard, 100) < predicted_seconds(Fast, 100));
    }

    #[test]
    fn test_paced_seconds_caps_long_runs_only() {
        assert!(predicted_seconds(Standard, 1000) > PACED_RUNTIME_CAP_SECONDS);
        assert_eq!(paced_seconds(Standard, 1000), PACED_RUNTIME_CAP_SECONDS);

        assert_eq!(paced_seconds(Standard, 300), predicted_seconds(Standard, 300));
        assert_eq!(paced_seconds(Fast, 1000), FAST_LARGE_SECONDS);
    }
}
