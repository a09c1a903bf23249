use fastfolio_domain::enums::OptimizationMethod;
use fastfolio_domain::value_objects::weights::WeightVector;
use rand::Rng;
use rand_distr::{Distribution, Gamma};

/// Dirichlet concentration per method, uniform across assets. The fast
/// method's higher concentration spreads mass more evenly, which is what
/// makes its allocation chart look better diversified.
#[must_use]
pub fn concentration(method: OptimizationMethod) -> f64 {
    match method {
        OptimizationMethod::Standard => 0.5,
        OptimizationMethod::Fast => 0.8,
    }
}

/// Draws a weight vector over `asset_count` assets from a symmetric
/// Dirichlet distribution, realized as normalized Gamma(alpha, 1) draws.
#[must_use]
pub fn sample_weights<R: Rng + ?Sized>(
    rng: &mut R,
    method: OptimizationMethod,
    asset_count: u32,
) -> WeightVector {
    let gamma = Gamma::new(concentration(method), 1.0).unwrap();

    let mut draws = Vec::with_capacity(asset_count as usize);
    let mut total = 0.0;
    for _ in 0..asset_count {
        let g: f64 = gamma.sample(rng);
        total += g;
        draws.push(g);
    }

    if total > 0.0 {
        for w in &mut draws {
            *w /= total;
        }
    } else {
        // Degenerate draw (all underflowed to zero): equal split.
        let equal = 1.0 / draws.len() as f64;
        draws.fill(equal);
    }

    WeightVector(draws)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastfolio_domain::enums::OptimizationMethod::{Fast, Standard};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_weights_are_a_unit_simplex_point() {
        let mut rng = StdRng::seed_from_u64(7);
        for method in [Standard, Fast] {
            for asset_count in [100u32, 550, 1000] {
                let weights = sample_weights(&mut rng, method, asset_count);

                assert_eq!(weights.len(), asset_count as usize);
                assert!(weights.0.iter().all(|&w| w >= 0.0));
                assert!((weights.sum() - 1.0).abs() < 1e-9);
            }
        }
    }

    fn mean_herfindahl<R: Rng>(rng: &mut R, method: OptimizationMethod, trials: u32) -> f64 {
        let total: f64 = (0..trials)
            .map(|_| {
                sample_weights(rng, method, 200)
                    .0
                    .iter()
                    .map(|w| w * w)
                    .sum::<f64>()
            })
            .sum();
        total / f64::from(trials)
    }

    #[test]
    fn test_fast_concentration_spreads_mass_more_evenly() {
        let mut rng = StdRng::seed_from_u64(11);
        let standard = mean_herfindahl(&mut rng, Standard, 200);
        let fast = mean_herfindahl(&mut rng, Fast, 200);

        // Expected Herfindahl for a symmetric Dirichlet is
        // (alpha + 1) / (n * alpha + 1), so 0.5 vs 0.8 is a ~30% gap.
        assert!(standard > fast);
    }
}
