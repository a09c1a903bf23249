use serde::{Deserialize, Serialize};

/// Portfolio weights in asset order: non-negative entries summing to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightVector(pub Vec<f64>);

impl WeightVector {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// The `n` largest holdings, descending by weight, with their 0-based
    /// asset indices.
    #[must_use]
    pub fn top_holdings(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<(usize, f64)> = self.0.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        indexed.truncate(n);
        indexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_holdings_sorted_descending() {
        let weights = WeightVector(vec![0.1, 0.4, 0.05, 0.25, 0.2]);
        let top = weights.top_holdings(3);

        assert_eq!(top, vec![(1, 0.4), (3, 0.25), (4, 0.2)]);
    }

    #[test]
    fn test_top_holdings_clamps_to_length() {
        let weights = WeightVector(vec![0.6, 0.4]);
        assert_eq!(weights.top_holdings(10).len(), 2);
    }

    #[test]
    fn test_sum() {
        let weights = WeightVector(vec![0.5, 0.25, 0.25]);
        assert!((weights.sum() - 1.0).abs() < 1e-12);
    }
}
