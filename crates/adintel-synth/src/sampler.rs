//! Discrete weighted sampling over a fixed set of values.
//!
//! Implemented as a cumulative-weight table with binary search rather than a
//! per-draw linear scan. Construction validates the weight table up front so
//! a misconfigured distribution fails fast instead of skewing a whole batch.

use rand::Rng;

use crate::SynthError;

/// A fixed discrete distribution over `T`, sampled by cumulative-weight
/// binary search.
#[derive(Debug, Clone)]
pub struct WeightedSampler<T> {
    items: Vec<T>,
    cumulative: Vec<f64>,
    total: f64,
}

impl<T> WeightedSampler<T> {
    /// Build a sampler from `(value, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::EmptyDistribution`] when no entries are given,
    /// [`SynthError::InvalidWeight`] for negative or non-finite weights, and
    /// [`SynthError::ZeroTotalWeight`] when the weights sum to zero.
    pub fn new(entries: Vec<(T, f64)>) -> Result<Self, SynthError> {
        if entries.is_empty() {
            return Err(SynthError::EmptyDistribution);
        }

        let mut items = Vec::with_capacity(entries.len());
        let mut cumulative = Vec::with_capacity(entries.len());
        let mut total = 0.0_f64;

        for (item, weight) in entries {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SynthError::InvalidWeight(weight));
            }
            total += weight;
            items.push(item);
            cumulative.push(total);
        }

        if total <= 0.0 {
            return Err(SynthError::ZeroTotalWeight);
        }

        Ok(Self {
            items,
            cumulative,
            total,
        })
    }

    /// Draw one value proportionally to its weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let draw = rng.random::<f64>() * self.total;
        // First entry whose cumulative weight exceeds the draw. The min()
        // guard covers the draw == total edge from floating-point rounding.
        let idx = self
            .cumulative
            .partition_point(|&c| c <= draw)
            .min(self.items.len() - 1);
        &self.items[idx]
    }
}
