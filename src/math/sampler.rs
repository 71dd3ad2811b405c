//! Explicitly owned seeded random stream for shape generators
//!
//! Each generator call builds its own `ZoneRng` from the zone seed, so the
//! output of one zone never depends on how many draws another zone made.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random source threaded through a single generation pass
#[derive(Debug, Clone)]
pub struct ZoneRng {
    rng: StdRng,
}

impl ZoneRng {
    /// Create a deterministic stream for one generation pass
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Bernoulli trial with the given success probability
    ///
    /// Always consumes exactly one draw, whatever the probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Uniform sample in `[low, high)`
    ///
    /// Returns `low` without drawing when the range is empty or not finite.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if !low.is_finite() || !high.is_finite() || high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }

    /// Symmetric offset in `[-amplitude, amplitude]`
    ///
    /// Returns zero without drawing when the amplitude is zero or not finite.
    pub fn jitter(&mut self, amplitude: f64) -> f64 {
        let amplitude = amplitude.abs();
        if !amplitude.is_finite() || amplitude <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(-amplitude..=amplitude)
    }

    /// Weighted random selection
    ///
    /// Returns index into weights array using cumulative distribution
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.unit() * total;
        for (i, &weight) in weights.iter().enumerate() {
            if weight.is_nan() || weight <= 0.0 {
                continue;
            }
            rand_val -= weight;
            if rand_val < 0.0 {
                return i;
            }
        }
        weights.iter().rposition(|w| *w > 0.0).unwrap_or(0)
    }
}
