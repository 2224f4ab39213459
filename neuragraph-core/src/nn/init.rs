use crate::error::NeuraGraphError;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Uniform initializer for trainable leaves.
///
/// Draws from the closed interval `[low, high]`. The default range is `[-1, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct UniformInit {
    low: f64,
    high: f64,
    dist: Uniform<f64>,
}

impl UniformInit {
    /// Creates an initializer over `[low, high]`.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if a bound is not finite or `low > high`.
    pub fn new(low: f64, high: f64) -> Result<Self, NeuraGraphError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(NeuraGraphError::ConfigurationError(format!(
                "Initialization bounds must be finite, got [{}, {}]",
                low, high
            )));
        }
        if low > high {
            return Err(NeuraGraphError::ConfigurationError(format!(
                "Initialization lower bound {} exceeds upper bound {}",
                low, high
            )));
        }
        Ok(UniformInit {
            low,
            high,
            dist: Uniform::new_inclusive(low, high),
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Draws one value from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.dist.sample(rng)
    }
}

impl Default for UniformInit {
    fn default() -> Self {
        UniformInit {
            low: -1.0,
            high: 1.0,
            dist: Uniform::new_inclusive(-1.0, 1.0),
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
