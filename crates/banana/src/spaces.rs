//! Action and observation spaces.
//!
//! Only the two shapes the banana environment needs are provided: a finite
//! set of action indices and a bounded one-dimensional box of `f32` values.

use crate::error::EnvError;

/// The set `{0, 1, ..., n - 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discrete {
    n: usize,
}

impl Discrete {
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] for an empty space.
    pub fn new(n: usize) -> Result<Self, EnvError> {
        if n == 0 {
            return Err(EnvError::InvalidConfig("discrete space needs at least one value"));
        }
        Ok(Self { n })
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn contains(&self, action: usize) -> bool {
        action < self.n
    }

    /// Draws an index uniformly from the space.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> usize {
        rng.usize(0..self.n)
    }
}

/// An axis-aligned box `[low, high]` in `f32` space.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpace {
    low: Vec<f32>,
    high: Vec<f32>,
}

impl BoxSpace {
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] if the bounds differ in length, are
    /// empty, not finite, or if any `low` exceeds its `high`.
    pub fn new(low: Vec<f32>, high: Vec<f32>) -> Result<Self, EnvError> {
        if low.is_empty() || low.len() != high.len() {
            return Err(EnvError::InvalidConfig("box bounds must be non-empty and of equal length"));
        }
        let valid = low
            .iter()
            .zip(&high)
            .all(|(l, h)| l.is_finite() && h.is_finite() && l <= h);
        if !valid {
            return Err(EnvError::InvalidConfig("box bounds must be finite with low <= high"));
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub fn shape(&self) -> usize {
        self.low.len()
    }

    #[must_use]
    pub fn low(&self) -> &[f32] {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &[f32] {
        &self.high
    }

    #[must_use]
    pub fn contains(&self, value: &[f32]) -> bool {
        value.len() == self.shape()
            && value
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (l, h))| (*l..=*h).contains(v))
    }
}
