/// Source of uniform samples used for the per-step sale draw.
///
/// The environment owns its source, so independent instances never share
/// random state. [`fastrand::Rng`] is the production implementation; tests can
/// substitute a scripted sequence.
pub trait UniformSource {
    /// Next sample from the half-open interval `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Restart the sequence from `seed`.
    fn reseed(&mut self, seed: u64);
}

impl UniformSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }

    fn reseed(&mut self, seed: u64) {
        self.seed(seed);
    }
}
