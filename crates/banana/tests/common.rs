use banana::UniformSource;

/// Replays a fixed list of draws, cycling when exhausted.
/// Reseeding restarts the list regardless of the seed value.
pub struct ScriptedSource {
    draws: Vec<f64>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty());
        Self { draws, pos: 0 }
    }

    /// A source whose draws never beat the chance of any positive price.
    #[allow(dead_code)]
    pub fn never_sells() -> Self {
        Self::new(vec![0.999])
    }
}

impl UniformSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let draw = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        draw
    }

    fn reseed(&mut self, _seed: u64) {
        self.pos = 0;
    }
}
