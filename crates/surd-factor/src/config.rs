//! Tuning knobs for factorization.

/// Parameters of the randomized factorization steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactorConfig {
    /// Random trials allowed for one equal-degree split before giving up.
    pub max_split_trials: usize,
    /// Seed of the random generator driving equal-degree splitting.
    pub seed: u64,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            max_split_trials: 1000,
            seed: 0x5eed_cafe,
        }
    }
}

impl FactorConfig {
    /// Returns a copy with a different seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
