//! Comparison configuration.

use crate::ga::{GaConfig, ScoreWeights};

/// Configuration for a full nine-combination comparison.
///
/// # Defaults
///
/// ```
/// use route_compare::compare::CompareConfig;
///
/// let config = CompareConfig::default();
/// assert_eq!(config.runs_per_combination, 3);
/// assert!(config.seed.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareConfig {
    /// Per-run GA parameters.
    pub ga: GaConfig,

    /// Fitness weights and normalization bounds.
    pub weights: ScoreWeights,

    /// Independent engine runs per combination; the best-of-R result is
    /// kept to dampen stochastic variance.
    pub runs_per_combination: usize,

    /// Base seed for the derived per-run RNG streams.
    ///
    /// `None` draws a random base seed, making the whole comparison
    /// non-reproducible but still internally independent per run.
    pub seed: Option<u64>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            ga: GaConfig::default(),
            weights: ScoreWeights::default(),
            runs_per_combination: 3,
            seed: None,
        }
    }
}

impl CompareConfig {
    /// Sets the per-run GA parameters.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Sets the fitness weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the number of runs per combination.
    pub fn with_runs_per_combination(mut self, runs: usize) -> Self {
        self.runs_per_combination = runs;
        self
    }

    /// Sets the base seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.ga.validate()?;
        if self.runs_per_combination == 0 {
            return Err("runs_per_combination must be at least 1".into());
        }
        Ok(())
    }
}
