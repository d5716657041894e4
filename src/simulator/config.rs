//! Simulation configuration.

use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::error::ConfigError;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Trials executed per scheduling turn
    pub chunk_size: u64,

    /// Relative weight of each column choice, one per option.
    /// Empty means uniform.
    pub weights: Vec<f64>,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per chunk)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            weights: Vec::new(),
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Same weight for every one of `option_count` columns.
    pub fn uniform(option_count: usize) -> Self {
        Self {
            weights: vec![1.0 / option_count.max(1) as f64; option_count],
            ..Default::default()
        }
    }

    /// Small chunks and a fixed seed, handy for tests and demos.
    pub fn quick(seed: u64) -> Self {
        Self {
            chunk_size: 100,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Weights resolved against the game's option count.
    pub fn resolved_weights(&self, option_count: usize) -> Result<Vec<f64>, ConfigError> {
        if self.weights.is_empty() {
            return Ok(vec![1.0; option_count]);
        }
        if self.weights.len() != option_count {
            return Err(ConfigError::WeightCountMismatch {
                expected: option_count,
                got: self.weights.len(),
            });
        }
        if self.weights.iter().any(|w| !w.is_finite() || *w < 0.0)
            || self.weights.iter().all(|w| *w == 0.0)
        {
            return Err(ConfigError::InvalidWeights);
        }
        Ok(self.weights.clone())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(())
    }
}
