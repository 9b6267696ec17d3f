//! HC configuration.

use crate::error::{KnapsackError, Result};

/// Configuration for random-restart hill-climbing.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::hc::HcConfig;
///
/// let config = HcConfig::default()
///     .with_iterations(500)
///     .with_restarts(10)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Neighbor proposals per restart. Always run in full; 0 returns the
    /// initial solution.
    pub iterations: usize,

    /// Independent walks, each from a fresh initial solution. At least 1.
    pub restarts: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            restarts: 1,
            seed: None,
        }
    }
}

impl HcConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Neighbor proposals across all restarts, saturating at `usize::MAX`.
    pub fn total_iterations(&self) -> usize {
        self.iterations.saturating_mul(self.restarts)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.restarts == 0 {
            return Err(KnapsackError::config("restarts must be at least 1"));
        }
        Ok(())
    }
}
