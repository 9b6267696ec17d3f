//! SA configuration.

use crate::error::{KnapsackError, Result};

/// Configuration for the Simulated Annealing algorithm.
///
/// After each temperature level the temperature is multiplied by a factor
/// drawn uniformly from `[cooling_low, cooling_high)`. The rate changes
/// every level, so the schedule is not geometric.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_iterations_per_temperature(200)
///     .with_cooling_range(0.85, 0.95)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature as a fraction of the initial solution's value.
    pub initial_temperature_ratio: f64,

    /// The run continues while `T >= min_temperature`.
    pub min_temperature: f64,

    /// Lower bound of the cooling factor, in (0, 1).
    pub cooling_low: f64,

    /// Upper bound of the cooling factor (exclusive), in (cooling_low, 1).
    pub cooling_high: f64,

    /// Neighbor proposals at each temperature level.
    pub iterations_per_temperature: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature_ratio: 0.4,
            min_temperature: 0.1,
            cooling_low: 0.8,
            cooling_high: 0.99,
            iterations_per_temperature: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature_ratio(mut self, ratio: f64) -> Self {
        self.initial_temperature_ratio = ratio;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the half-open range `[low, high)` of the cooling factor.
    pub fn with_cooling_range(mut self, low: f64, high: f64) -> Self {
        self.cooling_low = low;
        self.cooling_high = high;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations_per_temperature == 0 {
            return Err(KnapsackError::config(
                "iterations_per_temperature must be at least 1",
            ));
        }
        if !(self.initial_temperature_ratio > 0.0 && self.initial_temperature_ratio.is_finite()) {
            return Err(KnapsackError::config(format!(
                "initial_temperature_ratio must be positive, got {}",
                self.initial_temperature_ratio
            )));
        }
        if !(self.min_temperature > 0.0 && self.min_temperature.is_finite()) {
            return Err(KnapsackError::config(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        let (low, high) = (self.cooling_low, self.cooling_high);
        if !(low > 0.0 && low < high && high < 1.0) {
            return Err(KnapsackError::config(format!(
                "cooling factor needs 0 < low < high < 1, got [{low}, {high})"
            )));
        }
        Ok(())
    }
}
