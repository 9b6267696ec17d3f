//! Continuous hill-climbing configuration.

use crate::error::{KnapsackError, Result};

/// Configuration for [`ContinuousRunner`](super::ContinuousRunner).
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::continuous::ContinuousConfig;
///
/// let config = ContinuousConfig::default()
///     .with_bounds(-5.0, 5.0)
///     .with_iterations(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousConfig {
    /// Half-open search interval `[lower, upper)`.
    pub bounds: (f64, f64),

    /// Number of candidate samples.
    pub iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            bounds: (-10.0, 10.0),
            iterations: 100,
            seed: None,
        }
    }
}

impl ContinuousConfig {
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = (lower, upper);
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_bounds(self.bounds)
    }
}

pub(crate) fn check_bounds((lower, upper): (f64, f64)) -> Result<()> {
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(KnapsackError::config(format!(
            "bounds [{lower}, {upper}) must be finite and non-empty"
        )));
    }
    if !(upper - lower).is_finite() {
        return Err(KnapsackError::config(format!(
            "bounds [{lower}, {upper}) span more than f64::MAX"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_valid() {
        assert!(ContinuousConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_bounds() {
        assert!(ContinuousConfig::default().with_bounds(1.0, 1.0).validate().is_err());
        assert!(ContinuousConfig::default().with_bounds(2.0, -2.0).validate().is_err());
        assert!(ContinuousConfig::default()
            .with_bounds(f64::NEG_INFINITY, 0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_span_overflow_rejected() {
        let config = ContinuousConfig::default().with_bounds(-f64::MAX, f64::MAX);
        assert!(matches!(
            config.validate(),
            Err(KnapsackError::Configuration(_))
        ));
        assert!(ContinuousConfig::default()
            .with_bounds(-f64::MAX / 2.0, f64::MAX / 2.0)
            .validate()
            .is_ok());
    }
}
