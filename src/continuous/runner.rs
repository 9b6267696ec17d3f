//! Continuous hill-climbing loop and curve sampling.

use super::config::{check_bounds, ContinuousConfig};
use crate::error::{KnapsackError, Result};
use crate::random::rng_for;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a continuous hill-climbing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousResult {
    /// Final point.
    pub point: f64,
    /// Objective at `point`.
    pub eval: f64,
    /// Every accepted point, in order.
    pub accepted: Vec<f64>,
}

/// Executes hill-climbing on `f: f64 -> f64`.
pub struct ContinuousRunner;

impl ContinuousRunner {
    /// Runs with a generator seeded from `config.seed`.
    pub fn run<F: Fn(f64) -> f64>(
        objective: F,
        config: &ContinuousConfig,
    ) -> Result<ContinuousResult> {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs with an explicit generator.
    pub fn run_with_rng<F: Fn(f64) -> f64, R: Rng>(
        objective: F,
        config: &ContinuousConfig,
        rng: &mut R,
    ) -> Result<ContinuousResult> {
        config.validate()?;
        let (lower, upper) = config.bounds;

        let mut point = rng.random_range(lower..upper);
        let mut eval = objective(point);
        let mut accepted = Vec::new();

        for i in 0..config.iterations {
            let candidate = rng.random_range(lower..upper);
            let candidate_eval = objective(candidate);
            if candidate_eval <= eval {
                trace!(iteration = i, x = candidate, fx = candidate_eval, "point accepted");
                point = candidate;
                eval = candidate_eval;
                accepted.push(point);
            }
        }

        debug!(x = point, fx = eval, accepted = accepted.len(), "continuous climb finished");

        Ok(ContinuousResult {
            point,
            eval,
            accepted,
        })
    }
}

/// Sampling step used by plotting front ends.
pub const DEFAULT_STEP: f64 = 0.1;

/// Largest number of samples [`curve`] will produce.
pub const MAX_CURVE_POINTS: usize = 1_000_000;

/// Samples `(x, f(x))` on `[lower, upper)` every `step`.
///
/// # Errors
/// Returns a configuration error for empty bounds, a non-positive step, or
/// a step so small that more than [`MAX_CURVE_POINTS`] samples would be
/// needed.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::continuous::curve;
///
/// let points = curve(|x| x * x, (0.0, 1.0), 0.25).unwrap();
/// assert_eq!(points.len(), 4);
/// assert_eq!(points[2], (0.5, 0.25));
/// ```
pub fn curve<F: Fn(f64) -> f64>(
    objective: F,
    bounds: (f64, f64),
    step: f64,
) -> Result<Vec<(f64, f64)>> {
    check_bounds(bounds)?;
    if !(step.is_finite() && step > 0.0) {
        return Err(KnapsackError::config(format!("step must be positive, got {step}")));
    }
    let (lower, upper) = bounds;
    let samples = ((upper - lower) / step).ceil();
    if samples > MAX_CURVE_POINTS as f64 {
        return Err(KnapsackError::config(format!(
            "step {step} needs {samples} samples, limit is {MAX_CURVE_POINTS}"
        )));
    }
    let count = samples as usize;
    Ok((0..count)
        .map(|i| lower + i as f64 * step)
        .filter(|&x| x < upper)
        .map(|x| (x, objective(x)))
        .collect())
}
