//! SA execution loop.

use super::config::SaConfig;
use crate::error::Result;
use crate::random::rng_for;
use crate::search::LocalSearchProblem;
use rand::Rng;
use tracing::{debug, info, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The solution held when the temperature fell below the minimum.
    ///
    /// This is the final state of the walk, not a best-so-far record.
    pub solution: S,

    /// Value of `solution`.
    pub value: f64,

    /// Starting temperature (ratio × initial value).
    pub initial_temperature: f64,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of completed temperature levels.
    pub temperature_levels: usize,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Current value at the end of each temperature level.
    pub value_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>> {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA with an explicit generator; `config.seed` is ignored.
    ///
    /// Identical generator states yield identical accept/reject sequences.
    pub fn run_with_rng<P: LocalSearchProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        let mut current = problem.initial_solution(rng);
        let mut current_value = problem.value(&current);

        let initial_temperature = config.initial_temperature_ratio * current_value;
        let mut temperature = initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut levels = 0usize;
        let mut value_history = Vec::new();

        info!(
            initial_value = current_value,
            initial_temperature, "simulated annealing started"
        );

        while temperature >= config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                let candidate = problem.neighbor(&current, rng);
                let candidate_value = problem.value(&candidate);

                // Metropolis criterion on the value lost by moving
                let accept = if candidate_value > current_value {
                    improving_moves += 1;
                    true
                } else {
                    let loss = current_value - candidate_value;
                    let probability = (-loss / temperature).exp();
                    rng.random_range(0.0..1.0) <= probability
                };

                if accept {
                    trace!(value = candidate_value, temperature, "move accepted");
                    current = candidate;
                    current_value = candidate_value;
                    accepted_moves += 1;
                }

                total_iterations += 1;
            }

            value_history.push(current_value);
            levels += 1;
            debug!(level = levels, temperature, value = current_value, "temperature level done");

            temperature = cool(temperature, config, rng);
        }

        info!(
            value = current_value,
            levels,
            iterations = total_iterations,
            "simulated annealing finished"
        );

        Ok(SaResult {
            solution: current,
            value: current_value,
            initial_temperature,
            final_temperature: temperature,
            temperature_levels: levels,
            iterations: total_iterations,
            accepted_moves,
            improving_moves,
            value_history,
        })
    }
}

/// Next temperature: `T * u` with `u ~ U[cooling_low, cooling_high)`.
fn cool<R: Rng>(temperature: f64, config: &SaConfig, rng: &mut R) -> f64 {
    temperature * rng.random_range(config.cooling_low..config.cooling_high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnapsackError;
    use crate::knapsack::{Knapsack, Solution};
    use crate::random::create_rng;
    use rand::Rng;
    use std::fmt;

    fn scenario() -> Knapsack {
        Knapsack::from_values_weights(&[10.0, 40.0, 30.0, 50.0], &[5.0, 4.0, 6.0, 3.0], 10.0)
            .unwrap()
    }

    #[test]
    fn test_final_solution_feasible() {
        let knapsack = scenario();
        for seed in 0..20 {
            let config = SaConfig::default()
                .with_iterations_per_temperature(50)
                .with_seed(seed);
            let result = SaRunner::run(&knapsack, &config).unwrap();
            assert!(result.solution.weight() <= knapsack.capacity());
            assert_eq!(result.value, result.solution.value());
        }
    }

    #[test]
    fn test_initial_temperature_tracks_initial_value() {
        let knapsack = scenario();
        let config = SaConfig::default().with_iterations_per_temperature(10);

        let mut rng = create_rng(42);
        let result = SaRunner::run_with_rng(&knapsack, &config, &mut rng).unwrap();

        let mut replay = create_rng(42);
        let initial: Solution = knapsack.initial_solution(&mut replay);
        assert!((result.initial_temperature - 0.4 * initial.value()).abs() < 1e-12);
        assert!(result.final_temperature < 0.1);
        assert_eq!(result.value_history.len(), result.temperature_levels);
        assert_eq!(result.iterations, 10 * result.temperature_levels);
    }

    #[test]
    fn test_same_seed_same_run() {
        let knapsack = scenario();
        let config = SaConfig::default()
            .with_iterations_per_temperature(30)
            .with_seed(123);
        let a = SaRunner::run(&knapsack, &config).unwrap();
        let b = SaRunner::run(&knapsack, &config).unwrap();
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.accepted_moves, b.accepted_moves);
        assert_eq!(a.improving_moves, b.improving_moves);
        assert_eq!(a.value_history, b.value_history);
        assert_eq!(a.final_temperature, b.final_temperature);
    }

    #[test]
    fn test_zero_value_start_skips_annealing() {
        let knapsack =
            Knapsack::from_values_weights(&[10.0, 40.0], &[5.0, 4.0], 0.0).unwrap();
        let config = SaConfig::default().with_seed(1);
        let result = SaRunner::run(&knapsack, &config).unwrap();
        assert_eq!(result.temperature_levels, 0);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_runs_until_temperature_floor() {
        let knapsack = scenario();
        for seed in 0..10 {
            let config = SaConfig::default()
                .with_iterations_per_temperature(50)
                .with_seed(seed);
            let result = SaRunner::run(&knapsack, &config).unwrap();
            if result.initial_temperature >= 0.1 {
                assert!(result.final_temperature < 0.1);
                assert!(result.temperature_levels > 1);
                assert_eq!(result.iterations, 50 * result.temperature_levels);
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let knapsack = scenario();
        let config = SaConfig::default().with_iterations_per_temperature(0);
        assert!(matches!(
            SaRunner::run(&knapsack, &config),
            Err(KnapsackError::Configuration(_))
        ));
    }

    #[test]
    fn test_each_level_cools_within_range() {
        let knapsack = scenario();
        let config = SaConfig::default()
            .with_cooling_range(0.5, 0.6)
            .with_iterations_per_temperature(20)
            .with_seed(8);
        let result = SaRunner::run(&knapsack, &config).unwrap();
        assert!(result.temperature_levels > 0);
        let levels = result.temperature_levels as i32;
        assert!(result.final_temperature >= result.initial_temperature * 0.5f64.powi(levels));
        assert!(result.final_temperature < result.initial_temperature * 0.6f64.powi(levels));
    }

    // ---- Acceptance on a controlled problem ----

    /// Walks on the integers; every neighbor loses exactly `step` value.
    struct Downhill {
        start: f64,
        step: f64,
    }

    #[derive(Clone)]
    struct Level(f64);

    impl fmt::Display for Level {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl LocalSearchProblem for Downhill {
        type Solution = Level;

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Level {
            Level(self.start)
        }

        fn value(&self, s: &Level) -> f64 {
            s.0
        }

        fn neighbor<R: Rng>(&self, s: &Level, _rng: &mut R) -> Level {
            Level(s.0 - self.step)
        }
    }

    #[test]
    fn test_worse_moves_rarely_accepted_when_cold() {
        // T starts at 0.4 * 10 = 4; a loss of 1000 gives exp(-250), never drawn.
        let problem = Downhill {
            start: 10.0,
            step: 1000.0,
        };
        let config = SaConfig::default()
            .with_iterations_per_temperature(50)
            .with_seed(3);
        let result = SaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.improving_moves, 0);
        assert_eq!(result.value, 10.0);
    }

    #[test]
    fn test_worse_moves_sometimes_accepted_when_hot() {
        // Loss 0.01 against T >= 0.1 gives probability > 0.9.
        let problem = Downhill {
            start: 1000.0,
            step: 0.01,
        };
        let config = SaConfig::default()
            .with_iterations_per_temperature(100)
            .with_seed(3);
        let result = SaRunner::run(&problem, &config).unwrap();
        assert!(result.accepted_moves > result.iterations / 2);
        assert!(result.value < 1000.0);
        assert_eq!(result.improving_moves, 0);
    }
}
