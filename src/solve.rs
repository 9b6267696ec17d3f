//! Uniform entry point over the three strategies.

use crate::error::Result;
use crate::ga::{GaConfig, KnapsackGa};
use crate::hc::{HcConfig, HcRunner, NullSink};
use crate::knapsack::{Knapsack, Packing};
use crate::random::rng_for;
use crate::sa::{SaConfig, SaRunner};
use rand::Rng;

/// A strategy together with its budget.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    HillClimbing(HcConfig),
    SimulatedAnnealing(SaConfig),
    Genetic(GaConfig),
}

impl Strategy {
    /// Short name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::HillClimbing(_) => "hill-climbing",
            Strategy::SimulatedAnnealing(_) => "simulated-annealing",
            Strategy::Genetic(_) => "genetic",
        }
    }

    fn seed(&self) -> Option<u64> {
        match self {
            Strategy::HillClimbing(c) => c.seed,
            Strategy::SimulatedAnnealing(c) => c.seed,
            Strategy::Genetic(c) => c.seed,
        }
    }
}

/// Runs `strategy` with a generator seeded from its config.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::hc::HcConfig;
/// use knapsack_metaheur::knapsack::Knapsack;
/// use knapsack_metaheur::{solve, Strategy};
///
/// let knapsack = Knapsack::from_values_weights(
///     &[10.0, 40.0, 30.0, 50.0],
///     &[5.0, 4.0, 6.0, 3.0],
///     10.0,
/// ).unwrap();
/// let strategy = Strategy::HillClimbing(HcConfig::default().with_seed(1));
///
/// let packing = solve(&knapsack, &strategy).unwrap();
/// assert!(packing.weight <= 10.0);
/// ```
pub fn solve(knapsack: &Knapsack, strategy: &Strategy) -> Result<Packing> {
    let mut rng = rng_for(strategy.seed());
    solve_with_rng(knapsack, strategy, &mut rng)
}

/// Runs `strategy` with an explicit generator; config seeds are ignored.
///
/// # Errors
/// Returns a configuration error if the budget is invalid.
pub fn solve_with_rng<R: Rng>(
    knapsack: &Knapsack,
    strategy: &Strategy,
    rng: &mut R,
) -> Result<Packing> {
    let packing = match strategy {
        Strategy::HillClimbing(config) => {
            HcRunner::run_with_rng(knapsack, config, rng, &mut NullSink)?
                .solution
                .into_packing()
        }
        Strategy::SimulatedAnnealing(config) => {
            SaRunner::run_with_rng(knapsack, config, rng)?
                .solution
                .into_packing()
        }
        Strategy::Genetic(config) => KnapsackGa::new(knapsack).run_with_rng(config, rng)?.packing,
    };
    Ok(packing)
}
