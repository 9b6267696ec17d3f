//! Local-search metaheuristics for the 0/1 knapsack problem.
//!
//! Choose a subset of weighted, valued items that maximizes total value
//! without exceeding a capacity. Three interchangeable strategies share one
//! problem model:
//!
//! - **Hill-Climbing (HC)**: random-restart climbing over single-bit flips,
//!   accepting any candidate at least as good as the current solution.
//! - **Simulated Annealing (SA)**: the same neighborhood with a Metropolis
//!   acceptance rule and a randomized cooling schedule.
//! - **Genetic Algorithm (GA)**: an adapter that drives any engine
//!   implementing [`ga::GaEngine`], with a bundled elitist engine.
//!
//! A small [`continuous`] module climbs a one-dimensional real function and
//! samples its curve for plotting.
//!
//! # Architecture
//!
//! [`knapsack`] owns the model (items, solutions, feasibility). HC and SA
//! are generic over [`search::LocalSearchProblem`], which the knapsack
//! implements. Every run takes an explicit random generator, so identical
//! seeds replay identical runs. [`solve`] gives all three strategies one
//! call shape that returns a [`knapsack::Packing`].

pub mod continuous;
pub mod error;
pub mod ga;
pub mod hc;
pub mod knapsack;
pub mod random;
pub mod sa;
pub mod search;
mod solve;

pub use error::{KnapsackError, Result};
pub use solve::{solve, solve_with_rng, Strategy};
