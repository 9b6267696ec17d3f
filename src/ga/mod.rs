//! Genetic Algorithm adapter and engine.
//!
//! The knapsack side only depends on the [`GaEngine`] contract: population
//! shape, a seeding function and a fitness function in, the optimal
//! chromosome out. [`KnapsackGa`] supplies the knapsack's fitness (total
//! value, `-inf` when overweight) and its random feasible draw as the
//! seeding function, then decodes the answer into a
//! [`Packing`](crate::knapsack::Packing).
//!
//! # Key Types
//!
//! - [`GaEngine`]: the engine contract
//! - [`GeneticEngine`]: bundled elitist GA implementing the contract
//! - [`GaConfig`]: algorithm parameters (population size, selection, presets)
//! - [`KnapsackGa`]: the adapter
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover and bounded reset mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod adapter;
mod config;
mod engine;
pub mod operators;
mod runner;
mod selection;

pub use adapter::{GaResult, KnapsackGa, BINARY_GENES};
pub use config::GaConfig;
pub use engine::{Chromosome, EngineOutcome, EngineRequest, GaEngine};
pub use runner::GeneticEngine;
pub use selection::Selection;
