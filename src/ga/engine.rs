//! The population-engine contract.
//!
//! The knapsack adapter talks to any optimizer through [`GaEngine`]: it
//! hands over the population shape, a seeding function and a fitness
//! function, and receives the best chromosome found. [`GeneticEngine`]
//! is the bundled implementation; others can be swapped in.
//!
//! [`GeneticEngine`]: super::GeneticEngine

use crate::error::{KnapsackError, Result};
use rand::Rng;

/// Chromosome: one integer gene per decision variable.
pub type Chromosome = Vec<u8>;

/// What the engine is asked to optimize.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineRequest {
    /// Individuals per generation.
    pub population_size: usize,
    /// Genes per chromosome.
    pub chromosome_length: usize,
    /// Inclusive `[lower, upper]` bounds shared by every gene.
    pub gene_bounds: (u8, u8),
    /// Generation budget.
    pub generations: usize,
}

impl EngineRequest {
    /// Validates the request shape.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(KnapsackError::config("population_size must be positive"));
        }
        if self.chromosome_length == 0 {
            return Err(KnapsackError::config("chromosome_length must be positive"));
        }
        if self.generations == 0 {
            return Err(KnapsackError::config("generations must be positive"));
        }
        let (lower, upper) = self.gene_bounds;
        if lower > upper {
            return Err(KnapsackError::config(format!(
                "gene bounds [{lower}, {upper}] are inverted"
            )));
        }
        Ok(())
    }
}

/// Best individual reported by an engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutcome {
    /// The optimal chromosome found.
    pub chromosome: Chromosome,
    /// Its fitness (higher is better).
    pub fitness: f64,
    /// Generations actually executed.
    pub generations: usize,
    /// Whether the run stopped early for lack of improvement.
    pub stagnated: bool,
    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// A population-based maximizer.
///
/// Implementations own crossover, mutation and selection. Callers rely
/// only on this contract:
///
/// - the initial population is drawn with `seed`
/// - every fitness value comes from `fitness`
/// - the returned chromosome is the best one ever evaluated
pub trait GaEngine {
    /// Runs the optimizer.
    ///
    /// # Errors
    /// Returns a configuration error for an invalid request or a seeding
    /// function that produces chromosomes of the wrong length.
    fn optimize<R, S, F>(
        &self,
        request: &EngineRequest,
        seed: S,
        fitness: F,
        rng: &mut R,
    ) -> Result<EngineOutcome>
    where
        R: Rng,
        S: FnMut(&mut R) -> Chromosome,
        F: Fn(&[u8]) -> f64 + Sync;
}
