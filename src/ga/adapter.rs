//! Knapsack adapter for population engines.
//!
//! Chromosomes are inclusion vectors (`1` = packed). Overweight
//! chromosomes score `-inf`, so any feasible individual dominates them.
//! The initial population comes from the knapsack's random feasible draw.

use super::config::GaConfig;
use super::engine::{EngineRequest, GaEngine};
use super::runner::GeneticEngine;
use crate::error::{KnapsackError, Result};
use crate::knapsack::{Knapsack, Packing};
use crate::random::rng_for;
use rand::Rng;
use tracing::info;

/// Gene bounds used for knapsack chromosomes.
pub const BINARY_GENES: (u8, u8) = (0, 1);

/// Result of a GA run on a knapsack.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Packing decoded from the engine's optimal chromosome, with weight
    /// and value recomputed from the catalog.
    pub packing: Packing,

    /// Optimal fitness as reported by the engine.
    pub engine_fitness: f64,

    /// Generations the engine executed.
    pub generations: usize,

    /// Whether the engine stopped for lack of improvement.
    pub stagnated: bool,

    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Runs a [`GaEngine`] against a [`Knapsack`].
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::ga::{GaConfig, KnapsackGa};
/// use knapsack_metaheur::knapsack::Knapsack;
///
/// let knapsack = Knapsack::from_values_weights(
///     &[10.0, 40.0, 30.0, 50.0],
///     &[5.0, 4.0, 6.0, 3.0],
///     10.0,
/// ).unwrap();
/// let config = GaConfig::default().with_population_size(20).with_seed(42);
///
/// let result = KnapsackGa::new(&knapsack).run(&config).unwrap();
/// assert!(result.packing.weight <= 10.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KnapsackGa<'a> {
    knapsack: &'a Knapsack,
}

impl<'a> KnapsackGa<'a> {
    pub fn new(knapsack: &'a Knapsack) -> Self {
        Self { knapsack }
    }

    /// Total value of the packing a chromosome encodes, or `-inf` if it
    /// exceeds the capacity.
    ///
    /// Gene `i == 1` packs item `i`; genes past the catalog are ignored.
    pub fn fitness(&self, chromosome: &[u8]) -> f64 {
        let (value, weight) = self
            .knapsack
            .catalog()
            .items()
            .iter()
            .zip(chromosome)
            .filter(|(_, gene)| **gene == 1)
            .fold((0.0, 0.0), |(v, w), (item, _)| {
                (v + item.value, w + item.weight)
            });

        if weight > self.knapsack.capacity() {
            f64::NEG_INFINITY
        } else {
            value
        }
    }

    /// Runs the bundled [`GeneticEngine`] with a generator seeded from
    /// `config.seed`.
    pub fn run(&self, config: &GaConfig) -> Result<GaResult> {
        let mut rng = rng_for(config.seed);
        self.run_with_rng(config, &mut rng)
    }

    /// Runs the bundled [`GeneticEngine`] with an explicit generator.
    pub fn run_with_rng<R: Rng>(&self, config: &GaConfig, rng: &mut R) -> Result<GaResult> {
        config.validate()?;
        let engine = GeneticEngine::from_config(config);
        self.run_with_engine(&engine, config.population_size, config.max_generations, rng)
    }

    /// Runs any engine that honors the [`GaEngine`] contract.
    ///
    /// # Errors
    /// Returns [`KnapsackError::Configuration`] for a non-positive budget
    /// and [`KnapsackError::EngineContract`] if the engine returns a
    /// chromosome of the wrong length or one that overflows the capacity.
    pub fn run_with_engine<E: GaEngine, R: Rng>(
        &self,
        engine: &E,
        population_size: usize,
        generations: usize,
        rng: &mut R,
    ) -> Result<GaResult> {
        let request = EngineRequest {
            population_size,
            chromosome_length: self.knapsack.len(),
            gene_bounds: BINARY_GENES,
            generations,
        };
        request.validate()?;

        let knapsack = self.knapsack;
        let outcome = engine.optimize(
            &request,
            |rng: &mut R| knapsack.initial_solution(rng).bits(),
            |chromosome: &[u8]| self.fitness(chromosome),
            rng,
        )?;

        if outcome.chromosome.len() != knapsack.len() {
            return Err(KnapsackError::EngineContract(format!(
                "optimal chromosome has {} genes, catalog has {} items",
                outcome.chromosome.len(),
                knapsack.len()
            )));
        }

        let inclusion: Vec<bool> = outcome.chromosome.iter().map(|&g| g == 1).collect();
        let solution = knapsack.solution(inclusion).map_err(|err| {
            KnapsackError::EngineContract(format!("optimal chromosome rejected: {err}"))
        })?;
        let packing = solution.into_packing();

        info!(
            value = packing.value,
            weight = packing.weight,
            engine_fitness = outcome.fitness,
            "genetic adapter finished"
        );

        Ok(GaResult {
            packing,
            engine_fitness: outcome.fitness,
            generations: outcome.generations,
            stagnated: outcome.stagnated,
            fitness_history: outcome.fitness_history,
        })
    }
}
