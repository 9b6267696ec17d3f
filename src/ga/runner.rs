//! GA evolutionary loop execution.
//!
//! [`GeneticEngine`] orchestrates the complete evolutionary process:
//! seeding → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::engine::{Chromosome, EngineOutcome, EngineRequest, GaEngine};
use super::operators::{reset_mutation, single_point_crossover};
use super::selection::Selection;
use crate::error::{KnapsackError, Result};
use rand::Rng;
use std::cmp::Ordering;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An evaluated member of the population.
#[derive(Debug, Clone)]
struct Member {
    genes: Chromosome,
    fitness: f64,
}

/// Elitist generational GA over bounded integer chromosomes.
///
/// Maximizes fitness. Parent selection, single-point crossover and
/// one-gene reset mutation are applied each generation; the best
/// `elite_ratio` of the population survives unchanged.
///
/// # Usage
///
/// ```
/// use knapsack_metaheur::ga::{EngineRequest, GaConfig, GaEngine, GeneticEngine};
/// use knapsack_metaheur::random::create_rng;
/// use rand::rngs::StdRng;
/// use rand::Rng;
///
/// let engine = GeneticEngine::from_config(&GaConfig::default());
/// let request = EngineRequest {
///     population_size: 30,
///     chromosome_length: 12,
///     gene_bounds: (0, 1),
///     generations: 50,
/// };
/// let mut rng = create_rng(42);
/// let outcome = engine
///     .optimize(
///         &request,
///         |rng: &mut StdRng| (0..12).map(|_| rng.random_range(0..=1u8)).collect(),
///         |genes: &[u8]| genes.iter().map(|&g| f64::from(g)).sum(),
///         &mut rng,
///     )
///     .unwrap();
/// assert!(outcome.fitness >= 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticEngine {
    selection: Selection,
    elite_ratio: f64,
    crossover_rate: f64,
    mutation_rate: f64,
    stagnation_limit: usize,
    parallel: bool,
}

impl Default for GeneticEngine {
    fn default() -> Self {
        Self::from_config(&GaConfig::default())
    }
}

impl GeneticEngine {
    /// Takes the operator settings from `config`.
    ///
    /// Population size and generation count come from each
    /// [`EngineRequest`] instead.
    pub fn from_config(config: &GaConfig) -> Self {
        Self {
            selection: config.selection,
            elite_ratio: config.elite_ratio,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            stagnation_limit: config.stagnation_limit,
            parallel: config.parallel,
        }
    }

    fn elite_count(&self, population_size: usize) -> usize {
        (population_size as f64 * self.elite_ratio) as usize
    }
}

impl GaEngine for GeneticEngine {
    fn optimize<R, S, F>(
        &self,
        request: &EngineRequest,
        mut seed: S,
        fitness: F,
        rng: &mut R,
    ) -> Result<EngineOutcome>
    where
        R: Rng,
        S: FnMut(&mut R) -> Chromosome,
        F: Fn(&[u8]) -> f64 + Sync,
    {
        request.validate()?;
        let population_size = request.population_size;
        let elite_count = self.elite_count(population_size);
        if elite_count >= population_size {
            return Err(KnapsackError::config(
                "elite_ratio too high: elites fill entire population",
            ));
        }

        // 1. Seed population
        let mut population = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            let genes = seed(&mut *rng);
            if genes.len() != request.chromosome_length {
                return Err(KnapsackError::config(format!(
                    "seeding produced {} genes, expected {}",
                    genes.len(),
                    request.chromosome_length
                )));
            }
            population.push(Member {
                genes,
                fitness: f64::NEG_INFINITY,
            });
        }

        info!(
            population = population_size,
            genes = request.chromosome_length,
            generations = request.generations,
            "genetic engine started"
        );

        // 2. Evaluate initial population
        evaluate_all(&mut population, &fitness, self.parallel);

        // 3. Track best
        let mut best = population[best_index(&population)].clone();
        let mut fitness_history = Vec::with_capacity(request.generations + 1);
        fitness_history.push(best.fitness);

        let mut stagnation_counter = 0usize;
        let mut generations = 0usize;
        let mut stagnated = false;

        // 4. Evolutionary loop
        for gen in 0..request.generations {
            // Best first
            population.sort_by(|a, b| {
                b.fitness
                    .partial_cmp(&a.fitness)
                    .unwrap_or(Ordering::Equal)
            });
            let scores: Vec<f64> = population.iter().map(|m| m.fitness).collect();

            // Elite preservation
            let mut next_gen: Vec<Member> = population[..elite_count].to_vec();

            // Generate offspring
            while next_gen.len() < population_size {
                let p1 = self.selection.select(&scores, rng);
                let p2 = self.selection.select(&scores, rng);

                let children = if rng.random_range(0.0..1.0) < self.crossover_rate {
                    let (c1, c2) =
                        single_point_crossover(&population[p1].genes, &population[p2].genes, rng);
                    vec![c1, c2]
                } else {
                    vec![population[p1].genes.clone()]
                };

                for mut genes in children {
                    if next_gen.len() >= population_size {
                        break;
                    }
                    if rng.random_range(0.0..1.0) < self.mutation_rate {
                        reset_mutation(&mut genes, request.gene_bounds, rng);
                    }
                    next_gen.push(Member {
                        genes,
                        fitness: f64::NEG_INFINITY,
                    });
                }
            }

            // Elites keep their fitness
            evaluate_all(&mut next_gen[elite_count..], &fitness, self.parallel);
            population = next_gen;
            generations = gen + 1;

            let gen_best = &population[best_index(&population)];
            if gen_best.fitness > best.fitness {
                best = gen_best.clone();
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.fitness);
            debug!(generation = generations, best = best.fitness, "generation done");

            if self.stagnation_limit > 0 && stagnation_counter >= self.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        info!(best = best.fitness, generations, stagnated, "genetic engine finished");

        Ok(EngineOutcome {
            chromosome: best.genes,
            fitness: best.fitness,
            generations,
            stagnated,
            fitness_history,
        })
    }
}

/// Evaluate members in place, in parallel when enabled.
#[cfg(feature = "parallel")]
fn evaluate_all<F: Fn(&[u8]) -> f64 + Sync>(members: &mut [Member], fitness: &F, parallel: bool) {
    if parallel {
        members
            .par_iter_mut()
            .for_each(|m| m.fitness = fitness(&m.genes));
    } else {
        for m in members.iter_mut() {
            m.fitness = fitness(&m.genes);
        }
    }
}

/// Evaluate members in place.
#[cfg(not(feature = "parallel"))]
fn evaluate_all<F: Fn(&[u8]) -> f64 + Sync>(members: &mut [Member], fitness: &F, _parallel: bool) {
    for m in members.iter_mut() {
        m.fitness = fitness(&m.genes);
    }
}

/// Index of the highest-fitness member, first seen on ties.
fn best_index(population: &[Member]) -> usize {
    let mut best = 0;
    for (i, m) in population.iter().enumerate().skip(1) {
        if m.fitness > population[best].fitness {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::rngs::StdRng;

    fn request(n: usize, bounds: (u8, u8)) -> EngineRequest {
        EngineRequest {
            population_size: 40,
            chromosome_length: n,
            gene_bounds: bounds,
            generations: 150,
        }
    }

    fn random_bits(n: usize) -> impl FnMut(&mut StdRng) -> Chromosome {
        move |rng: &mut StdRng| (0..n).map(|_| rng.random_range(0..=1u8)).collect()
    }

    fn ones(genes: &[u8]) -> f64 {
        genes.iter().map(|&g| f64::from(g)).sum()
    }

    #[test]
    fn test_onemax_convergence() {
        let engine = GeneticEngine::from_config(
            &GaConfig::default()
                .with_mutation_rate(0.3)
                .with_stagnation_limit(0),
        );
        let mut rng = create_rng(42);
        let outcome = engine
            .optimize(&request(20, (0, 1)), random_bits(20), ones, &mut rng)
            .unwrap();

        assert!(
            outcome.fitness >= 17.0,
            "expected fitness >= 17 for 20-bit OneMax, got {}",
            outcome.fitness
        );
        assert_eq!(outcome.fitness, ones(&outcome.chromosome));
        assert_eq!(outcome.generations, 150);
    }

    #[test]
    fn test_bounded_genes_reach_upper_bound() {
        let engine = GeneticEngine::from_config(
            &GaConfig::default()
                .with_mutation_rate(0.5)
                .with_stagnation_limit(0),
        );
        let mut rng = create_rng(3);
        let outcome = engine
            .optimize(
                &request(6, (0, 3)),
                |rng: &mut StdRng| (0..6).map(|_| rng.random_range(0..=3u8)).collect(),
                ones,
                &mut rng,
            )
            .unwrap();

        assert!(outcome.chromosome.iter().all(|&g| g <= 3));
        assert!(outcome.fitness >= 15.0, "got {}", outcome.fitness);
    }

    #[test]
    fn test_stagnation_termination() {
        let engine =
            GeneticEngine::from_config(&GaConfig::default().with_stagnation_limit(10));
        let mut rng = create_rng(42);
        let mut req = request(5, (0, 1));
        req.generations = 1000;
        let outcome = engine.optimize(&req, random_bits(5), ones, &mut rng).unwrap();

        assert!(outcome.stagnated);
        assert!(outcome.generations < 1000);
        assert_eq!(outcome.fitness_history.len(), outcome.generations + 1);
    }

    #[test]
    fn test_elite_history_non_decreasing() {
        let engine = GeneticEngine::from_config(&GaConfig::default().with_elite_ratio(0.2));
        let mut rng = create_rng(42);
        let outcome = engine
            .optimize(&request(10, (0, 1)), random_bits(10), ones, &mut rng)
            .unwrap();

        for window in outcome.fitness_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_infeasible_never_beats_feasible() {
        // Anything with more than three ones is infeasible.
        let capped = |genes: &[u8]| {
            let s = ones(genes);
            if s > 3.0 {
                f64::NEG_INFINITY
            } else {
                s
            }
        };
        let engine = GeneticEngine::default();
        let mut rng = create_rng(11);
        let outcome = engine
            .optimize(
                &request(10, (0, 1)),
                |_: &mut StdRng| vec![0u8; 10],
                capped,
                &mut rng,
            )
            .unwrap();

        assert!(outcome.fitness.is_finite());
        assert!(ones(&outcome.chromosome) <= 3.0);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let engine = GeneticEngine::default();
        let run = |seed| {
            let mut rng = create_rng(seed);
            engine
                .optimize(&request(16, (0, 1)), random_bits(16), ones, &mut rng)
                .unwrap()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn test_seed_length_mismatch() {
        let engine = GeneticEngine::default();
        let mut rng = create_rng(1);
        let err = engine
            .optimize(&request(8, (0, 1)), random_bits(7), ones, &mut rng)
            .unwrap_err();
        assert!(matches!(err, KnapsackError::Configuration(_)));
    }

    #[test]
    fn test_elites_fill_population() {
        let engine = GeneticEngine::from_config(&GaConfig::default().with_elite_ratio(1.0));
        let mut rng = create_rng(1);
        assert!(engine
            .optimize(&request(8, (0, 1)), random_bits(8), ones, &mut rng)
            .is_err());
    }

    #[test]
    fn test_all_selection_strategies() {
        for selection in [Selection::Tournament(3), Selection::Roulette, Selection::Rank] {
            let engine =
                GeneticEngine::from_config(&GaConfig::default().with_selection(selection));
            let mut rng = create_rng(42);
            let outcome = engine
                .optimize(&request(10, (0, 1)), random_bits(10), ones, &mut rng)
                .unwrap();
            assert!(
                outcome.fitness >= 8.0,
                "selection {selection:?} got {}",
                outcome.fitness
            );
        }
    }
}
