//! Core trait shared by the single-solution strategies.

use rand::Rng;
use std::fmt;

/// A maximization problem explored through a random neighborhood.
///
/// The user implements the initial draw, the objective and the neighbor
/// move. Hill-climbing and simulated annealing handle acceptance and
/// iteration control.
///
/// # Maximization
///
/// Higher [`value`](LocalSearchProblem::value) is better.
///
/// # Examples
///
/// ```ignore
/// struct CountOnes { n: usize }
///
/// impl LocalSearchProblem for CountOnes {
///     type Solution = BitVec;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> BitVec {
///         BitVec((0..self.n).map(|_| rng.random_bool(0.5)).collect())
///     }
///
///     fn value(&self, bits: &BitVec) -> f64 {
///         bits.0.iter().filter(|&&b| b).count() as f64
///     }
///
///     fn neighbor<R: Rng>(&self, bits: &BitVec, rng: &mut R) -> BitVec {
///         let mut next = bits.clone();
///         let i = rng.random_range(0..self.n);
///         next.0[i] = !next.0[i];
///         next
///     }
/// }
/// ```
pub trait LocalSearchProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + fmt::Display;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Objective value of a solution. Higher is better.
    fn value(&self, solution: &Self::Solution) -> f64;

    /// Generates one neighbor of `solution`.
    ///
    /// May return a copy of `solution` when the sampled move is rejected.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;

    /// Human-readable rendering used for trace lines.
    fn describe(&self, solution: &Self::Solution) -> String {
        solution.to_string()
    }
}
