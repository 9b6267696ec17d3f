//! A knapsack instance: catalog plus capacity.
//!
//! Owns the two random operators every strategy is built on: the initial
//! feasible draw and the single-bit-flip neighbor.

use super::item::Catalog;
use super::solution::Solution;
use crate::error::{KnapsackError, Result};
use crate::search::LocalSearchProblem;
use rand::Rng;
use tracing::trace;

/// 0/1 knapsack problem instance.
///
/// The catalog is immutable after construction, so a `Knapsack` can be
/// shared by reference between independent runs.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::knapsack::{Catalog, Knapsack};
/// use knapsack_metaheur::random::create_rng;
///
/// let values = [10.0, 40.0, 30.0, 50.0];
/// let weights = [5.0, 4.0, 6.0, 3.0];
/// let catalog = Catalog::from_values_weights(&values, &weights).unwrap();
/// let knapsack = Knapsack::new(catalog, 10.0).unwrap();
///
/// let mut rng = create_rng(42);
/// let start = knapsack.initial_solution(&mut rng);
/// assert!(start.weight() <= 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct Knapsack {
    catalog: Catalog,
    capacity: f64,
}

impl Knapsack {
    /// Creates an instance.
    ///
    /// # Errors
    /// Returns [`KnapsackError::Configuration`] if the catalog is empty or
    /// the capacity is negative or non-finite.
    pub fn new(catalog: Catalog, capacity: f64) -> Result<Self> {
        if catalog.is_empty() {
            return Err(KnapsackError::config("catalog must contain at least one item"));
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(KnapsackError::config(format!(
                "capacity must be finite and non-negative, got {capacity}"
            )));
        }
        Ok(Self { catalog, capacity })
    }

    /// Convenience constructor from parallel value/weight lists.
    pub fn from_values_weights(values: &[f64], weights: &[f64], capacity: f64) -> Result<Self> {
        Self::new(Catalog::from_values_weights(values, weights)?, capacity)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of items (and inclusion-vector length).
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Whether `inclusion` fits within the capacity.
    pub fn is_feasible(&self, inclusion: &[bool]) -> bool {
        self.catalog.weight_of(inclusion) <= self.capacity
    }

    /// Builds a solution from an explicit inclusion vector.
    ///
    /// # Errors
    /// Returns [`KnapsackError::Configuration`] if the vector length does
    /// not match the catalog or the packing exceeds the capacity.
    pub fn solution(&self, inclusion: Vec<bool>) -> Result<Solution> {
        if inclusion.len() != self.len() {
            return Err(KnapsackError::config(format!(
                "inclusion vector has {} bits, catalog has {} items",
                inclusion.len(),
                self.len()
            )));
        }
        if !self.is_feasible(&inclusion) {
            return Err(KnapsackError::config(format!(
                "packing weighs {} which exceeds capacity {}",
                self.catalog.weight_of(&inclusion),
                self.capacity
            )));
        }
        Ok(Solution::from_inclusion(&self.catalog, inclusion))
    }

    /// Random feasible starting point.
    ///
    /// Draws item indices uniformly and packs each one until the first draw
    /// that would overflow the capacity; that draw is discarded and the loop
    /// ends. Redrawing an already packed item changes nothing. The loop also
    /// ends once every item is packed, which happens when the whole catalog
    /// fits.
    ///
    /// The result is feasible but not necessarily weight-maximal.
    pub fn initial_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        let n = self.len();
        let mut inclusion = vec![false; n];
        let mut packed = 0usize;

        while packed < n {
            let index = rng.random_range(0..n);
            if inclusion[index] {
                continue;
            }
            inclusion[index] = true;
            if self.catalog.weight_of(&inclusion) > self.capacity {
                inclusion[index] = false;
                break;
            }
            packed += 1;
        }

        Solution::from_inclusion(&self.catalog, inclusion)
    }

    /// Single-bit-flip neighbor of `solution`.
    ///
    /// Picks one index uniformly and toggles it. If the flipped vector
    /// overflows the capacity the flip is rejected and `solution` is returned
    /// unchanged; no other index is tried.
    pub fn neighbor<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Solution {
        let index = rng.random_range(0..self.len());
        let mut inclusion = solution.inclusion().to_vec();
        inclusion[index] = !inclusion[index];

        if self.is_feasible(&inclusion) {
            Solution::from_inclusion(&self.catalog, inclusion)
        } else {
            trace!(index, "flip rejected: capacity exceeded");
            solution.clone()
        }
    }
}

impl LocalSearchProblem for Knapsack {
    type Solution = Solution;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        Knapsack::initial_solution(self, rng)
    }

    fn value(&self, solution: &Solution) -> f64 {
        solution.value()
    }

    fn neighbor<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Solution {
        Knapsack::neighbor(self, solution, rng)
    }

    fn describe(&self, solution: &Solution) -> String {
        let eval = solution.evaluation();
        format!("{solution} weight {} value {}", eval.weight, eval.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn scenario() -> Knapsack {
        Knapsack::from_values_weights(&[10.0, 40.0, 30.0, 50.0], &[5.0, 4.0, 6.0, 3.0], 10.0)
            .unwrap()
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let err = Knapsack::new(Catalog::default(), 10.0).unwrap_err();
        assert!(matches!(err, KnapsackError::Configuration(_)));
    }

    #[test]
    fn test_rejects_negative_capacity() {
        let catalog = Catalog::from_values_weights(&[1.0], &[1.0]).unwrap();
        assert!(Knapsack::new(catalog.clone(), -1.0).is_err());
        assert!(Knapsack::new(catalog, f64::NAN).is_err());
    }

    #[test]
    fn test_initial_solution_feasible() {
        let knapsack = scenario();
        for seed in 0..200 {
            let mut rng = create_rng(seed);
            let sol = knapsack.initial_solution(&mut rng);
            assert!(sol.weight() <= knapsack.capacity(), "seed {seed}: {sol}");
            assert!(!sol.subset().is_empty(), "every item fits alone, first draw commits");
        }
    }

    #[test]
    fn test_initial_solution_zero_capacity() {
        let knapsack =
            Knapsack::from_values_weights(&[10.0, 40.0, 30.0], &[5.0, 4.0, 6.0], 0.0).unwrap();
        let mut rng = create_rng(1);
        let sol = knapsack.initial_solution(&mut rng);
        assert!(sol.subset().is_empty());
        assert_eq!(sol.value(), 0.0);
        assert_eq!(sol.weight(), 0.0);
    }

    #[test]
    fn test_initial_solution_single_heavy_item() {
        let knapsack = Knapsack::from_values_weights(&[5.0], &[20.0], 10.0).unwrap();
        let mut rng = create_rng(3);
        let sol = knapsack.initial_solution(&mut rng);
        assert_eq!(sol.inclusion(), &[false]);
    }

    #[test]
    fn test_initial_solution_everything_fits() {
        let knapsack =
            Knapsack::from_values_weights(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0], 100.0).unwrap();
        let mut rng = create_rng(5);
        let sol = knapsack.initial_solution(&mut rng);
        assert_eq!(sol.inclusion(), &[true, true, true]);
    }

    #[test]
    fn test_initial_solution_zero_weights_zero_capacity() {
        let knapsack = Knapsack::from_values_weights(&[1.0, 2.0], &[0.0, 0.0], 0.0).unwrap();
        let mut rng = create_rng(5);
        let sol = knapsack.initial_solution(&mut rng);
        assert_eq!(sol.value(), 3.0);
    }

    #[test]
    fn test_neighbor_flips_at_most_one_bit() {
        let knapsack = scenario();
        let mut rng = create_rng(11);
        let mut current = knapsack.initial_solution(&mut rng);
        for _ in 0..500 {
            let next = knapsack.neighbor(&current, &mut rng);
            let diff = current
                .inclusion()
                .iter()
                .zip(next.inclusion())
                .filter(|(a, b)| a != b)
                .count();
            assert!(diff <= 1);
            assert!(next.weight() <= knapsack.capacity());
            current = next;
        }
    }

    #[test]
    fn test_neighbor_rejects_overflow() {
        // Item 1 alone fills the knapsack; any flip-in overflows.
        let knapsack = Knapsack::from_values_weights(&[1.0, 9.0], &[5.0, 10.0], 10.0).unwrap();
        let full = knapsack.solution(vec![false, true]).unwrap();
        let mut rng = create_rng(2);
        for _ in 0..50 {
            let next = knapsack.neighbor(&full, &mut rng);
            assert!(next == full || next.inclusion() == [false, false]);
        }
    }

    #[test]
    fn test_solution_checks() {
        let knapsack = scenario();
        assert!(knapsack.solution(vec![true, true]).is_err());
        assert!(knapsack.solution(vec![true, true, true, true]).is_err());
        let sol = knapsack.solution(vec![false, true, false, true]).unwrap();
        assert_eq!(sol.value(), 90.0);
    }

    #[test]
    fn test_describe() {
        let knapsack = scenario();
        let sol = knapsack.solution(vec![false, true, false, true]).unwrap();
        assert_eq!(knapsack.describe(&sol), "[0, 1, 0, 1] weight 7 value 90");
    }
}
