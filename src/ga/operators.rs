//! Genetic operators for bounded integer chromosomes.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap tails after a random cut, O(n)
//!
//! # Mutation Operators
//!
//! - [`reset_mutation`]: redraw one gene inside its bounds, O(1)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, §4.2

use rand::Rng;

/// Single-point crossover.
///
/// Picks a cut point in `1..n` and exchanges the tails of both parents.
/// Parents shorter than two genes are returned unchanged.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[u8],
    parent2: &[u8],
    rng: &mut R,
) -> (Vec<u8>, Vec<u8>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let point = rng.random_range(1..n);
    let mut child1 = parent1[..point].to_vec();
    child1.extend_from_slice(&parent2[point..]);
    let mut child2 = parent2[..point].to_vec();
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Reset mutation: one random gene takes a new value in `[lower, upper]`.
///
/// The new value always differs from the old one when the bounds allow
/// more than one value, so for `[0, 1]` genes this is a bit flip.
pub fn reset_mutation<R: Rng>(genes: &mut [u8], (lower, upper): (u8, u8), rng: &mut R) {
    if genes.is_empty() || lower >= upper {
        return;
    }
    let idx = rng.random_range(0..genes.len());
    let old = genes[idx];
    // Draw from the range minus one slot, then skip over the old value.
    let mut new = rng.random_range(lower..upper);
    if (lower..=upper).contains(&old) && new >= old {
        new += 1;
    }
    genes[idx] = new;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_crossover_preserves_genes_per_position() {
        let mut rng = create_rng(42);
        let p1 = vec![0u8; 8];
        let p2 = vec![1u8; 8];
        for _ in 0..100 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.len(), 8);
            for i in 0..8 {
                assert_ne!(c1[i], c2[i], "children are complementary at {i}");
            }
            assert_eq!(c1[0], 0, "cut point is never 0");
            assert_eq!(c1[7], 1, "tail always comes from the other parent");
        }
    }

    #[test]
    fn test_crossover_single_gene() {
        let mut rng = create_rng(42);
        let (c1, c2) = single_point_crossover(&[1], &[0], &mut rng);
        assert_eq!(c1, vec![1]);
        assert_eq!(c2, vec![0]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch() {
        let mut rng = create_rng(42);
        single_point_crossover(&[1, 0], &[0], &mut rng);
    }

    #[test]
    fn test_reset_mutation_flips_binary_gene() {
        let mut rng = create_rng(7);
        for _ in 0..100 {
            let before = vec![0u8, 1, 0, 1, 1];
            let mut genes = before.clone();
            reset_mutation(&mut genes, (0, 1), &mut rng);
            let changed = before.iter().zip(&genes).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_reset_mutation_stays_in_bounds() {
        let mut rng = create_rng(7);
        let mut genes = vec![3u8; 10];
        for _ in 0..500 {
            reset_mutation(&mut genes, (2, 6), &mut rng);
            assert!(genes.iter().all(|g| (2..=6).contains(g)));
        }
    }

    #[test]
    fn test_reset_mutation_degenerate_bounds() {
        let mut rng = create_rng(7);
        let mut genes = vec![4u8; 3];
        reset_mutation(&mut genes, (4, 4), &mut rng);
        assert_eq!(genes, vec![4, 4, 4]);
    }
}
