//! Items and the immutable item catalog.

use crate::error::{KnapsackError, Result};
use crate::random::rng_for;
use rand::Rng;

/// A single item that may be packed.
///
/// Equality is structural: two items are equal when id, value and weight
/// all match.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Position of the item in its catalog.
    pub id: usize,
    /// Value gained by packing the item.
    pub value: f64,
    /// Weight the item contributes towards the capacity.
    pub weight: f64,
}

impl Item {
    pub fn new(id: usize, value: f64, weight: f64) -> Self {
        Self { id, value, weight }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "item {}: value {}, weight {}",
            self.id, self.value, self.weight
        )
    }
}

/// Immutable, ordered set of items with sequential ids starting at 0.
///
/// Index `i` of any inclusion vector built against this catalog refers to
/// `items()[i]`, whose id is also `i`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from parallel value and weight lists.
    ///
    /// # Errors
    /// Returns [`KnapsackError::Configuration`] if the lists differ in
    /// length or any entry is negative or non-finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_metaheur::knapsack::Catalog;
    ///
    /// let catalog = Catalog::from_values_weights(&[10.0, 40.0], &[5.0, 4.0]).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.items()[1].id, 1);
    /// ```
    pub fn from_values_weights(values: &[f64], weights: &[f64]) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(KnapsackError::config(format!(
                "values and weights differ in length: {} vs {}",
                values.len(),
                weights.len()
            )));
        }

        let items = values
            .iter()
            .zip(weights)
            .enumerate()
            .map(|(id, (&value, &weight))| {
                check_amount("value", id, value)?;
                check_amount("weight", id, weight)?;
                Ok(Item::new(id, value, weight))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { items })
    }

    /// Builds a random catalog of `count` items.
    ///
    /// Values and weights are integral draws from the half-open ranges
    /// `[lo, hi)`.
    ///
    /// # Errors
    /// Returns [`KnapsackError::Configuration`] if either range is empty.
    pub fn random<R: Rng>(
        count: usize,
        value_bounds: (u32, u32),
        weight_bounds: (u32, u32),
        rng: &mut R,
    ) -> Result<Self> {
        check_bounds("value", value_bounds)?;
        check_bounds("weight", weight_bounds)?;

        let items = (0..count)
            .map(|id| {
                let value = rng.random_range(value_bounds.0..value_bounds.1);
                let weight = rng.random_range(weight_bounds.0..weight_bounds.1);
                Item::new(id, f64::from(value), f64::from(weight))
            })
            .collect();

        Ok(Self { items })
    }

    /// All items, in id order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item with the given id, if present.
    pub fn get(&self, id: usize) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the weights selected by `inclusion`.
    pub(crate) fn weight_of(&self, inclusion: &[bool]) -> f64 {
        self.items
            .iter()
            .zip(inclusion)
            .filter(|(_, included)| **included)
            .map(|(item, _)| item.weight)
            .sum()
    }
}

fn check_amount(what: &str, id: usize, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(KnapsackError::config(format!(
            "item {id} has invalid {what} {amount}: must be finite and non-negative"
        )));
    }
    Ok(())
}

fn check_bounds(what: &str, (lo, hi): (u32, u32)) -> Result<()> {
    if lo >= hi {
        return Err(KnapsackError::config(format!(
            "{what} bounds [{lo}, {hi}) are empty"
        )));
    }
    Ok(())
}

/// Parameters for a synthetic, seeded catalog.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::knapsack::CatalogSpec;
///
/// let catalog = CatalogSpec::default().with_count(20).with_seed(1).generate().unwrap();
/// assert_eq!(catalog.len(), 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSpec {
    /// Number of items.
    pub count: usize,

    /// Half-open bounds for item values.
    pub value_bounds: (u32, u32),

    /// Half-open bounds for item weights.
    pub weight_bounds: (u32, u32),

    /// Random seed. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for CatalogSpec {
    fn default() -> Self {
        Self {
            count: 100,
            value_bounds: (1, 100),
            weight_bounds: (1, 100),
            seed: None,
        }
    }
}

impl CatalogSpec {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_value_bounds(mut self, lo: u32, hi: u32) -> Self {
        self.value_bounds = (lo, hi);
        self
    }

    pub fn with_weight_bounds(mut self, lo: u32, hi: u32) -> Self {
        self.weight_bounds = (lo, hi);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws the catalog.
    pub fn generate(&self) -> Result<Catalog> {
        let mut rng = rng_for(self.seed);
        Catalog::random(self.count, self.value_bounds, self.weight_bounds, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_sequential_ids() {
        let catalog =
            Catalog::from_values_weights(&[10.0, 40.0, 30.0], &[5.0, 4.0, 6.0]).unwrap();
        let ids: Vec<usize> = catalog.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(catalog.items()[2], Item::new(2, 30.0, 6.0));
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = Catalog::from_values_weights(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, KnapsackError::Configuration(_)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(Catalog::from_values_weights(&[1.0], &[-1.0]).is_err());
        assert!(Catalog::from_values_weights(&[f64::NAN], &[1.0]).is_err());
    }

    #[test]
    fn test_empty_lists_give_empty_catalog() {
        let catalog = Catalog::from_values_weights(&[], &[]).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_random_respects_bounds() {
        let mut rng = create_rng(42);
        let catalog = Catalog::random(200, (1, 100), (5, 10), &mut rng).unwrap();
        assert_eq!(catalog.len(), 200);
        for item in catalog.items() {
            assert!((1.0..100.0).contains(&item.value));
            assert!((5.0..10.0).contains(&item.weight));
            assert_eq!(item.value.fract(), 0.0);
        }
    }

    #[test]
    fn test_random_empty_bounds() {
        let mut rng = create_rng(42);
        assert!(Catalog::random(3, (5, 5), (1, 2), &mut rng).is_err());
    }

    #[test]
    fn test_spec_seed_reproducible() {
        let spec = CatalogSpec::default().with_count(30).with_seed(9);
        assert_eq!(spec.generate().unwrap(), spec.generate().unwrap());
    }

    #[test]
    fn test_weight_of() {
        let catalog =
            Catalog::from_values_weights(&[10.0, 40.0, 30.0], &[5.0, 4.0, 6.0]).unwrap();
        assert_eq!(catalog.weight_of(&[true, false, true]), 11.0);
        assert_eq!(catalog.weight_of(&[false, false, false]), 0.0);
    }
}
