//! Solution representation and the strategy result shape.

use super::evaluate::{evaluate, Evaluation};
use super::item::{Catalog, Item};
use std::fmt;

/// A candidate packing: an inclusion vector paired with the items it selects.
///
/// Both halves are derived together when the solution is built and the type
/// has no mutators, so `subset` always holds exactly the items whose bit is
/// set. Moving to a neighbor builds a new `Solution`; nothing is ever
/// modified in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    inclusion: Vec<bool>,
    subset: Vec<Item>,
}

impl Solution {
    /// Derives the subset for `inclusion` against `catalog`.
    ///
    /// Feasibility is the caller's responsibility; see
    /// [`Knapsack::solution`](super::Knapsack::solution) for the checked
    /// public entry point.
    pub(crate) fn from_inclusion(catalog: &Catalog, inclusion: Vec<bool>) -> Self {
        debug_assert_eq!(inclusion.len(), catalog.len());
        let subset = catalog
            .items()
            .iter()
            .zip(&inclusion)
            .filter(|(_, included)| **included)
            .map(|(item, _)| *item)
            .collect();
        Self { inclusion, subset }
    }

    /// The empty packing for `catalog`.
    pub(crate) fn empty(catalog: &Catalog) -> Self {
        Self {
            inclusion: vec![false; catalog.len()],
            subset: Vec::new(),
        }
    }

    /// One bit per catalog item; `true` means packed.
    pub fn inclusion(&self) -> &[bool] {
        &self.inclusion
    }

    /// The packed items, in catalog order.
    pub fn subset(&self) -> &[Item] {
        &self.subset
    }

    /// Whether item `index` is packed.
    pub fn contains(&self, index: usize) -> bool {
        self.inclusion.get(index).copied().unwrap_or(false)
    }

    /// Total value and weight of the packed items.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(&self.subset)
    }

    pub fn value(&self) -> f64 {
        self.evaluation().value
    }

    pub fn weight(&self) -> f64 {
        self.evaluation().weight
    }

    /// Inclusion vector as `0`/`1` genes.
    pub fn bits(&self) -> Vec<u8> {
        self.inclusion.iter().map(|&b| u8::from(b)).collect()
    }

    /// Converts into the result shape returned by strategies.
    pub fn into_packing(self) -> Packing {
        let Evaluation { value, weight } = self.evaluation();
        Packing {
            items: self.subset,
            inclusion: self.inclusion,
            weight,
            value,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, &bit) in self.inclusion.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u8::from(bit))?;
        }
        write!(f, "]")
    }
}

/// Final answer of a strategy run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packing {
    /// Packed items, in catalog order.
    pub items: Vec<Item>,
    /// One bit per catalog item.
    pub inclusion: Vec<bool>,
    /// Total weight of `items`.
    pub weight: f64,
    /// Total value of `items`.
    pub value: f64,
}

impl Packing {
    /// Ids of the packed items.
    pub fn item_ids(&self) -> Vec<usize> {
        self.items.iter().map(|item| item.id).collect()
    }
}

impl From<Solution> for Packing {
    fn from(solution: Solution) -> Self {
        solution.into_packing()
    }
}
