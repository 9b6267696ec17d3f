//! Objective evaluation.

use super::item::Item;

/// Total value and weight of a set of items.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub value: f64,
    pub weight: f64,
}

/// Sums value and weight over `items`.
///
/// Total over any finite sequence; the empty sequence evaluates to
/// `{value: 0, weight: 0}`.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::knapsack::{evaluate, Item};
///
/// let eval = evaluate(&[Item::new(0, 40.0, 4.0), Item::new(1, 50.0, 3.0)]);
/// assert_eq!(eval.value, 90.0);
/// assert_eq!(eval.weight, 7.0);
/// ```
pub fn evaluate<'a, I>(items: I) -> Evaluation
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .fold(Evaluation::default(), |acc, item| Evaluation {
            value: acc.value + item.value,
            weight: acc.weight + item.weight,
        })
}
