//! The 0/1 knapsack model.
//!
//! - [`Item`] / [`Catalog`]: immutable items with sequential ids
//! - [`Solution`]: feasibility-checked inclusion vector plus derived subset
//! - [`evaluate`]: total value and weight of any item sequence
//! - [`Knapsack`]: catalog + capacity, with the initial draw and the
//!   single-bit-flip neighbor
//! - [`Packing`]: the result shape every strategy returns

mod evaluate;
mod instance;
mod item;
mod solution;

pub use evaluate::{evaluate, Evaluation};
pub use instance::Knapsack;
pub use item::{Catalog, CatalogSpec, Item};
pub use solution::{Packing, Solution};
