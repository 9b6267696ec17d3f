//! Random-restart hill-climbing (HC).
//!
//! A single-solution trajectory metaheuristic that only moves sideways or
//! uphill. Each restart draws a fresh initial solution and walks for a
//! fixed number of neighbor proposals; a candidate replaces the current
//! solution when its value is at least as high, so ties let the walk cross
//! plateaus. Restarts are the only escape from local optima.
//!
//! Progress lines can be streamed to a [`TraceSink`]; sinks are side
//! channels and never influence the search.
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*, §4.1
//! - Mitchell, Holland & Forrest (1994), "When Will a Genetic Algorithm
//!   Outperform Hill Climbing?" (random-mutation hill-climbing)

mod config;
mod runner;
mod trace;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
pub use trace::{NullSink, TraceSink, WriteSink};
