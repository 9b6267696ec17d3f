//! Hill-climbing on a one-dimensional real function.
//!
//! Each iteration samples a fresh point uniformly inside the bounds and
//! moves there when the objective is no higher (minimization). The
//! accepted points are kept so a plotting front end can overlay them on
//! the sampled [`curve`].

mod config;
mod runner;

pub use config::ContinuousConfig;
pub use runner::{curve, ContinuousResult, ContinuousRunner, DEFAULT_STEP, MAX_CURVE_POINTS};
