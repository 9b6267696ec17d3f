//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Improvements are always accepted; a candidate that
//! loses value is accepted with the Metropolis probability
//! `exp(-loss / T)`, which shrinks as the temperature `T` cools.
//!
//! The starting temperature is a fraction of the initial solution's value,
//! which ties the schedule to the scale of the instance. Cooling multiplies
//! `T` by a fresh uniform factor after each level, and the run ends once
//! `T` falls below the minimum temperature.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
