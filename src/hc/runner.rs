//! HC execution loop.

use super::config::HcConfig;
use super::trace::{NullSink, TraceSink};
use crate::error::{KnapsackError, Result};
use crate::random::rng_for;
use crate::search::LocalSearchProblem;
use rand::Rng;
use tracing::{debug, info, trace};

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HcResult<S: Clone> {
    /// Final solution of the winning restart.
    ///
    /// Acceptance never lowers the value, so this is also the highest-valued
    /// solution that walk visited.
    pub solution: S,

    /// Value of `solution`.
    pub value: f64,

    /// Every solution accepted by the winning restart, in order.
    pub trace: Vec<S>,

    /// Index of the winning restart.
    pub restart: usize,

    /// Final value of each restart.
    pub restart_values: Vec<f64>,

    /// Total neighbor proposals across all restarts.
    pub iterations: usize,

    /// Accepted moves across all restarts (including ties).
    pub accepted_moves: usize,

    /// Strictly improving moves across all restarts.
    pub improving_moves: usize,
}

impl<S: Clone> HcResult<S> {
    /// Highest-valued entry of the trace, first seen on ties.
    pub fn best_in_trace<F: Fn(&S) -> f64>(&self, value: F) -> Option<&S> {
        let mut best: Option<(&S, f64)> = None;
        for s in &self.trace {
            let v = value(s);
            if best.is_none_or(|(_, bv)| v > bv) {
                best = Some((s, v));
            }
        }
        best.map(|(s, _)| s)
    }
}

/// One walk from one initial solution.
struct Walk<S> {
    current: S,
    value: f64,
    trace: Vec<S>,
    accepted: usize,
    improving: usize,
}

/// Executes random-restart hill-climbing.
pub struct HcRunner;

impl HcRunner {
    /// Runs HC with a generator seeded from `config.seed` and no trace sink.
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        config: &HcConfig,
    ) -> Result<HcResult<P::Solution>> {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(problem, config, &mut rng, &mut NullSink)
    }

    /// Runs HC with an explicit generator and trace sink.
    ///
    /// `config.seed` is ignored; the caller owns the random stream.
    ///
    /// # Errors
    /// Returns a configuration error if `config` is invalid. Validation
    /// happens before any solution is drawn.
    pub fn run_with_rng<P, R, T>(
        problem: &P,
        config: &HcConfig,
        rng: &mut R,
        sink: &mut T,
    ) -> Result<HcResult<P::Solution>>
    where
        P: LocalSearchProblem,
        R: Rng,
        T: TraceSink + ?Sized,
    {
        config.validate()?;
        info!(
            iterations = config.iterations,
            restarts = config.restarts,
            "hill-climbing started"
        );

        let mut restart_values = Vec::with_capacity(config.restarts);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut winner: Option<(usize, Walk<P::Solution>)> = None;

        for restart in 0..config.restarts {
            let walk = climb(problem, config.iterations, restart, rng, sink);
            debug!(restart, value = walk.value, accepted = walk.accepted, "restart finished");

            restart_values.push(walk.value);
            accepted_moves += walk.accepted;
            improving_moves += walk.improving;

            if winner.as_ref().is_none_or(|(_, best)| walk.value > best.value) {
                winner = Some((restart, walk));
            }
        }

        let Some((restart, walk)) = winner else {
            return Err(KnapsackError::config("restarts must be at least 1"));
        };

        info!(value = walk.value, restart, "hill-climbing finished");

        Ok(HcResult {
            solution: walk.current,
            value: walk.value,
            trace: walk.trace,
            restart,
            restart_values,
            iterations: config.total_iterations(),
            accepted_moves,
            improving_moves,
        })
    }
}

fn climb<P, R, T>(
    problem: &P,
    iterations: usize,
    restart: usize,
    rng: &mut R,
    sink: &mut T,
) -> Walk<P::Solution>
where
    P: LocalSearchProblem,
    R: Rng,
    T: TraceSink + ?Sized,
{
    let mut current = problem.initial_solution(rng);
    let mut value = problem.value(&current);
    let mut trace = Vec::new();
    let mut accepted = 0usize;
    let mut improving = 0usize;

    if sink.enabled() {
        sink.line(&format!(
            "restart {}: initial {}",
            restart + 1,
            problem.describe(&current)
        ));
    }

    for i in 0..iterations {
        let candidate = problem.neighbor(&current, rng);
        let candidate_value = problem.value(&candidate);
        let accept = candidate_value >= value;

        if sink.enabled() {
            let mut line = format!(
                "{}.- candidate {} vs current {}",
                i + 1,
                problem.describe(&candidate),
                problem.describe(&current)
            );
            if accept {
                line.push_str(" --> accepted");
            }
            sink.line(&line);
        }

        if accept {
            trace!(iteration = i, value = candidate_value, "move accepted");
            if candidate_value > value {
                improving += 1;
            }
            accepted += 1;
            trace.push(candidate.clone());
            current = candidate;
            value = candidate_value;
        }
    }

    Walk {
        current,
        value,
        trace,
        accepted,
        improving,
    }
}
