//! Dispatcher / runner (§4.J): maps a strategy name to its entry point,
//! times the call with a monotonic clock, and validates `|result| == n`.
//!
//! Writing the result colouring and appending a metrics row are handled by
//! the caller (the CLI binary), per §6: the dispatcher is core, the DIMACS
//! writer and metrics appender are external collaborators.

use std::time::Instant;

use crate::coloring::Coloring;
use crate::config::CoreConfig;
use crate::error::{GraphColorError, Result};
use crate::graph::Graph;
use crate::snapshot::SnapshotSink;
use crate::strategies::common::make_rng;
use crate::strategies::dsatur::dsatur;
use crate::strategies::exact::exact_solver;
use crate::strategies::genetic::genetic;
use crate::strategies::simulated_annealing::simulated_annealing;
use crate::strategies::tabu::tabu_search;
use crate::strategies::welsh_powell::welsh_powell;

/// The closed set of strategy names the dispatcher accepts (§4.J).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    WelshPowell,
    Dsatur,
    TabuSearch,
    SimulatedAnnealing,
    Genetic,
    ExactSolver,
}

impl Strategy {
    /// Parses a case-sensitive strategy name, as it appears on the CLI and
    /// in the metrics CSV's `algorithm` column.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "welsh_powell" => Ok(Self::WelshPowell),
            "dsatur" => Ok(Self::Dsatur),
            "tabu_search" => Ok(Self::TabuSearch),
            "simulated_annealing" => Ok(Self::SimulatedAnnealing),
            "genetic" => Ok(Self::Genetic),
            "exact_solver" => Ok(Self::ExactSolver),
            other => Err(GraphColorError::UnknownAlgorithm(other.to_string())),
        }
    }

    /// The canonical name, as accepted by [`Strategy::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::WelshPowell => "welsh_powell",
            Self::Dsatur => "dsatur",
            Self::TabuSearch => "tabu_search",
            Self::SimulatedAnnealing => "simulated_annealing",
            Self::Genetic => "genetic",
            Self::ExactSolver => "exact_solver",
        }
    }
}

/// Result of a single dispatcher call: the colouring, and the wall-clock
/// runtime of the strategy invocation in milliseconds.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub coloring: Coloring,
    pub runtime_ms: f64,
}

/// Runs `strategy` on `g`, timing the call and validating the returned
/// colouring's length. Returns [`GraphColorError::ResultSizeMismatch`] if a
/// strategy ever returns the wrong number of entries — an internal-logic
/// bug, never a data problem (§7).
pub fn run(
    strategy: Strategy,
    g: &Graph,
    config: &CoreConfig,
    sink: &mut dyn SnapshotSink,
) -> Result<RunOutcome> {
    let mut rng = make_rng(config.seed);

    let start = Instant::now();
    let coloring = match strategy {
        Strategy::WelshPowell => welsh_powell(g, sink),
        Strategy::Dsatur => dsatur(g, sink),
        Strategy::TabuSearch => tabu_search(g, &config.tabu, &mut rng, sink),
        Strategy::SimulatedAnnealing => simulated_annealing(g, &config.sa, &mut rng, sink),
        Strategy::Genetic => genetic(g, &config.ga, &mut rng, sink),
        Strategy::ExactSolver => exact_solver(g, &config.exact, sink),
    };
    let runtime_ms = start.elapsed().as_secs_f64() * 1000.0;

    if coloring.len() != g.n() {
        return Err(GraphColorError::ResultSizeMismatch {
            expected: g.n(),
            actual: coloring.len(),
        });
    }

    Ok(RunOutcome {
        coloring,
        runtime_ms,
    })
}
