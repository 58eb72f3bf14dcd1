//! Per-strategy configuration (§6 "Configuration options") and its
//! validation. Defaults mirror the constants spec.md fixes in §4.E–§4.H;
//! everything here is only the knobs §6 explicitly calls out as
//! caller-configurable.

use serde::{Deserialize, Serialize};

use crate::error::{GraphColorError, Result};

/// Tabu Search (TabuCol) tuning. The working tenure and iteration cap are
/// `max(tenure_floor, n / tenure_divisor)` and
/// `max(max_iterations_floor, max_iterations_multiplier * n)` (§4.E).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TabuConfig {
    /// lower bound on the tabu tenure, regardless of graph size
    pub tenure_floor: usize,
    /// tenure grows with `n / tenure_divisor`
    pub tenure_divisor: usize,
    /// lower bound on iterations per K-stage
    pub max_iterations_floor: usize,
    /// iteration cap grows with `max_iterations_multiplier * n`
    pub max_iterations_multiplier: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tenure_floor: 7,
            tenure_divisor: 10,
            max_iterations_floor: 10_000,
            max_iterations_multiplier: 100,
        }
    }
}

impl TabuConfig {
    /// Tenure for a graph of order `n`.
    pub fn tenure(&self, n: usize) -> usize {
        self.tenure_floor.max(n / self.tenure_divisor.max(1))
    }

    /// Iteration cap per K-stage for a graph of order `n`.
    pub fn max_iterations(&self, n: usize) -> usize {
        self.max_iterations_floor.max(self.max_iterations_multiplier * n)
    }

    fn validate(&self) -> Result<()> {
        if self.tenure_divisor == 0 {
            return Err(GraphColorError::InvalidConfiguration(
                "tabu tenure_divisor must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// Simulated Annealing tuning (§4.F).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SaConfig {
    /// lower bound on iterations per K-stage
    pub iters_floor: usize,
    /// iteration cap grows with `iters_multiplier * n`
    pub iters_multiplier: usize,
    /// initial temperature
    pub t0: f64,
    /// terminal temperature; the cooling schedule is geometric from `t0`
    pub t_min: f64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iters_floor: 1_000,
            iters_multiplier: 50,
            t0: 1.0,
            t_min: 1e-4,
        }
    }
}

impl SaConfig {
    /// Iteration cap per K-stage for a graph of order `n`.
    pub fn iters(&self, n: usize) -> usize {
        self.iters_floor.max(self.iters_multiplier * n)
    }

    /// Geometric cooling factor `alpha = (t_min / t0)^(1 / iters)`.
    pub fn alpha(&self, n: usize) -> f64 {
        let iters = self.iters(n) as f64;
        (self.t_min / self.t0).powf(1.0 / iters)
    }

    fn validate(&self) -> Result<()> {
        if !(self.t0 > 0.0) || !(self.t_min > 0.0) || self.t_min >= self.t0 {
            return Err(GraphColorError::InvalidConfiguration(
                "simulated annealing requires 0 < t_min < t0".into(),
            ));
        }
        Ok(())
    }
}

/// Genetic Algorithm tuning (§4.G, §6).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GaConfig {
    /// population size per K-stage (minimum 2)
    pub population_size: usize,
    /// generations per K-stage before giving up (minimum 1)
    pub max_generations: usize,
    /// starting mutation probability, in `[0, 1]`
    pub initial_mutation_rate: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 64,
            max_generations: 500,
            initial_mutation_rate: 0.03,
        }
    }
}

impl GaConfig {
    fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GraphColorError::InvalidConfiguration(
                "GA population_size must be >= 2".into(),
            ));
        }
        if self.max_generations < 1 {
            return Err(GraphColorError::InvalidConfiguration(
                "GA max_generations must be >= 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.initial_mutation_rate) {
            return Err(GraphColorError::InvalidConfiguration(
                "GA initial_mutation_rate must lie in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

/// Exact branch-and-bound tuning (§4.H "Progress reporting", §6).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExactConfig {
    /// seconds between progress log lines, accepted range `[0.05, 600]`
    pub progress_interval_secs: f64,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            progress_interval_secs: 5.0,
        }
    }
}

impl ExactConfig {
    /// Builds a config from the `EXACT_PROGRESS_INTERVAL` environment
    /// variable, falling back to the default when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var("EXACT_PROGRESS_INTERVAL") {
            Err(_) => Ok(Self::default()),
            Ok(raw) => {
                let secs: f64 = raw.parse().map_err(|_| {
                    GraphColorError::InvalidConfiguration(format!(
                        "EXACT_PROGRESS_INTERVAL must be a number, got {raw:?}"
                    ))
                })?;
                let cfg = Self {
                    progress_interval_secs: secs,
                };
                cfg.validate()?;
                Ok(cfg)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if !(0.05..=600.0).contains(&self.progress_interval_secs) {
            return Err(GraphColorError::InvalidConfiguration(format!(
                "EXACT_PROGRESS_INTERVAL must lie in [0.05, 600], got {}",
                self.progress_interval_secs
            )));
        }
        Ok(())
    }
}

/// Aggregates the per-strategy knobs plus the RNG seed and snapshot toggle
/// the dispatcher threads through to whichever strategy is selected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct CoreConfig {
    /// explicit RNG seed for regression testing; `None` seeds from entropy
    pub seed: Option<u64>,
    /// whether to record per-step snapshots (§4.I)
    pub save_snapshots: bool,
    /// Tabu Search tuning
    pub tabu: TabuConfig,
    /// Simulated Annealing tuning
    pub sa: SaConfig,
    /// Genetic Algorithm tuning
    pub ga: GaConfig,
    /// Exact solver tuning
    pub exact: ExactConfig,
}

impl CoreConfig {
    /// Validates every sub-config, surfacing the first violation.
    pub fn validate(&self) -> Result<()> {
        self.tabu.validate()?;
        self.sa.validate()?;
        self.ga.validate()?;
        self.exact.validate()?;
        Ok(())
    }
}
