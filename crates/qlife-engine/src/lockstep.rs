//! Lockstep (synchronous) simulation driver.
//!
//! [`Simulation`] is the user-facing way to run a configured automaton.
//! Each [`step()`](Simulation::step) advances one generation and returns
//! an owned [`GridSnapshot`] plus the generation's metrics. A driver stops
//! when [`should_continue()`](Simulation::should_continue) turns false:
//! the configured iteration limit has been reached, or the last generation
//! was a fixed point.
//!
//! Pacing (sleeping to hold `iterations_per_second`) and rendering belong
//! to the caller.

use qlife_core::{Generation, SnapshotAccess};

use crate::config::{ConfigError, SimConfig};
use crate::grid::Grid;
use crate::metrics::GenerationMetrics;
use crate::snapshot::GridSnapshot;

// ── StepResult ──────────────────────────────────────────────────

/// Result of one [`Simulation::step()`] call.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Copy of the committed generation.
    pub snapshot: GridSnapshot,
    /// Counters for this generation.
    pub metrics: GenerationMetrics,
    /// Whether this generation changed no cell.
    pub stable: bool,
}

/// Outcome of [`Simulation::run()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations advanced by this call.
    pub steps: u64,
    /// Generation index after the call.
    pub generation: Generation,
    /// Whether the run ended on a fixed point.
    pub stable: bool,
}

// ── Simulation ──────────────────────────────────────────────────

/// Single-threaded driver owning one [`Grid`] and its configuration.
///
/// # Example
///
/// ```
/// use qlife_engine::{SimConfig, Simulation};
///
/// let config = SimConfig { width: 16, height: 16, max_iterations: 50, seed: 7, ..SimConfig::default() };
/// let mut sim = Simulation::new(config).unwrap();
/// while sim.should_continue() {
///     let result = sim.step();
///     let _pairs = result.snapshot.pairs().len();
/// }
/// assert!(sim.steps_taken() <= 50);
/// ```
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    config: SimConfig,
    steps_taken: u64,
}

impl Simulation {
    /// Validate `config` and build the initial grid.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let grid = config.build_grid()?;
        Ok(Self {
            grid,
            config,
            steps_taken: 0,
        })
    }

    /// Advance one generation.
    ///
    /// Always steps, even past the iteration limit or a fixed point;
    /// [`should_continue()`](Self::should_continue) is advisory.
    pub fn step(&mut self) -> StepResult {
        let stable = self.grid.iterate();
        self.steps_taken += 1;
        StepResult {
            snapshot: self.grid.snapshot(),
            metrics: self.grid.last_metrics().clone(),
            stable,
        }
    }

    /// `false` once the iteration limit is reached or the grid is stable.
    pub fn should_continue(&self) -> bool {
        if self.grid.is_stable() {
            return false;
        }
        match self.config.iteration_limit() {
            Some(limit) => self.steps_taken < limit,
            None => true,
        }
    }

    /// Step while [`should_continue()`](Self::should_continue) holds, at
    /// most `cap` times.
    ///
    /// The cap keeps unbounded configurations that never settle from
    /// looping forever.
    pub fn run(&mut self, cap: u64) -> RunSummary {
        let mut steps = 0;
        while steps < cap && self.should_continue() {
            self.grid.iterate();
            self.steps_taken += 1;
            steps += 1;
        }
        RunSummary {
            steps,
            generation: self.grid.generation(),
            stable: self.grid.is_stable(),
        }
    }

    /// Rebuild the grid from the stored configuration with a new seed.
    pub fn reset(&mut self, seed: u64) -> Result<GridSnapshot, ConfigError> {
        let config = SimConfig {
            seed,
            ..self.config.clone()
        };
        self.grid = config.build_grid()?;
        self.config = config;
        self.steps_taken = 0;
        Ok(self.grid.snapshot())
    }

    /// Copy of the current generation.
    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Generations advanced since construction or the last reset.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Current generation index.
    pub fn current_generation(&self) -> Generation {
        self.grid.generation()
    }

    /// The current seed.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Metrics from the most recent generation.
    pub fn last_metrics(&self) -> &GenerationMetrics {
        self.grid.last_metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_iterations: i64, seed: u64) -> SimConfig {
        SimConfig {
            width: 12,
            height: 12,
            max_iterations,
            seed,
            start_alive_probability: 0.3,
            ..SimConfig::default()
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let bad = SimConfig {
            height: 0,
            ..SimConfig::default()
        };
        assert!(Simulation::new(bad).is_err());
    }

    #[test]
    fn step_advances_generation() {
        let mut sim = Simulation::new(config(-1, 1)).unwrap();
        let result = sim.step();
        assert_eq!(result.snapshot.generation(), Generation(1));
        assert_eq!(sim.current_generation(), Generation(1));
        assert_eq!(result.stable, sim.grid().is_stable());
        assert_eq!(&result.metrics, sim.last_metrics());
    }

    #[test]
    fn run_respects_iteration_limit() {
        let mut sim = Simulation::new(config(5, 2)).unwrap();
        let summary = sim.run(1_000);
        assert!(summary.steps <= 5);
        assert!(!sim.should_continue());
        if !summary.stable {
            assert_eq!(summary.steps, 5);
        }
    }

    #[test]
    fn zero_limit_never_steps() {
        let mut sim = Simulation::new(config(0, 3)).unwrap();
        assert!(!sim.should_continue());
        assert_eq!(sim.run(10).steps, 0);
    }

    #[test]
    fn empty_grid_stops_on_fixed_point() {
        let cfg = SimConfig {
            start_alive_probability: 0.0,
            ..config(-1, 4)
        };
        let mut sim = Simulation::new(cfg).unwrap();
        let summary = sim.run(100);
        assert_eq!(summary.steps, 1);
        assert!(summary.stable);
        assert!(!sim.should_continue());
    }

    #[test]
    fn cap_bounds_unbounded_runs() {
        let mut sim = Simulation::new(config(-1, 5)).unwrap();
        let summary = sim.run(3);
        assert!(summary.steps <= 3);
    }

    #[test]
    fn reset_reseeds_and_restarts() {
        let mut sim = Simulation::new(config(-1, 6)).unwrap();
        sim.run(4);
        let snap = sim.reset(77).unwrap();
        assert_eq!(snap.generation(), Generation(0));
        assert_eq!(snap.seed(), 77);
        assert_eq!(sim.steps_taken(), 0);
        assert_eq!(sim.seed(), 77);

        let fresh = Simulation::new(config(-1, 77)).unwrap();
        assert_eq!(sim.grid(), fresh.grid());
    }
}
