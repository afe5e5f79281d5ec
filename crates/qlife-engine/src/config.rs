//! Run configuration and validation.
//!
//! [`SimConfig`] is the bundle an outer driver (CLI, embedding
//! application) hands to the engine. [`validate()`](SimConfig::validate)
//! checks every field up front; [`build_grid()`](SimConfig::build_grid)
//! turns a valid configuration into a randomly populated [`Grid`].

use std::error::Error;
use std::fmt;

use qlife_space::Torus;

use crate::grid::{Grid, GridError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions or initial probability are invalid.
    Grid(GridError),
    /// `iterations_per_second` is zero.
    InvalidIterationRate {
        /// The invalid value.
        value: u32,
    },
    /// `max_iterations` is below `-1`.
    InvalidMaxIterations {
        /// The invalid value.
        value: i64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidIterationRate { value } => {
                write!(f, "iterations_per_second must be positive, got {value}")
            }
            Self::InvalidMaxIterations { value } => {
                write!(f, "max_iterations must be -1 (unbounded) or >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Configuration for one simulation run.
///
/// `width`, `height`, `seed` and `start_alive_probability` shape the grid.
/// `max_iterations` bounds the lockstep driver. `iterations_per_second`
/// is carried for real-time pacing loops and is not read by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid width in cells. Default: 24.
    pub width: u32,
    /// Grid height in cells. Default: 24.
    pub height: u32,
    /// Generation limit; `-1` means unbounded. Default: -1.
    pub max_iterations: i64,
    /// Pacing target for real-time drivers. Default: 9 999 999.
    pub iterations_per_second: u32,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Probability that each cell starts alive. Default: 0.25.
    pub start_alive_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 24,
            height: 24,
            max_iterations: -1,
            iterations_per_second: 9_999_999,
            seed: 0,
            start_alive_probability: 0.25,
        }
    }
}

impl SimConfig {
    /// Check every field.
    ///
    /// Returns the first violation found, in field order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Torus::new(self.width, self.height).map_err(GridError::from)?;
        if !(0.0..=1.0).contains(&self.start_alive_probability) {
            return Err(GridError::InvalidProbability {
                value: self.start_alive_probability,
            }
            .into());
        }
        if self.max_iterations < -1 {
            return Err(ConfigError::InvalidMaxIterations {
                value: self.max_iterations,
            });
        }
        if self.iterations_per_second == 0 {
            return Err(ConfigError::InvalidIterationRate {
                value: self.iterations_per_second,
            });
        }
        Ok(())
    }

    /// `None` for an unbounded run, otherwise the generation limit.
    pub fn iteration_limit(&self) -> Option<u64> {
        u64::try_from(self.max_iterations).ok()
    }

    /// Validate and build a randomly populated grid.
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        self.validate()?;
        Ok(Grid::random(
            self.width,
            self.height,
            self.seed,
            self.start_alive_probability,
        )?)
    }
}
