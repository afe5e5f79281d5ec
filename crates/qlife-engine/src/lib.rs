//! Generation stepping for the qlife automaton.
//!
//! [`Grid`] owns a toroidal array of [`CellState`](qlife_core::CellState)
//! values, the active [`Entanglements`], and the seeded RNG that drives
//! every random decision. [`Grid::iterate`] advances one generation.
//! [`Simulation`] wraps a grid built from a validated [`SimConfig`] and
//! drives it in lockstep, stopping at the configured iteration limit or at
//! a fixed point.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod entangle;
pub mod grid;
pub mod lockstep;
pub mod metrics;
pub mod rule;
pub mod snapshot;

pub use config::{ConfigError, SimConfig};
pub use entangle::{EntangledPair, Entanglements};
pub use grid::{Grid, GridError};
pub use lockstep::{RunSummary, Simulation, StepResult};
pub use metrics::GenerationMetrics;
pub use rule::Transition;
pub use snapshot::GridSnapshot;
