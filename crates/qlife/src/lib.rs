//! qlife: a toroidal Game of Life variant with superposed cells and
//! pairwise entanglement.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all qlife sub-crates. For most users, adding `qlife` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use qlife::prelude::*;
//!
//! let config = SimConfig {
//!     width: 32,
//!     height: 32,
//!     max_iterations: 100,
//!     seed: 42,
//!     ..SimConfig::default()
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! while sim.should_continue() {
//!     let result = sim.step();
//!     let _superposed = result.snapshot.count(CellState::Superposed);
//! }
//! assert!(sim.steps_taken() <= 100);
//!
//! // Same seed, same starting generation.
//! let a = Simulation::new(sim.config().clone()).unwrap();
//! let b = Simulation::new(sim.config().clone()).unwrap();
//! assert_eq!(
//!     qlife::replay::snapshot_hash(&a.snapshot()),
//!     qlife::replay::snapshot_hash(&b.snapshot()),
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `qlife-core` | Cell states, positions, generation counter, snapshot trait |
//! | [`space`] | `qlife-space` | Toroidal topology and Moore neighbourhood |
//! | [`engine`] | `qlife-engine` | Grid, entanglement, generation stepping, lockstep driver |
//! | [`replay`] | `qlife-replay` | Run fingerprinting and divergence reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`qlife-core`).
///
/// Contains [`types::CellState`], [`types::Position`],
/// [`types::Generation`] and the [`types::SnapshotAccess`] trait.
pub use qlife_core as types;

/// Toroidal topology (`qlife-space`).
///
/// [`space::Torus`] wraps coordinates, maps them to row-major indices and
/// enumerates the eight Moore neighbours in a fixed order.
pub use qlife_space as space;

/// Generation stepping (`qlife-engine`).
///
/// [`engine::Grid`] for direct control over one grid,
/// [`engine::Simulation`] for configured lockstep runs.
pub use qlife_engine as engine;

/// Determinism verification (`qlife-replay`).
///
/// Fingerprint generations with [`replay::snapshot_hash`] and locate the
/// first divergence with [`replay::replay_and_compare`].
pub use qlife_replay as replay;

/// Common imports for typical qlife usage.
///
/// ```rust
/// use qlife::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use qlife_core::{CellState, Generation, Position, SnapshotAccess};

    // Space
    pub use qlife_space::Torus;

    // Errors
    pub use qlife_engine::{ConfigError, GridError};
    pub use qlife_space::SpaceError;

    // Engine
    pub use qlife_engine::{
        EntangledPair, GenerationMetrics, Grid, GridSnapshot, RunSummary, SimConfig, Simulation,
        StepResult,
    };
}
